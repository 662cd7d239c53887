use super::pixel::Pixel;

#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Pixel>, // starting at top left pixel of the image, pos = y * width + x
}

impl Image {

    pub fn new(width: usize, height: usize) -> Self {
        Image {
            width,
            height,
            pixels: vec![Pixel::zero(); width * height],
        }
    }

    /// 4x4 fixture: white with a blue L-shape and one red pixel.
    #[cfg(any(test, feature = "test-fixtures"))]
    pub fn test_image() -> Self {
        let mut image = Self::new(4, 4);

        let white = Pixel::from_rgb(255, 255, 255);
        let blue = Pixel::from_rgb(3, 155, 229);
        let red = Pixel::from_rgb(221, 47, 47);

        image.fill(white);
        image.set_pixel(1, 1, blue);
        image.set_pixel(2, 1, blue);
        image.set_pixel(1, 2, blue);
        image.set_pixel(2, 2, red);

        image
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) {
        self.pixels[y * self.width + x] = pixel;
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Pixel {
        self.pixels[y * self.width + x]
    }

    pub fn fill(&mut self, color: Pixel) {
        for pixel in self.pixels.iter_mut() {
            *pixel = color;
        }
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, Pixel> {
        self.pixels.chunks(self.width.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_layout_is_row_major() {
        let image = Image::test_image();

        assert_eq!(image.pixels.len(), 16);
        assert_eq!(image.pixels[1 * 4 + 2], Pixel::from_rgb(3, 155, 229));
        assert_eq!(image.get_pixel(2, 2), Pixel::from_rgb(221, 47, 47));
        assert_eq!(image.get_pixel(0, 0), Pixel::white());
    }

    #[test]
    fn test_rows() {
        let image = Image::new(3, 2);
        let rows: Vec<&[Pixel]> = image.rows().collect();

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 3));
    }
}
