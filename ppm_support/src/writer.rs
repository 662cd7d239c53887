use std::fmt::Write;

use raycast_core::models::image::Image;
use raycast_core::models::io::{ImageIOError, ImageWriter, ImageWriterOptions};
use raycast_core::models::pixel::Pixel;

use crate::DEFAULT_MAX_COLOR_VALUE;

/// Writes plain-text (P3) images: a header with the magic number, the image size and
/// the maximum channel value, followed by one `R G B` triplet per line.
#[derive(Default)]
pub struct PPMWriter {
}

impl PPMWriter {

    pub fn new() -> Self {
        PPMWriter {}
    }
}

impl ImageWriter for PPMWriter {

    fn write(&self, image: &Image, options: &ImageWriterOptions) -> Result<Vec<u8>, ImageIOError> {
        let max_color_value = options.get_u32("max_color_value", DEFAULT_MAX_COLOR_VALUE)?;
        if max_color_value == 0 || max_color_value > 65535 {
            return Err(ImageIOError::InvalidOptions {
                description: format!("max_color_value should be in 1..=65535, got {}", max_color_value),
            });
        }

        if image.pixels.len() != image.width * image.height {
            return Err(ImageIOError::FailedToWrite {
                description: format!(
                    "image is {}x{} but has {} pixels",
                    image.width,
                    image.height,
                    image.pixels.len()
                ),
            });
        }

        let mut text = String::with_capacity(image.pixels.len() * 12 + 32);
        write_text(&mut text, image, max_color_value)
            .map_err(|err| ImageIOError::FailedToWrite { description: err.to_string() })?;

        Ok(text.into_bytes())
    }
}

fn write_text(text: &mut String, image: &Image, max_color_value: u32) -> std::fmt::Result {
    writeln!(text, "P3")?;
    writeln!(text, "{} {}", image.width, image.height)?;
    writeln!(text, "{}", max_color_value)?;

    for row in image.rows() {
        for pixel in row {
            let (red, green, blue) = scale(pixel, max_color_value);
            writeln!(text, "{} {} {}", red, green, blue)?;
        }
    }

    Ok(())
}

fn scale(pixel: &Pixel, max_color_value: u32) -> (u32, u32, u32) {
    if max_color_value == 255 {
        return (pixel.red as u32, pixel.green as u32, pixel.blue as u32);
    }

    let scale_channel = |v: u8| v as u32 * max_color_value / 255;
    (scale_channel(pixel.red), scale_channel(pixel.green), scale_channel(pixel.blue))
}
