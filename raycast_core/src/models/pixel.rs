#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {

    pub fn zero() -> Self {
        Self::black()
    }

    pub fn white() -> Self {
        Self::from_rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::from_rgb(0, 0, 0)
    }

    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba(red, green, blue, 255)
    }

    pub fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Pixel {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Quantizes intensities in [0, 1] to 8-bit channels. Finite values outside the
    /// range are clamped first; NaN and infinities become 0.
    pub fn from_intensities(red: f64, green: f64, blue: f64) -> Self {
        Self::from_rgb(quantize(red), quantize(green), quantize(blue))
    }
}

fn quantize(intensity: f64) -> u8 {
    let intensity = if !intensity.is_finite() {
        0.0
    } else {
        intensity.max(0.0).min(1.0)
    };

    (255.999 * intensity) as u8
}
