use std::collections::HashMap;

use custom_error::custom_error;

use super::image::Image;

custom_error! {pub ImageIOError
    FailedToRead {description: String} = "Failed to read image: {description}",
    FailedToWrite {description: String} = "Failed to write image: {description}",
    InvalidOptions {description: String} = "Invalid options are set for this io operation: {description}",
}

pub trait ImageReader {

    fn read(&self, data: &[u8]) -> Result<Image, ImageIOError>;
}

pub trait ImageWriter {

    fn write(&self, image: &Image, options: &ImageWriterOptions) -> Result<Vec<u8>, ImageIOError>;
}

#[derive(Clone, Debug, Default)]
pub struct ImageWriterOptions {

    options: HashMap<String, String>,
}

impl ImageWriterOptions {

    pub fn with_option(&self, key: &str, value: &str) -> Self {
        let mut options = self.options.clone();
        options.insert(key.to_string(), value.to_string());

        Self {
            options,
        }
    }

    pub fn with_option_u32(&self, key: &str, value: u32) -> Self {
        self.with_option(key, &value.to_string())
    }

    pub fn get_u32(&self, key: &str, default: u32) -> Result<u32, ImageIOError> {
        let value = match self.options.get(key) {
            Some(v) => v,
            None => return Ok(default),
        };

        value.trim().parse().map_err(|err| ImageIOError::InvalidOptions {
            description: format!("failed to parse option as u32: {}", err),
        })
    }
}
