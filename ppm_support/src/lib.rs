use raycast_core::{plugins::ImageFormatSupportPlugin, models::io::{ImageReader, ImageWriter}};

use reader::PPMReader;
use writer::PPMWriter;

pub mod reader;
pub mod writer;

/// Maximum channel value written to the header unless `max_color_value` is set.
pub const DEFAULT_MAX_COLOR_VALUE: u32 = 255;

#[derive(Default)]
pub struct PPMFormatSupportPlugin {
}

impl PPMFormatSupportPlugin {

    pub fn new() -> Self {
        PPMFormatSupportPlugin {}
    }
}

impl ImageFormatSupportPlugin for PPMFormatSupportPlugin {

    fn format_name(&self) -> String {
        "PPM".to_string()
    }

    fn reader(&self) -> Box<dyn ImageReader> {
        Box::new(PPMReader::new())
    }

    fn writer(&self) -> Box<dyn ImageWriter> {
        Box::new(PPMWriter::new())
    }
}
