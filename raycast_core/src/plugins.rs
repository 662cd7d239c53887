use crate::models::io::{ImageReader, ImageWriter};

pub trait ImageFormatSupportPlugin {

    fn format_name(&self) -> String;

    fn reader(&self) -> Box<dyn ImageReader>;
    fn writer(&self) -> Box<dyn ImageWriter>;
}
