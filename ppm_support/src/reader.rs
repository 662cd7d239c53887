use std::str::from_utf8;

use log::debug;
use raycast_core::models::image::Image;
use raycast_core::models::io::{ImageIOError, ImageReader};
use raycast_core::models::pixel::Pixel;

const MAX_COLOR_VALUE_LIMIT: usize = 65535;

#[derive(Debug)]
struct Header {
    magic_number: String,
    width: usize,
    height: usize,
    max_color_value: usize,
}

trait RasterReader {
    fn read_raster(&self, header: &Header, data: &[u8]) -> Result<Vec<Pixel>, ImageIOError>;
}

struct P3RasterReader {
}

impl RasterReader for P3RasterReader {
    fn read_raster(&self, header: &Header, mut data: &[u8]) -> Result<Vec<Pixel>, ImageIOError> {
        let pixel_count = header.width.checked_mul(header.height).ok_or_else(|| failed_to_read(format!(
            "image size {}x{} is too large", header.width, header.height
        )))?;
        // every pixel needs at least 6 bytes ("0 0 0 "), so the raster bounds the allocation
        let mut pixels = Vec::with_capacity(pixel_count.min(data.len() / 6 + 1));

        for _ in 0..pixel_count {
            let mut channels = [0u8; 3];
            for channel in channels.iter_mut() {
                data = skip_comments(skip_whitespaces(data));
                let (value, rest) = read_number(data)?;
                if value > header.max_color_value {
                    return Err(failed_to_read(format!(
                        "channel value {} is above max color value {}", value, header.max_color_value
                    )));
                }
                *channel = normalize(value, header.max_color_value);
                data = rest;
            }
            pixels.push(Pixel::from_rgb(channels[0], channels[1], channels[2]));
        }

        Ok(pixels)
    }
}

fn get_raster_reader(magic_number: &str) -> Result<Box<dyn RasterReader>, ImageIOError> {
    match magic_number {
        "P3" => Ok(Box::new(P3RasterReader {})),
        other => Err(failed_to_read(format!(
            "current PPM reader does not support {} magic number for PPM format", other
        ))),
    }
}

fn normalize(value: usize, max_value: usize) -> u8 {
    (255 * value / max_value) as u8
}

fn is_whitespace(char: u8) -> bool {
    // 9 - TAB; 10 - LF; 13 - CR; 32 - SPACE;
    char == 9 || char == 10 || char == 13 || char == 32
}

fn read_number(data: &[u8]) -> Result<(usize, &[u8]), ImageIOError> {
    let end = data.iter().position(|v| is_whitespace(*v)).unwrap_or(data.len());
    if end == 0 {
        return Err(failed_to_read("unexpected end of data".to_string()));
    }

    let text = from_utf8(&data[0..end]).map_err(|err| failed_to_read(err.to_string()))?;
    let value = text.parse::<usize>()
        .map_err(|err| failed_to_read(format!("failed to parse number \"{}\": {}", text, err)))?;

    Ok((value, &data[end..]))
}

fn skip_whitespaces(data: &[u8]) -> &[u8] {
    let start = data.iter().position(|v| !is_whitespace(*v)).unwrap_or(data.len());
    &data[start..]
}

fn skip_comments(data: &[u8]) -> &[u8] {
    // 35 - #
    // 10 - LF
    if data.first() == Some(&35) {
        match data.iter().position(|v| *v == 10) {
            Some(end) => skip_comments(skip_whitespaces(&data[(end + 1)..])),
            None => &data[data.len()..],
        }
    } else {
        data
    }
}

fn read_header(data: &[u8]) -> Result<(Header, &[u8]), ImageIOError> {
    if data.len() < 2 {
        return Err(failed_to_read("data is too short for PPM header".to_string()));
    }
    let magic_number = from_utf8(&data[0..2])
        .map_err(|_| failed_to_read("bad data for magic number in PPM header".to_string()))?;

    let data = skip_comments(skip_whitespaces(&data[2..]));
    let (width, data) = read_number(data)?;
    let data = skip_comments(skip_whitespaces(data));
    let (height, data) = read_number(data)?;
    let data = skip_comments(skip_whitespaces(data));
    let (max_color_value, data) = read_number(data)?;

    if max_color_value == 0 || max_color_value > MAX_COLOR_VALUE_LIMIT {
        return Err(failed_to_read(format!(
            "max color value should be in 1..={}, got {}", MAX_COLOR_VALUE_LIMIT, max_color_value
        )));
    }

    Ok((Header {
        magic_number: magic_number.to_owned(),
        width,
        height,
        max_color_value,
    }, data))
}

fn failed_to_read(description: String) -> ImageIOError {
    ImageIOError::FailedToRead { description }
}

#[derive(Default)]
pub struct PPMReader {
}

impl PPMReader {

    pub const fn new() -> Self {
        PPMReader {}
    }
}

impl ImageReader for PPMReader {

    fn read(&self, data: &[u8]) -> Result<Image, ImageIOError> {
        let (header, data) = read_header(data)?;
        debug!("read PPM header: {:?}", header);

        let raster_reader = get_raster_reader(header.magic_number.as_str())?;

        Ok(Image {
            width: header.width,
            height: header.height,
            pixels: raster_reader.read_raster(&header, data)?,
        })
    }
}
