use std::mem::size_of;

use raycast_core::models::pixel::Pixel;

use crate::geometry::{errors::GeometryError, ray::Ray, vector3::{Point3, Vector3}};

use super::scene::SceneError;

/// Pinhole camera looking down -z. The viewport is placed `focal_length` in front of
/// the camera center and split into one cell per image pixel.
#[derive(Clone, Debug)]
pub struct Camera {

    center: Point3,
    image_width: usize,
    image_height: usize,

    pixel00_location: Point3,
    pixel_delta_u: Vector3,
    pixel_delta_v: Vector3,
}

impl Camera {

    pub fn new(
        center: Point3,
        focal_length: f64,
        viewport_height: f64,
        image_width: usize,
        image_height: usize,
    ) -> Result<Self, SceneError> {
        if image_width == 0 || image_height == 0 || !fits_in_memory(image_width, image_height) {
            return Err(SceneError::InvalidImageSize { width: image_width, height: image_height });
        }
        if !(focal_length.is_finite() && focal_length > 0.0) {
            return Err(SceneError::InvalidCamera {
                description: format!("focal length should be positive, got {}", focal_length),
            });
        }
        if !(viewport_height.is_finite() && viewport_height > 0.0) {
            return Err(SceneError::InvalidCamera {
                description: format!("viewport height should be positive, got {}", viewport_height),
            });
        }
        if !center.is_finite() {
            return Err(SceneError::InvalidCamera {
                description: format!("camera center should be finite, got {}", center),
            });
        }

        let viewport_width = viewport_height * (image_width as f64 / image_height as f64);

        // v points down so that row 0 is the top of the image
        let viewport_u = Vector3::new(viewport_width, 0.0, 0.0);
        let viewport_v = Vector3::new(0.0, -viewport_height, 0.0);

        let pixel_delta_u = viewport_u / image_width as f64;
        let pixel_delta_v = viewport_v / image_height as f64;

        let viewport_upper_left = center
            - Vector3::new(0.0, 0.0, focal_length)
            - viewport_u / 2.0
            - viewport_v / 2.0;
        let pixel00_location = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        Ok(Self {
            center,
            image_width,
            image_height,
            pixel00_location,
            pixel_delta_u,
            pixel_delta_v,
        })
    }

    pub fn center(&self) -> &Point3 {
        &self.center
    }

    pub fn image_width(&self) -> usize {
        self.image_width
    }

    pub fn image_height(&self) -> usize {
        self.image_height
    }

    pub fn pixel_center(&self, column: usize, row: usize) -> Point3 {
        self.pixel00_location
            + (column as f64 * self.pixel_delta_u)
            + (row as f64 * self.pixel_delta_v)
    }

    pub fn ray_for_pixel(&self, column: usize, row: usize) -> Result<Ray, GeometryError> {
        Ray::new(self.center, self.pixel_center(column, row) - self.center)
    }
}

// an image buffer of this size must be addressable
fn fits_in_memory(image_width: usize, image_height: usize) -> bool {
    image_width.checked_mul(image_height)
        .and_then(|pixels| pixels.checked_mul(size_of::<Pixel>()))
        .map_or(false, |bytes| bytes <= isize::MAX as usize)
}

/// Image height for the given width and aspect ratio, never less than one row.
pub fn image_height_for(image_width: usize, aspect_ratio: f64) -> usize {
    ((image_width as f64 / aspect_ratio) as usize).max(1)
}
