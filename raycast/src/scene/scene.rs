use custom_error::custom_error;

use crate::config::RenderConfig;
use crate::geometry::errors::GeometryError;
use crate::objects::sphere::Sphere;

use super::{background::Background, camera::{Camera, image_height_for}};

custom_error! {pub SceneError
    InvalidImageSize {width: usize, height: usize} = "Invalid image size: {width}x{height}",
    InvalidCamera {description: String} = "Invalid camera: {description}",
    Geometry {source: GeometryError} = "Invalid scene geometry: {source}",
}

pub struct Scene {
    camera: Camera,
    sphere: Sphere,
    background: Background,
}

impl Scene {

    pub fn new(camera: Camera, sphere: Sphere, background: Background) -> Self {
        Self {
            camera,
            sphere,
            background,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Result<Self, SceneError> {
        let image_width = config.image.width;
        if !(config.image.aspect_ratio.is_finite() && config.image.aspect_ratio > 0.0) {
            return Err(SceneError::InvalidCamera {
                description: format!("aspect ratio should be positive, got {}", config.image.aspect_ratio),
            });
        }
        let image_height = image_height_for(image_width, config.image.aspect_ratio);

        let camera = Camera::new(
            config.camera.center,
            config.camera.focal_length,
            config.camera.viewport_height,
            image_width,
            image_height,
        )?;
        let sphere = Sphere::new(config.sphere.center, config.sphere.radius)?;
        let background = Background::new(config.background.bottom, config.background.top);

        Ok(Self::new(camera, sphere, background))
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn sphere(&self) -> &Sphere {
        &self.sphere
    }

    pub fn background(&self) -> &Background {
        &self.background
    }
}
