use raycast_core::models::image::Image;
use raycast_core::models::pixel::Pixel;

use crate::scene::scene::Scene;

use super::render::{Render, RenderError, ScanlineProgress, check_image_size, color_to_pixel};
use super::shader::ray_color;

pub struct BasicRender {
    show_progress: bool,
}

impl BasicRender {

    pub fn new(show_progress: bool) -> Self {
        Self {
            show_progress,
        }
    }
}

impl Render for BasicRender {

    fn render(&self, scene: &Scene, render_to: &mut Image) -> Result<(), RenderError> {
        check_image_size(scene, render_to)?;

        let width = render_to.width;
        let progress = ScanlineProgress::new(render_to.height, self.show_progress);

        for (row, output) in render_to.pixels.chunks_mut(width).enumerate() {
            render_row(scene, row, output)?;
            progress.finish_row();
        }

        progress.finish();
        Ok(())
    }
}

/// Traces one ray per pixel of `row`, left to right.
pub fn render_row(scene: &Scene, row: usize, output: &mut [Pixel]) -> Result<(), RenderError> {
    let camera = scene.camera();

    for (column, pixel) in output.iter_mut().enumerate() {
        let ray = camera.ray_for_pixel(column, row)?;
        *pixel = color_to_pixel(&ray_color(&ray, scene)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::config::RenderConfig;

    use super::*;

    fn square_scene(width: usize) -> Scene {
        let mut config = RenderConfig::default();
        config.image.width = width;
        config.image.aspect_ratio = 1.0;
        Scene::from_config(&config).unwrap()
    }

    #[test]
    fn test_center_pixel_shows_normal_facing_camera() {
        let scene = square_scene(101);
        let mut output = Image::new(101, 101);

        BasicRender::new(false).render(&scene, &mut output).unwrap();

        assert_eq!(output.get_pixel(50, 50), Pixel::from_rgb(127, 127, 255));
    }

    #[test]
    fn test_corners_show_background() {
        let scene = square_scene(101);
        let mut output = Image::new(101, 101);

        BasicRender::new(false).render(&scene, &mut output).unwrap();

        let top_left = output.get_pixel(0, 0);
        let bottom_left = output.get_pixel(0, 100);
        assert_eq!(top_left.blue, 255);
        // sky gets bluer towards the top
        assert!(top_left.red < bottom_left.red);
        assert_eq!(output.get_pixel(100, 0), top_left);
    }

    #[test]
    fn test_reference_scene_top_left_pixel() {
        let scene = Scene::from_config(&RenderConfig::default()).unwrap();
        let mut output = Image::new(400, 225);

        BasicRender::new(false).render(&scene, &mut output).unwrap();

        let ray = scene.camera().ray_for_pixel(0, 0).unwrap();
        let expected = color_to_pixel(&scene.background().color(ray.direction()).unwrap());
        assert_eq!(output.get_pixel(0, 0), expected);
    }

    #[test]
    fn test_size_mismatch() {
        let scene = square_scene(10);
        let mut output = Image::new(10, 11);

        assert!(BasicRender::new(false).render(&scene, &mut output).is_err());
    }
}
