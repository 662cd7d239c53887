use rayon::prelude::*;

use raycast_core::models::image::Image;

use crate::scene::scene::Scene;

use super::basic::render_row;
use super::render::{Render, RenderError, ScanlineProgress, check_image_size};

/// Renders rows in parallel. Every row is owned by exactly one worker, so the output
/// matches [`super::basic::BasicRender`] pixel for pixel.
pub struct MultithreadedRender {
    show_progress: bool,
}

impl MultithreadedRender {

    pub fn new(show_progress: bool) -> Self {
        Self {
            show_progress,
        }
    }
}

impl Render for MultithreadedRender {

    fn render(&self, scene: &Scene, render_to: &mut Image) -> Result<(), RenderError> {
        check_image_size(scene, render_to)?;

        let width = render_to.width;
        let progress = ScanlineProgress::new(render_to.height, self.show_progress);

        debug!("rendering {} rows on {} threads", render_to.height, rayon::current_num_threads());

        render_to.pixels.par_chunks_mut(width).enumerate().try_for_each(|(row, output)| {
            render_row(scene, row, output)?;
            progress.finish_row();
            Ok::<(), RenderError>(())
        })?;

        progress.finish();
        Ok(())
    }
}
