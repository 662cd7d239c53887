use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

use custom_error::custom_error;
use indicatif::{ProgressBar, ProgressStyle};
use raycast_core::models::image::Image;
use raycast_core::models::pixel::Pixel;
use serde::{Deserialize, Serialize};

use crate::geometry::errors::GeometryError;
use crate::geometry::vector3::Color;
use crate::scene::scene::Scene;

use super::basic::BasicRender;
use super::multithreaded::MultithreadedRender;

custom_error! {pub RenderError
    ImageSizeMismatch {expected: String, actual: String} = "Output image is {actual} but camera renders {expected}",
    Geometry {source: GeometryError} = "Failed to trace ray: {source}",
    UnknownRenderer {name: String} = "Unknown renderer: {name} (expected basic or multithreaded)",
}

pub trait Render {

    fn render(&self, scene: &Scene, render_to: &mut Image) -> Result<(), RenderError>;
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    Basic,
    Multithreaded,
}

impl Default for RendererKind {

    fn default() -> Self {
        RendererKind::Basic
    }
}

impl FromStr for RendererKind {

    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(RendererKind::Basic),
            "multithreaded" => Ok(RendererKind::Multithreaded),
            other => Err(RenderError::UnknownRenderer { name: other.to_string() }),
        }
    }
}

impl RendererKind {

    pub fn create(&self, show_progress: bool) -> Box<dyn Render> {
        match self {
            RendererKind::Basic => Box::new(BasicRender::new(show_progress)),
            RendererKind::Multithreaded => Box::new(MultithreadedRender::new(show_progress)),
        }
    }
}

pub fn color_to_pixel(color: &Color) -> Pixel {
    Pixel::from_intensities(color.x, color.y, color.z)
}

pub(crate) fn check_image_size(scene: &Scene, image: &Image) -> Result<(), RenderError> {
    let camera = scene.camera();
    if camera.image_width() != image.width || camera.image_height() != image.height {
        return Err(RenderError::ImageSizeMismatch {
            expected: format!("{}x{}", camera.image_width(), camera.image_height()),
            actual: format!("{}x{}", image.width, image.height),
        });
    }

    Ok(())
}

/// Counts finished scanlines and shows how many are left. Rows may finish in any
/// order and from any thread.
pub(crate) struct ScanlineProgress {
    bar: ProgressBar,
    remaining: AtomicUsize,
}

impl ScanlineProgress {

    pub fn new(height: usize, show_progress: bool) -> Self {
        let bar = if show_progress {
            let bar = ProgressBar::new(height as u64);
            bar.set_style(
                ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:40} scanlines remaining: {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
            );
            bar
        } else {
            ProgressBar::hidden()
        };
        bar.set_message(height.to_string());

        Self {
            bar,
            remaining: AtomicUsize::new(height),
        }
    }

    /// Marks one row as done and returns the number of rows still to render.
    pub fn finish_row(&self) -> usize {
        let remaining = self.remaining.fetch_sub(1, Ordering::Relaxed).saturating_sub(1);
        trace!("scanlines remaining: {}", remaining);

        self.bar.set_message(remaining.to_string());
        self.bar.inc(1);
        remaining
    }

    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Relaxed)
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
