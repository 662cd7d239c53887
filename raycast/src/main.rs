#[macro_use]
extern crate log;

pub mod config;
pub mod geometry;
pub mod objects;
pub mod render;
pub mod scene;

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

use custom_error::custom_error;
use env_logger::Env;

use ppm_support::PPMFormatSupportPlugin;
use raycast_core::models::image::Image;
use raycast_core::models::io::{ImageIOError, ImageWriter, ImageWriterOptions};
use raycast_core::plugins::ImageFormatSupportPlugin;
use raycast_core::utils::print_intro;

use config::{ConfigError, RenderConfig, STDOUT_OUTPUT};
use render::render::{Render, RenderError};
use scene::scene::{Scene, SceneError};

const DEFAULT_LOGGING_LEVEL: &str = "info";

custom_error! {AppError
    Config {source: ConfigError} = "{source}",
    Scene {source: SceneError} = "{source}",
    Render {source: RenderError} = "{source}",
    ImageIO {source: ImageIOError} = "{source}",
    FailedToSave {path: String, description: String} = "Failed to save result image to {path}: {description}",
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    print_intro();

    let args: Vec<String> = env::args().collect();
    debug!("args are: {:?}", args);

    if let Err(err) = run(&args) {
        error!("{}", err);
        process::exit(1);
    }

    info!("done");
}

fn run(args: &[String]) -> Result<(), AppError> {
    let config = RenderConfig::from_args(args)?;
    debug!("config is: {:?}", config);

    let scene = Scene::from_config(&config)?;
    let camera = scene.camera();
    let mut output = Image::new(camera.image_width(), camera.image_height());

    info!("rendering {}x{} image with {:?} renderer", output.width, output.height, config.renderer);
    // progress goes to stderr and is not drawn when stderr is not a terminal
    config.renderer.create(true).render(&scene, &mut output)?;

    let output_format_support: Box<dyn ImageFormatSupportPlugin> = Box::new(PPMFormatSupportPlugin::new());
    info!("saving rendered image as {}", output_format_support.format_name());

    let image_bytes = output_format_support.writer().write(&output, &ImageWriterOptions::default())?;
    save(config.output(), &image_bytes)
}

fn save(path: &str, image_bytes: &[u8]) -> Result<(), AppError> {
    let result = if path == STDOUT_OUTPUT {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(image_bytes).and_then(|_| handle.flush())
    } else {
        fs::write(path, image_bytes)
    };

    result.map_err(|err| AppError::FailedToSave {
        path: path.to_string(),
        description: err.to_string(),
    })?;

    info!("result saved to {}", path);
    Ok(())
}
