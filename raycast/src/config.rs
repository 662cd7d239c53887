use std::fs;
use std::path::Path;

use custom_error::custom_error;
use serde::{Deserialize, Serialize};

use crate::geometry::vector3::{Color, Point3, Vector3};
use crate::render::render::RendererKind;
use crate::scene::background::{SKY_BLUE, WHITE};

/// Output path that means "write the image to stdout".
pub const STDOUT_OUTPUT: &str = "-";

custom_error! {pub ConfigError
    FailedToRead {path: String, description: String} = "Failed to read config {path}: {description}",
    FailedToParse {description: String} = "Failed to parse config: {description}",
    InvalidArgument {name: String, description: String} = "Invalid argument --{name}: {description}",
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub image: ImageConfig,
    pub camera: CameraConfig,
    pub sphere: SphereConfig,
    pub background: BackgroundConfig,
    pub renderer: RendererKind,
    pub output: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageConfig {
    pub width: usize,
    pub aspect_ratio: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub center: Point3,
    pub focal_length: f64,
    pub viewport_height: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SphereConfig {
    pub center: Point3,
    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackgroundConfig {
    pub bottom: Color,
    pub top: Color,
}

impl Default for ImageConfig {

    fn default() -> Self {
        Self {
            width: 400,
            aspect_ratio: 16.0 / 9.0,
        }
    }
}

impl Default for CameraConfig {

    fn default() -> Self {
        Self {
            center: Vector3::zero(),
            focal_length: 1.0,
            viewport_height: 2.0,
        }
    }
}

impl Default for SphereConfig {

    fn default() -> Self {
        Self {
            center: Vector3::new(0.0, 0.0, -1.0),
            radius: 0.5,
        }
    }
}

impl Default for BackgroundConfig {

    fn default() -> Self {
        Self {
            bottom: WHITE,
            top: SKY_BLUE,
        }
    }
}

impl RenderConfig {

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|err| ConfigError::FailedToParse { description: err.to_string() })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|err| ConfigError::FailedToRead {
            path: path.to_string_lossy().to_string(),
            description: err.to_string(),
        })?;

        Self::from_json(&json)
    }

    /// Builds the config from `--name=value` arguments: `--config` names a JSON file
    /// used as the base, the remaining arguments override single values.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut config = match argument_value(args, "config") {
            Some(path) => {
                info!("loading config from {}", path);
                Self::load(Path::new(&path))?
            },
            None => Self::default(),
        };

        if let Some(width) = argument_value(args, "width") {
            config.image.width = width.trim().parse().map_err(|err| invalid_argument("width", err))?;
        }
        if let Some(aspect_ratio) = argument_value(args, "aspect-ratio") {
            config.image.aspect_ratio = parse_aspect_ratio(&aspect_ratio)?;
        }
        if let Some(renderer) = argument_value(args, "renderer") {
            config.renderer = renderer.parse().map_err(|err| invalid_argument("renderer", err))?;
        }
        if let Some(output) = argument_value(args, "output") {
            config.output = output;
        }

        Ok(config)
    }

    /// Path the image is saved to, `result.ppm` unless configured.
    pub fn output(&self) -> &str {
        if self.output.is_empty() {
            "result.ppm"
        } else {
            &self.output
        }
    }
}

/// Accepts either a number (`1.5`) or a ratio (`16/9`).
fn parse_aspect_ratio(value: &str) -> Result<f64, ConfigError> {
    let ratio = match value.split_once('/') {
        Some((width, height)) => {
            let width: f64 = width.trim().parse().map_err(|err| invalid_argument("aspect-ratio", err))?;
            let height: f64 = height.trim().parse().map_err(|err| invalid_argument("aspect-ratio", err))?;
            width / height
        },
        None => value.trim().parse().map_err(|err| invalid_argument("aspect-ratio", err))?,
    };

    if !(ratio.is_finite() && ratio > 0.0) {
        return Err(ConfigError::InvalidArgument {
            name: "aspect-ratio".to_string(),
            description: format!("should be positive, got {}", value),
        });
    }

    Ok(ratio)
}

fn invalid_argument<E: ToString>(name: &str, err: E) -> ConfigError {
    ConfigError::InvalidArgument {
        name: name.to_string(),
        description: err.to_string(),
    }
}

fn argument_value(args: &[String], argument_name: &str) -> Option<String> {
    let prefix = format!("--{}=", argument_name);
    args.iter()
        .find(|s| s.starts_with(&prefix))
        .map(|s| s[prefix.len()..].to_string())
}
