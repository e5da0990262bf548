use clap::Args;
use log::info;

use crate::core::gravity::{Body, default_body, find_body};
use crate::core::kinematics::LaunchInputs;
use crate::error::Result;

pub const DEFAULT_HEIGHT_M: f64 = 50.0;
pub const DEFAULT_VELOCITY_MPS: f64 = 15.0;

/// Illustration shown next to the controls when the file exists.
pub const ILLUSTRATION_PATH: &str = "assets/launch_diagram.png";

/// Launch flags shared by every front end.
#[derive(Args, Clone, Debug, Default)]
pub struct LaunchArgs {
    /// Body to launch from (earth, moon, mars, ...)
    #[arg(long, default_value = "earth")]
    pub body: String,

    /// Initial height above the ground in metres
    #[arg(long)]
    pub height: Option<f64>,

    /// Initial velocity in m/s, positive is upward
    #[arg(long, allow_hyphen_values = true)]
    pub velocity: Option<f64>,
}

impl LaunchArgs {
    pub fn is_unset(&self) -> bool {
        self.height.is_none() && self.velocity.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchSettings {
    pub body: &'static Body,
    pub height_m: f64,
    pub velocity_mps: f64,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            body: default_body(),
            height_m: DEFAULT_HEIGHT_M,
            velocity_mps: DEFAULT_VELOCITY_MPS,
        }
    }
}

impl LaunchSettings {
    pub fn from_args(args: &LaunchArgs) -> Result<Self> {
        let body = find_body(&args.body)?;
        let settings = Self {
            body,
            height_m: args.height.unwrap_or(DEFAULT_HEIGHT_M),
            velocity_mps: args.velocity.unwrap_or(DEFAULT_VELOCITY_MPS),
        };
        settings.inputs()?;
        info!(
            "launch from {} at {} m with {} m/s",
            settings.body.name, settings.height_m, settings.velocity_mps
        );
        Ok(settings)
    }

    pub fn inputs(&self) -> Result<LaunchInputs> {
        LaunchInputs::new(self.height_m, self.velocity_mps, self.body.gravity_mps2)
    }
}
