//! Content domain: data-driven configuration loaded at startup.

mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use loader::{ContentLoadError, load_movement_tuning, parse_single};
pub use validation::{TuningValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::movement::MovementTuning;

/// Directory the RON data files are read from.
#[derive(Resource, Debug, Clone)]
pub struct ContentPath(pub PathBuf);

impl Default for ContentPath {
    fn default() -> Self {
        Self(PathBuf::from("assets/data"))
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPath>()
            .add_systems(PreStartup, load_content);
    }
}

/// Load tuning from disk, falling back to defaults. Invalid values are reported and
/// clamped so they degrade to "no effect".
fn load_content(mut commands: Commands, path: Res<ContentPath>) {
    let tuning = match load_movement_tuning(&path.0) {
        Ok(tuning) => {
            info!("Loaded movement tuning from {}", path.0.display());
            tuning
        }
        Err(e) => {
            warn!("{}; using default movement tuning", e);
            MovementTuning::default()
        }
    };

    let errors = validate_tuning(&tuning);
    for error in &errors {
        warn!("{}", error);
    }

    commands.insert_resource(if errors.is_empty() {
        tuning
    } else {
        tuning.sanitized()
    });
}
