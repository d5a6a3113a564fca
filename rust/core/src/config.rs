// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Viewer configuration
//!
//! Supplied once at startup by the host page as JSON:
//!
//! ```json
//! {
//!   "clip": { "footprintHalfWidth": 40, "clipHeight": 25, "floorY": -1.2 },
//!   "origin": { "latitude": 47.3769, "longitude": 8.5417 },
//!   "scenes": [
//!     { "name": "fountain", "location": { "latitude": 47.377, "longitude": 8.542 }, "scale": 2.0 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::clip::ClipConfig;
use crate::error::{Error, Result};
use crate::geo::GeoLocation;

fn default_scale() -> f64 {
    1.0
}

/// A named capture placed at a geographic location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub name: String,
    pub location: GeoLocation,
    /// Where the host fetches the splat from; opaque to the core
    #[serde(default)]
    pub model_url: Option<String>,
    /// Uniform container scale
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Heading about the up axis, degrees
    #[serde(default)]
    pub heading_deg: f64,
}

impl Scene {
    pub fn new(name: impl Into<String>, location: GeoLocation) -> Self {
        Self {
            name: name.into(),
            location,
            model_url: None,
            scale: 1.0,
            heading_deg: 0.0,
        }
    }
}

/// Startup configuration for a viewer session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    pub clip: ClipConfig,
    /// Fixed origin; when absent the first loaded scene anchors the frame
    pub origin: Option<GeoLocation>,
    pub clipping_enabled: bool,
    pub scenes: Vec<Scene>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            clip: ClipConfig::default(),
            origin: None,
            clipping_enabled: true,
            scenes: Vec::new(),
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ViewerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the clip volume and scene list.
    ///
    /// Scene locations are checked when loaded, not here.
    pub fn validate(&self) -> Result<()> {
        self.clip.validate()?;

        for (i, scene) in self.scenes.iter().enumerate() {
            if self.scenes[..i].iter().any(|other| other.name == scene.name) {
                return Err(Error::invalid_configuration(format!(
                    "duplicate scene name '{}'",
                    scene.name
                )));
            }
            if !(scene.scale.is_finite() && scene.scale > 0.0) {
                return Err(Error::invalid_configuration(format!(
                    "scene '{}' has non-positive scale {}",
                    scene.name, scene.scale
                )));
            }
            if !scene.heading_deg.is_finite() {
                return Err(Error::invalid_configuration(format!(
                    "scene '{}' has non-finite heading {}",
                    scene.name, scene.heading_deg
                )));
            }
        }
        Ok(())
    }
}
