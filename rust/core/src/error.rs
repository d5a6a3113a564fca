// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for projection, clipping and scene orchestration.

/// Result type alias for GeoSplat operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the viewer core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Latitude outside [-90, 90] or longitude outside [-180, 180].
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Clip volume configuration rejected (non-positive footprint or height).
    #[error("invalid clip configuration: {0}")]
    InvalidConfiguration(String),

    /// No scene with the requested name is configured.
    #[error("scene not found: {0}")]
    SceneNotFound(String),

    /// Viewer configuration JSON could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_configuration(msg: impl Into<String>) -> Self {
        Error::InvalidConfiguration(msg.into())
    }
}
