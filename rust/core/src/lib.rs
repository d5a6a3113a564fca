// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # GeoSplat Core
//!
//! Geographic placement and clip-volume geometry for viewers that put
//! Gaussian-splat captures on a shared platform.
//!
//! ## Overview
//!
//! - **Projection**: latitude/longitude/altitude to a local east/up/north
//!   frame anchored at one origin, plus haversine distances
//! - **Clipping**: an axis-aligned clip box and up to six single-axis slice
//!   planes in the container's local frame, kept consistent with its scale
//! - **Orchestration**: named scenes placed on the platform one at a time
//!
//! The crate never touches GPU state. It returns plain geometry (bounds,
//! plane coefficients, model matrices) for a renderer-side adapter to upload.
//!
//! ## Quick Start
//!
//! ```rust
//! use geosplat_core::{ClipConfig, ClipVolumeController, ContainerTransform,
//!     GeoLocation, GeospatialProjector, SliceUpdate};
//!
//! let mut projector = GeospatialProjector::new();
//! projector.to_local(GeoLocation::new(51.5007, -0.1246)).unwrap(); // anchors the origin
//! let offset = projector.to_local(GeoLocation::new(51.5014, -0.1419)).unwrap();
//!
//! let mut transform = ContainerTransform::new();
//! transform.set_position(offset);
//!
//! let mut clip = ClipVolumeController::new(ClipConfig::default()).unwrap();
//! clip.set_slice_planes(SliceUpdate { y_pos: Some(4.0), ..Default::default() });
//! let state = clip.apply(&transform);
//! assert_eq!(state.planes.len(), 1);
//! ```

pub mod clip;
pub mod config;
pub mod error;
pub mod geo;
pub mod scene;
pub mod transform;

pub use clip::{
    ClipBounds, ClipConfig, ClipConfigUpdate, ClipState, ClipVolumeController, SliceAxis,
    SliceDistances, SlicePlane, SlicePlanes, SliceUpdate, SCALE_EPSILON,
};
pub use config::{Scene, ViewerConfig};
pub use error::{Error, Result};
pub use geo::{distance, GeoLocation, GeospatialProjector, LocalOffset, EARTH_RADIUS_M};
pub use scene::{SceneDirector, SceneView};
pub use transform::ContainerTransform;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
