// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene orchestration
//!
//! Ties the projector, the container transform and the clip controller
//! together: loading a scene projects its location, moves the container
//! there, applies the scene's scale and heading, and hands back the clip
//! state for the new transform. Model download and readiness polling stay
//! with the host; it calls in here once a location is known.

use crate::clip::{ClipState, ClipVolumeController};
use crate::config::{Scene, ViewerConfig};
use crate::error::{Error, Result};
use crate::geo::{GeospatialProjector, LocalOffset};
use crate::transform::ContainerTransform;

/// Result of placing a scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneView {
    pub name: String,
    /// Container position in the local frame
    pub position: LocalOffset,
    /// Great-circle distance from the origin, meters
    pub distance_from_origin: f64,
    /// Clip state for the freshly placed container
    pub clip: ClipState,
}

/// Browses named scenes on the shared platform
#[derive(Debug, Clone)]
pub struct SceneDirector {
    projector: GeospatialProjector,
    clip: ClipVolumeController,
    transform: ContainerTransform,
    scenes: Vec<Scene>,
    current: Option<usize>,
}

impl SceneDirector {
    /// Build a director from a validated configuration
    pub fn new(config: ViewerConfig) -> Result<Self> {
        config.validate()?;

        let projector = match config.origin {
            Some(origin) => GeospatialProjector::with_origin(origin)?,
            None => GeospatialProjector::new(),
        };
        let mut clip = ClipVolumeController::new(config.clip)?;
        clip.set_clipping_enabled(config.clipping_enabled);

        Ok(Self {
            projector,
            clip,
            transform: ContainerTransform::default(),
            scenes: config.scenes,
            current: None,
        })
    }

    pub fn scene_names(&self) -> impl Iterator<Item = &str> {
        self.scenes.iter().map(|scene| scene.name.as_str())
    }

    /// Most recently loaded scene
    pub fn current(&self) -> Option<&Scene> {
        self.current.and_then(|i| self.scenes.get(i))
    }

    #[inline]
    pub fn projector(&self) -> &GeospatialProjector {
        &self.projector
    }

    #[inline]
    pub fn transform(&self) -> &ContainerTransform {
        &self.transform
    }

    #[inline]
    pub fn clip(&self) -> &ClipVolumeController {
        &self.clip
    }

    /// Controller access for the settings surface
    #[inline]
    pub fn clip_mut(&mut self) -> &mut ClipVolumeController {
        &mut self.clip
    }

    /// Clip state for the current transform
    pub fn clip_state(&self) -> ClipState {
        self.clip.apply(&self.transform)
    }

    /// Place the scene called `name`.
    ///
    /// On error the container keeps its previous placement.
    pub fn load_scene(&mut self, name: &str) -> Result<SceneView> {
        let index = self
            .scenes
            .iter()
            .position(|scene| scene.name == name)
            .ok_or_else(|| {
                tracing::warn!(scene = name, "Unknown scene requested");
                Error::SceneNotFound(name.to_string())
            })?;
        self.load_index(index)
    }

    /// Load the scene after the current one, wrapping around
    pub fn next_scene(&mut self) -> Result<SceneView> {
        let len = self.non_empty_len()?;
        let index = self.current.map_or(0, |i| (i + 1) % len);
        self.load_index(index)
    }

    /// Load the scene before the current one, wrapping around
    pub fn previous_scene(&mut self) -> Result<SceneView> {
        let len = self.non_empty_len()?;
        let index = self.current.map_or(len - 1, |i| (i + len - 1) % len);
        self.load_index(index)
    }

    /// Rescale the container and recompute its clip state
    pub fn set_scale(&mut self, sx: f64, sy: f64, sz: f64) -> ClipState {
        self.transform.set_scale(sx, sy, sz);
        self.clip_state()
    }

    /// Forget the origin, e.g. after the host abandons a load.
    ///
    /// The next loaded scene anchors a new frame.
    pub fn reset_origin(&mut self) {
        self.projector.reset();
        self.current = None;
    }

    fn non_empty_len(&self) -> Result<usize> {
        match self.scenes.len() {
            0 => Err(Error::SceneNotFound("no scenes configured".to_string())),
            len => Ok(len),
        }
    }

    fn load_index(&mut self, index: usize) -> Result<SceneView> {
        let scene = &self.scenes[index];
        let location = scene.location;

        let position = match self.projector.to_local(location) {
            Ok(position) => position,
            Err(err) => {
                tracing::warn!(scene = %scene.name, error = %err, "Scene location rejected");
                return Err(err);
            }
        };

        self.transform.set_position(position);
        self.transform.set_uniform_scale(scene.scale);
        self.transform.set_heading(scene.heading_deg.to_radians());
        self.current = Some(index);

        let distance_from_origin = self
            .projector
            .distance_from_origin(&location)
            .unwrap_or(0.0);

        tracing::info!(
            scene = %scene.name,
            east = position.x,
            up = position.y,
            north = -position.z,
            distance_from_origin,
            "Scene placed"
        );

        Ok(SceneView {
            name: scene.name.clone(),
            position,
            distance_from_origin,
            clip: self.clip.apply(&self.transform),
        })
    }
}
