// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Clip volume and cross-section planes
//!
//! Everything here lives in the container's local frame. The clip box is
//! derived from the platform footprint and vertical extent, scaled by the
//! container's scale. Slice planes are single-axis half-spaces whose offsets
//! are divided by the matching scale component, so a cut stays at a fixed
//! world distance from the container origin however the capture is scaled.
//!
//! All half-spaces share one convention: a point `p` is cut away when
//! `dot(normal, p) + offset > 0`.
//!
//! Nothing is cached. Bounds and planes are recomputed from the current
//! scale and configuration on every call.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::transform::ContainerTransform;

/// Floor for scale components when compensating slice offsets
pub const SCALE_EPSILON: f64 = 1e-6;

/// Active slice planes (at most one per axis direction)
pub type SlicePlanes = SmallVec<[SlicePlane; 6]>;

/// Static clip volume configuration, in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClipConfig {
    /// Half the side length of the square platform footprint
    pub footprint_half_width: f64,
    /// Height of the clip box above the floor
    pub clip_height: f64,
    /// Local Y of the walkable surface
    pub floor_y: f64,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            footprint_half_width: 50.0,
            clip_height: 30.0,
            floor_y: 0.0,
        }
    }
}

impl ClipConfig {
    /// Reject non-positive footprint/height and non-finite values
    pub fn validate(&self) -> Result<()> {
        if !(self.footprint_half_width.is_finite() && self.footprint_half_width > 0.0) {
            return Err(Error::invalid_configuration(format!(
                "footprint half-width must be positive, got {}",
                self.footprint_half_width
            )));
        }
        if !(self.clip_height.is_finite() && self.clip_height > 0.0) {
            return Err(Error::invalid_configuration(format!(
                "clip height must be positive, got {}",
                self.clip_height
            )));
        }
        if !self.floor_y.is_finite() {
            return Err(Error::invalid_configuration(format!(
                "floor Y must be finite, got {}",
                self.floor_y
            )));
        }
        Ok(())
    }
}

/// Partial clip configuration; unset fields keep their current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClipConfigUpdate {
    pub footprint_half_width: Option<f64>,
    pub clip_height: Option<f64>,
    pub floor_y: Option<f64>,
}

impl ClipConfig {
    /// Apply `update` on top of this configuration
    pub fn merged(&self, update: &ClipConfigUpdate) -> ClipConfig {
        ClipConfig {
            footprint_half_width: update
                .footprint_half_width
                .unwrap_or(self.footprint_half_width),
            clip_height: update.clip_height.unwrap_or(self.clip_height),
            floor_y: update.floor_y.unwrap_or(self.floor_y),
        }
    }
}

/// Axis-aligned clip box in container local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipBounds {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl ClipBounds {
    /// Check if a local-space point lies inside the box (faces included)
    #[inline]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    /// The six box faces as outward half-spaces, in `SliceAxis::ALL` order.
    ///
    /// A point is outside the box exactly when at least one of them cuts it.
    pub fn to_planes(&self) -> [SlicePlane; 6] {
        SliceAxis::ALL.map(|axis| {
            let i = axis.index();
            let offset = if axis.is_positive() {
                -self.max[i]
            } else {
                self.min[i]
            };
            SlicePlane {
                axis,
                normal: axis.normal(),
                offset,
            }
        })
    }

    /// `[min.x, min.y, min.z, max.x, max.y, max.z]`
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z,
        ]
    }
}

/// One of the six axis directions a slice can cut from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceAxis {
    XPos,
    XNeg,
    YPos,
    YNeg,
    ZPos,
    ZNeg,
}

impl SliceAxis {
    /// Evaluation order of active planes
    pub const ALL: [SliceAxis; 6] = [
        SliceAxis::XPos,
        SliceAxis::XNeg,
        SliceAxis::YPos,
        SliceAxis::YNeg,
        SliceAxis::ZPos,
        SliceAxis::ZNeg,
    ];

    /// Component index: 0 = X, 1 = Y, 2 = Z
    #[inline]
    pub fn index(self) -> usize {
        match self {
            SliceAxis::XPos | SliceAxis::XNeg => 0,
            SliceAxis::YPos | SliceAxis::YNeg => 1,
            SliceAxis::ZPos | SliceAxis::ZNeg => 2,
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        matches!(self, SliceAxis::XPos | SliceAxis::YPos | SliceAxis::ZPos)
    }

    /// Outward unit normal
    pub fn normal(self) -> Vector3<f64> {
        let sign = if self.is_positive() { 1.0 } else { -1.0 };
        let mut normal = Vector3::zeros();
        normal[self.index()] = sign;
        normal
    }
}

/// A single-axis half-space; points with `dot(normal, p) + offset > 0` are cut
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlicePlane {
    pub axis: SliceAxis,
    pub normal: Vector3<f64>,
    pub offset: f64,
}

impl SlicePlane {
    /// Check if the plane discards `point`
    #[inline]
    pub fn cuts(&self, point: &Point3<f64>) -> bool {
        self.normal.dot(&point.coords) + self.offset > 0.0
    }

    /// `[nx, ny, nz, offset]` for uniform upload
    pub fn to_vec4(&self) -> [f32; 4] {
        [
            self.normal.x as f32,
            self.normal.y as f32,
            self.normal.z as f32,
            self.offset as f32,
        ]
    }
}

/// Configured slice distances per axis direction; zero means inactive
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliceDistances {
    pub x_neg: f64,
    pub x_pos: f64,
    pub y_neg: f64,
    pub y_pos: f64,
    pub z_neg: f64,
    pub z_pos: f64,
}

impl SliceDistances {
    pub fn get(&self, axis: SliceAxis) -> f64 {
        match axis {
            SliceAxis::XPos => self.x_pos,
            SliceAxis::XNeg => self.x_neg,
            SliceAxis::YPos => self.y_pos,
            SliceAxis::YNeg => self.y_neg,
            SliceAxis::ZPos => self.z_pos,
            SliceAxis::ZNeg => self.z_neg,
        }
    }

    fn merge(&mut self, update: &SliceUpdate) {
        let fields = [
            (&mut self.x_neg, update.x_neg),
            (&mut self.x_pos, update.x_pos),
            (&mut self.y_neg, update.y_neg),
            (&mut self.y_pos, update.y_pos),
            (&mut self.z_neg, update.z_neg),
            (&mut self.z_pos, update.z_pos),
        ];
        for (slot, value) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

/// Partial slice update; unset fields keep their current distance
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliceUpdate {
    pub x_neg: Option<f64>,
    pub x_pos: Option<f64>,
    pub y_neg: Option<f64>,
    pub y_pos: Option<f64>,
    pub z_neg: Option<f64>,
    pub z_pos: Option<f64>,
}

/// What the renderer should apply for the current transform.
///
/// An empty state (no bounds, no planes) means "apply nothing".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClipState {
    pub bounds: Option<ClipBounds>,
    pub planes: SlicePlanes,
}

impl ClipState {
    /// Check if anything needs to be applied
    #[inline]
    pub fn is_active(&self) -> bool {
        self.bounds.is_some() || !self.planes.is_empty()
    }

    /// Check if a local-space point would be discarded
    pub fn discards(&self, point: &Point3<f64>) -> bool {
        if let Some(bounds) = &self.bounds {
            if !bounds.contains(point) {
                return true;
            }
        }
        self.planes.iter().any(|plane| plane.cuts(point))
    }

    /// Box faces followed by slice planes, flattened as vec4s
    pub fn plane_coefficients(&self) -> Vec<f32> {
        let box_planes = self.bounds.iter().flat_map(|b| b.to_planes());
        box_planes
            .chain(self.planes.iter().copied())
            .flat_map(|plane| plane.to_vec4())
            .collect()
    }
}

/// Derives the clip box and slice planes for a movable, scalable container
#[derive(Debug, Clone)]
pub struct ClipVolumeController {
    config: ClipConfig,
    enabled: bool,
    slice_enabled: bool,
    slices: SliceDistances,
}

impl ClipVolumeController {
    /// Create a controller with clipping enabled and no slices
    pub fn new(config: ClipConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            enabled: true,
            slice_enabled: false,
            slices: SliceDistances::default(),
        })
    }

    #[inline]
    pub fn config(&self) -> &ClipConfig {
        &self.config
    }

    /// Replace the footprint/height/floor configuration
    pub fn set_config(&mut self, config: ClipConfig) -> Result<()> {
        if let Err(err) = config.validate() {
            tracing::warn!(error = %err, "Rejected clip configuration");
            return Err(err);
        }
        tracing::debug!(
            footprint_half_width = config.footprint_half_width,
            clip_height = config.clip_height,
            floor_y = config.floor_y,
            "Clip configuration updated"
        );
        self.config = config;
        Ok(())
    }

    /// Merge a partial configuration into the current one.
    ///
    /// The merged result is validated; on error nothing changes.
    pub fn update_config(&mut self, update: ClipConfigUpdate) -> Result<()> {
        self.set_config(self.config.merged(&update))
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn is_slice_enabled(&self) -> bool {
        self.slice_enabled
    }

    #[inline]
    pub fn slices(&self) -> &SliceDistances {
        &self.slices
    }

    /// Turn box and slice clipping on or off together
    pub fn set_clipping_enabled(&mut self, on: bool) {
        tracing::debug!(enabled = on, "Clipping toggled");
        self.enabled = on;
    }

    /// Toggle slicing; a given distance becomes the `+Y` slice
    pub fn set_slice_plane(&mut self, enabled: bool, distance: Option<f64>) {
        self.slice_enabled = enabled;
        if let Some(distance) = distance {
            self.slices.y_pos = distance;
        }
    }

    /// Merge per-axis distances and enable slicing
    pub fn set_slice_planes(&mut self, update: SliceUpdate) {
        self.slices.merge(&update);
        self.slice_enabled = true;
        tracing::debug!(slices = ?self.slices, "Slice planes updated");
    }

    /// Clip box for the given container scale
    pub fn compute_clip_bounds(&self, scale: &Vector3<f64>) -> ClipBounds {
        let half_x = self.config.footprint_half_width * scale.x;
        let half_z = self.config.footprint_half_width * scale.z;
        let height = self.config.clip_height * scale.y;
        let floor = self.config.floor_y * scale.y;

        ClipBounds {
            min: Point3::new(-half_x, floor, -half_z),
            max: Point3::new(half_x, floor + height, half_z),
        }
    }

    /// Planes for every non-zero slice distance, in `SliceAxis::ALL` order
    pub fn compute_active_planes(&self, scale: &Vector3<f64>) -> SlicePlanes {
        SliceAxis::ALL
            .iter()
            .filter_map(|&axis| {
                let distance = self.slices.get(axis);
                if distance == 0.0 {
                    return None;
                }
                let denominator = scale[axis.index()].abs().max(SCALE_EPSILON);
                Some(SlicePlane {
                    axis,
                    normal: axis.normal(),
                    offset: -(distance / denominator),
                })
            })
            .collect()
    }

    /// Clip state the renderer should apply for `transform`.
    ///
    /// Disabled clipping yields an empty state; slice planes are only
    /// included while slicing is enabled.
    pub fn apply(&self, transform: &ContainerTransform) -> ClipState {
        if !self.enabled {
            return ClipState::default();
        }

        let scale = &transform.scale;
        let planes = if self.slice_enabled {
            self.compute_active_planes(scale)
        } else {
            SlicePlanes::new()
        };
        tracing::trace!(planes = planes.len(), "Clip state recomputed");

        ClipState {
            bounds: Some(self.compute_clip_bounds(scale)),
            planes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn controller() -> ClipVolumeController {
        ClipVolumeController::new(ClipConfig {
            footprint_half_width: 10.0,
            clip_height: 4.0,
            floor_y: -1.5,
        })
        .unwrap()
    }

    #[test]
    fn bounds_at_unit_scale() {
        let bounds = controller().compute_clip_bounds(&Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(bounds.min, Point3::new(-10.0, -1.5, -10.0));
        assert_eq!(bounds.max, Point3::new(10.0, 2.5, 10.0));
    }

    #[test]
    fn bounds_scale_linearly() {
        let clip = controller();
        let unit = clip.compute_clip_bounds(&Vector3::new(1.0, 1.0, 1.0));
        let double = clip.compute_clip_bounds(&Vector3::new(2.0, 2.0, 2.0));

        for (u, d) in unit.to_array().iter().zip(double.to_array()) {
            assert_relative_eq!(*u * 2.0, d);
        }
        assert_relative_eq!(double.min.y, -3.0);
    }

    #[test]
    fn bounds_use_per_axis_scale() {
        let bounds = controller().compute_clip_bounds(&Vector3::new(2.0, 0.5, 3.0));
        assert_eq!(bounds.min, Point3::new(-20.0, -0.75, -30.0));
        assert_eq!(bounds.max, Point3::new(20.0, 1.25, 30.0));
        assert!((0..3).all(|i| bounds.min[i] < bounds.max[i]));
    }

    #[test]
    fn rejects_non_positive_config() {
        let err = ClipVolumeController::new(ClipConfig {
            footprint_half_width: 0.0,
            ..ClipConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));

        let mut clip = controller();
        let bad = ClipConfig {
            clip_height: -2.0,
            ..ClipConfig::default()
        };
        assert!(clip.set_config(bad).is_err());
        assert_eq!(clip.config().clip_height, 4.0);
    }

    #[test]
    fn bounds_follow_config_changes() {
        let mut clip = controller();
        let scale = Vector3::new(2.0, 2.0, 2.0);
        let before = clip.compute_clip_bounds(&scale);
        let transform = ContainerTransform::default();

        clip.set_config(ClipConfig {
            footprint_half_width: 6.0,
            clip_height: 8.0,
            floor_y: 1.0,
        })
        .unwrap();

        let after = clip.compute_clip_bounds(&scale);
        assert_ne!(after, before);
        assert_eq!(after.min, Point3::new(-12.0, 2.0, -12.0));
        assert_eq!(after.max, Point3::new(12.0, 18.0, 12.0));

        let applied = clip.apply(&transform).bounds.unwrap();
        assert_eq!(applied.min, Point3::new(-6.0, 1.0, -6.0));
        assert_eq!(applied.max, Point3::new(6.0, 9.0, 6.0));
    }

    #[test]
    fn partial_config_update_keeps_other_fields() {
        let mut clip = ClipVolumeController::new(ClipConfig {
            footprint_half_width: 20.0,
            clip_height: 25.0,
            floor_y: -1.2,
        })
        .unwrap();

        let update: ClipConfigUpdate =
            serde_json::from_str(r#"{"footprintHalfWidth": 40}"#).unwrap();
        clip.update_config(update).unwrap();

        assert_eq!(
            *clip.config(),
            ClipConfig {
                footprint_half_width: 40.0,
                clip_height: 25.0,
                floor_y: -1.2,
            }
        );
        let bounds = clip.compute_clip_bounds(&Vector3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(bounds.min.y, -1.2);
        assert_relative_eq!(bounds.max.y, 23.8);
        assert_relative_eq!(bounds.max.x, 40.0);
    }

    #[test]
    fn invalid_partial_update_changes_nothing() {
        let mut clip = controller();
        let before = *clip.config();

        let err = clip
            .update_config(ClipConfigUpdate {
                floor_y: Some(3.0),
                clip_height: Some(0.0),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        assert_eq!(*clip.config(), before);
    }

    #[test]
    fn single_slice_plane_lifecycle() {
        let mut clip = controller();
        let scale = Vector3::new(1.0, 1.0, 1.0);

        clip.set_slice_planes(SliceUpdate {
            x_pos: Some(5.0),
            ..Default::default()
        });
        let planes = clip.compute_active_planes(&scale);
        assert_eq!(planes.len(), 1);
        assert_eq!(planes[0].normal, Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(planes[0].offset, -5.0);

        clip.set_slice_planes(SliceUpdate {
            x_pos: Some(0.0),
            ..Default::default()
        });
        assert!(clip.compute_active_planes(&scale).is_empty());

        clip.set_slice_planes(SliceUpdate {
            x_pos: Some(5.0),
            ..Default::default()
        });
        let planes = clip.compute_active_planes(&Vector3::new(2.0, 1.0, 1.0));
        assert_eq!(planes.len(), 1);
        assert_eq!(planes[0].normal, Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(planes[0].offset, -2.5);
    }

    #[test]
    fn planes_keep_fixed_order() {
        let mut clip = controller();
        clip.set_slice_planes(SliceUpdate {
            z_neg: Some(1.0),
            x_neg: Some(2.0),
            y_pos: Some(3.0),
            ..Default::default()
        });

        let axes: Vec<_> = clip
            .compute_active_planes(&Vector3::new(1.0, 1.0, 1.0))
            .iter()
            .map(|p| p.axis)
            .collect();
        assert_eq!(axes, vec![SliceAxis::XNeg, SliceAxis::YPos, SliceAxis::ZNeg]);
    }

    #[test]
    fn negative_axis_planes_cut_outward() {
        let mut clip = controller();
        clip.set_slice_planes(SliceUpdate {
            y_neg: Some(2.0),
            y_pos: Some(2.0),
            ..Default::default()
        });

        let planes = clip.compute_active_planes(&Vector3::new(1.0, 1.0, 1.0));
        let cut = |p: Point3<f64>| planes.iter().any(|plane| plane.cuts(&p));

        assert!(!cut(Point3::new(0.0, 1.9, 0.0)));
        assert!(!cut(Point3::new(0.0, -1.9, 0.0)));
        assert!(cut(Point3::new(0.0, 2.1, 0.0)));
        assert!(cut(Point3::new(0.0, -2.1, 0.0)));
    }

    #[test]
    fn slice_offset_tracks_world_distance() {
        let mut clip = controller();
        clip.set_slice_plane(true, Some(3.0));

        for s in [0.5, 1.0, 4.0] {
            let planes = clip.compute_active_planes(&Vector3::new(1.0, s, 1.0));
            assert_eq!(planes.len(), 1);
            assert_eq!(planes[0].axis, SliceAxis::YPos);
            // Local cut height times scale is always 3 m
            assert_relative_eq!(-planes[0].offset * s, 3.0);
        }
    }

    #[test]
    fn zero_scale_stays_finite() {
        let mut clip = controller();
        clip.set_slice_planes(SliceUpdate {
            x_pos: Some(1.0),
            z_neg: Some(1.0),
            ..Default::default()
        });

        let planes = clip.compute_active_planes(&Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(planes.len(), 2);
        for plane in &planes {
            assert!(plane.offset.is_finite());
            assert_relative_eq!(plane.offset, -1.0 / SCALE_EPSILON);
        }
    }

    #[test]
    fn set_slice_plane_only_touches_y_pos() {
        let mut clip = controller();
        clip.set_slice_planes(SliceUpdate {
            x_neg: Some(4.0),
            ..Default::default()
        });

        clip.set_slice_plane(false, None);
        assert!(!clip.is_slice_enabled());
        assert_eq!(clip.slices().x_neg, 4.0);
        assert_eq!(clip.slices().y_pos, 0.0);

        clip.set_slice_plane(true, Some(1.5));
        assert!(clip.is_slice_enabled());
        assert_eq!(clip.slices().y_pos, 1.5);
        assert_eq!(clip.slices().x_neg, 4.0);
    }

    #[test]
    fn disabled_clipping_applies_nothing() {
        let mut clip = controller();
        clip.set_slice_plane(true, Some(2.0));
        let transform = ContainerTransform::default();

        assert!(clip.apply(&transform).is_active());

        clip.set_clipping_enabled(false);
        let state = clip.apply(&transform);
        assert!(!state.is_active());
        assert!(state.plane_coefficients().is_empty());
        assert!(!state.discards(&Point3::new(1000.0, 1000.0, 1000.0)));

        // The math itself does not change
        assert_eq!(clip.compute_active_planes(&transform.scale).len(), 1);

        clip.set_clipping_enabled(true);
        let state = clip.apply(&transform);
        assert!(state.bounds.is_some());
        assert_eq!(state.planes.len(), 1);
    }

    #[test]
    fn slicing_disabled_keeps_box_only() {
        let mut clip = controller();
        clip.set_slice_planes(SliceUpdate {
            z_pos: Some(1.0),
            ..Default::default()
        });
        clip.set_slice_plane(false, None);

        let state = clip.apply(&ContainerTransform::default());
        assert!(state.bounds.is_some());
        assert!(state.planes.is_empty());
        assert_eq!(state.plane_coefficients().len(), 6 * 4);
    }

    #[test]
    fn apply_follows_scale_changes() {
        let clip = controller();
        let mut transform = ContainerTransform::default();

        let before = clip.apply(&transform).bounds.unwrap();
        transform.set_uniform_scale(3.0);
        let after = clip.apply(&transform).bounds.unwrap();

        assert_relative_eq!(after.max.x - after.min.x, (before.max.x - before.min.x) * 3.0);
    }

    #[test]
    fn position_does_not_move_bounds() {
        let clip = controller();
        let mut transform = ContainerTransform::default();
        let before = clip.apply(&transform);

        transform.set_position(Vector3::new(120.0, 4.0, -300.0));
        assert_eq!(clip.apply(&transform), before);
    }

    #[test]
    fn box_planes_match_contains() {
        let bounds = controller().compute_clip_bounds(&Vector3::new(1.0, 1.0, 1.0));
        let planes = bounds.to_planes();

        let samples = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(9.9, 2.4, -9.9),
            Point3::new(10.1, 0.0, 0.0),
            Point3::new(0.0, -1.6, 0.0),
            Point3::new(0.0, 2.6, 0.0),
            Point3::new(0.0, 0.0, -10.5),
        ];
        for p in samples {
            let outside = planes.iter().any(|plane| plane.cuts(&p));
            assert_eq!(outside, !bounds.contains(&p), "point {:?}", p);
        }
    }

    #[test]
    fn plane_coefficients_layout() {
        let mut clip = controller();
        clip.set_slice_planes(SliceUpdate {
            x_pos: Some(2.0),
            ..Default::default()
        });

        let coeffs = clip.apply(&ContainerTransform::default()).plane_coefficients();
        assert_eq!(coeffs.len(), 7 * 4);
        // First box face is +X at max.x = 10
        assert_eq!(&coeffs[0..4], &[1.0f32, 0.0, 0.0, -10.0]);
        // Slice planes come after the six box faces
        assert_eq!(&coeffs[24..28], &[1.0f32, 0.0, 0.0, -2.0]);
    }

    #[test]
    fn slice_update_from_json() {
        let update: SliceUpdate = serde_json::from_str(r#"{"xPos": 5, "zNeg": 1.5}"#).unwrap();
        assert_eq!(update.x_pos, Some(5.0));
        assert_eq!(update.z_neg, Some(1.5));
        assert_eq!(update.y_pos, None);
    }
}
