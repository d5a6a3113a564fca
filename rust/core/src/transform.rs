// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Container transform
//!
//! Position, per-axis scale and rotation of the group holding a loaded
//! capture. The renderer owns the live values; the clip controller only
//! reads the scale.

use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3};

use crate::geo::LocalOffset;

/// Placement of a capture container in the local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerTransform {
    pub position: Vector3<f64>,
    pub scale: Vector3<f64>,
    pub rotation: UnitQuaternion<f64>,
}

impl Default for ContainerTransform {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: UnitQuaternion::identity(),
        }
    }
}

impl ContainerTransform {
    /// Identity transform
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the container to a projected offset
    #[inline]
    pub fn set_position(&mut self, offset: LocalOffset) {
        self.position = offset;
    }

    #[inline]
    pub fn set_scale(&mut self, sx: f64, sy: f64, sz: f64) {
        self.scale = Vector3::new(sx, sy, sz);
    }

    #[inline]
    pub fn set_uniform_scale(&mut self, s: f64) {
        self.set_scale(s, s, s);
    }

    /// Set rotation from Euler angles in radians (roll about X, pitch about Y, yaw about Z)
    pub fn set_rotation_euler(&mut self, roll: f64, pitch: f64, yaw: f64) {
        self.rotation = UnitQuaternion::from_euler_angles(roll, pitch, yaw);
    }

    /// Rotate about the up axis; positive turns from `-Z` (north) towards `-X` (west)
    pub fn set_heading(&mut self, radians: f64) {
        self.rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), radians);
    }

    /// Model matrix: translate * rotate * scale
    pub fn to_matrix(&self) -> Matrix4<f64> {
        Matrix4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&self.scale)
    }

    /// Column-major `f32` model matrix for GPU upload
    pub fn to_column_major_f32(&self) -> [f32; 16] {
        let m = self.to_matrix();
        let mut out = [0.0f32; 16];
        for (dst, src) in out.iter_mut().zip(m.as_slice()) {
            *dst = *src as f32;
        }
        out
    }

    /// Map a container-local point into the shared frame
    pub fn local_to_world(&self, point: &Point3<f64>) -> Point3<f64> {
        let scaled = point.coords.component_mul(&self.scale);
        Point3::from(self.rotation * scaled + self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn default_is_identity() {
        let t = ContainerTransform::default();
        assert_eq!(t.to_matrix(), Matrix4::identity());
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(t.local_to_world(&p), p);
    }

    #[test]
    fn scale_then_translate() {
        let mut t = ContainerTransform::new();
        t.set_scale(2.0, 3.0, 4.0);
        t.set_position(Vector3::new(10.0, 0.0, -5.0));

        let world = t.local_to_world(&Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(world, Point3::new(12.0, 3.0, -1.0));
    }

    #[test]
    fn matrix_matches_point_mapping() {
        let mut t = ContainerTransform::new();
        t.set_uniform_scale(1.5);
        t.set_rotation_euler(0.0, FRAC_PI_2, 0.0);
        t.set_position(Vector3::new(-3.0, 1.0, 7.0));

        let p = Point3::new(2.0, -1.0, 0.5);
        let via_matrix = t.to_matrix().transform_point(&p);
        assert_relative_eq!(via_matrix, t.local_to_world(&p), epsilon = 1e-12);
    }

    #[test]
    fn column_major_translation_is_last_column() {
        let mut t = ContainerTransform::new();
        t.set_position(Vector3::new(4.0, 5.0, 6.0));

        let m = t.to_column_major_f32();
        assert_eq!(&m[12..15], &[4.0f32, 5.0, 6.0]);
        assert_eq!(m[15], 1.0);
    }
}
