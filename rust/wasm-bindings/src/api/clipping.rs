// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Clip volume and slice plane methods for the viewer API

use super::GeoSplatViewer;
use crate::utils::to_js_error;
use geosplat_core::{ClipConfigUpdate, SliceUpdate};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
impl GeoSplatViewer {
    /// Rescale the container; clip geometry follows on the next read
    #[wasm_bindgen(js_name = setScale)]
    pub fn set_scale(&mut self, sx: f64, sy: f64, sz: f64) {
        self.director.set_scale(sx, sy, sz);
    }

    /// Turn box and slice clipping on or off
    #[wasm_bindgen(js_name = setClippingEnabled)]
    pub fn set_clipping_enabled(&mut self, on: bool) {
        self.director.clip_mut().set_clipping_enabled(on);
    }

    #[wasm_bindgen(getter, js_name = clippingEnabled)]
    pub fn clipping_enabled(&self) -> bool {
        self.director.clip().is_enabled()
    }

    /// Toggle slicing, optionally moving the `+Y` cut
    #[wasm_bindgen(js_name = setSlicePlane)]
    pub fn set_slice_plane(&mut self, enabled: bool, distance: Option<f64>) {
        self.director.clip_mut().set_slice_plane(enabled, distance);
    }

    /// Merge per-axis slice distances, e.g. `{ xPos: 5, zNeg: 2 }`
    ///
    /// Example:
    /// ```javascript
    /// viewer.setSlicePlanes({ yPos: 3.5 });
    /// const planes = viewer.clipPlanes(); // Float32Array of vec4s
    /// ```
    #[wasm_bindgen(js_name = setSlicePlanes)]
    pub fn set_slice_planes(&mut self, partial: JsValue) -> Result<(), JsError> {
        let update: SliceUpdate = serde_wasm_bindgen::from_value(partial)
            .map_err(|e| JsError::new(&format!("Invalid slice update: {}", e)))?;
        self.director.clip_mut().set_slice_planes(update);
        Ok(())
    }

    /// Update footprint, height and floor, e.g. `{ footprintHalfWidth: 40 }`.
    /// Omitted fields keep their current values.
    #[wasm_bindgen(js_name = setClipConfig)]
    pub fn set_clip_config(&mut self, config: JsValue) -> Result<(), JsError> {
        let update: ClipConfigUpdate = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid clip config: {}", e)))?;
        self.director
            .clip_mut()
            .update_config(update)
            .map_err(to_js_error)
    }

    /// Clip box as `[minX, minY, minZ, maxX, maxY, maxZ]`, or undefined when clipping is off
    #[wasm_bindgen(js_name = clipBounds)]
    pub fn clip_bounds(&self) -> Option<Vec<f64>> {
        self.director
            .clip_state()
            .bounds
            .map(|bounds| bounds.to_array().to_vec())
    }

    /// Box faces then slice planes as `[nx, ny, nz, offset]` vec4s.
    ///
    /// A fragment at local position `p` is discarded when `dot(n, p) + offset > 0`
    /// for any plane. Empty when clipping is off.
    #[wasm_bindgen(js_name = clipPlanes)]
    pub fn clip_planes(&self) -> js_sys::Float32Array {
        let coefficients = self.director.clip_state().plane_coefficients();
        js_sys::Float32Array::from(&coefficients[..])
    }

    /// Number of active slice planes (box faces excluded)
    #[wasm_bindgen(js_name = slicePlaneCount)]
    pub fn slice_plane_count(&self) -> usize {
        self.director.clip_state().planes.len()
    }
}
