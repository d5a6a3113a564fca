// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Standalone projection API

use crate::utils::to_js_error;
use geosplat_core::{GeoLocation, GeospatialProjector};
use wasm_bindgen::prelude::*;

/// Geographic to local projection exposed to JavaScript
///
/// Example:
/// ```javascript
/// const projector = new GeoProjector();
/// projector.setOrigin(51.5007, -0.1246);
/// const [x, y, z] = projector.toLocal(51.5014, -0.1419, 0);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct GeoProjector {
    inner: GeospatialProjector,
}

#[wasm_bindgen]
impl GeoProjector {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GeoProjector {
        GeoProjector::default()
    }

    /// Replace the origin
    #[wasm_bindgen(js_name = setOrigin)]
    pub fn set_origin(
        &mut self,
        latitude: f64,
        longitude: f64,
        altitude: Option<f64>,
    ) -> Result<(), JsError> {
        let origin = GeoLocation::with_altitude(latitude, longitude, altitude.unwrap_or(0.0));
        self.inner.set_origin(origin).map_err(to_js_error)
    }

    /// Origin as `[latitude, longitude, altitude]`
    #[wasm_bindgen(getter)]
    pub fn origin(&self) -> Option<Vec<f64>> {
        self.inner
            .origin()
            .map(|o| vec![o.latitude, o.longitude, o.altitude])
    }

    /// Local `[x, y, z]`; the first call on an unset projector anchors the origin
    #[wasm_bindgen(js_name = toLocal)]
    pub fn to_local(
        &mut self,
        latitude: f64,
        longitude: f64,
        altitude: Option<f64>,
    ) -> Result<Vec<f64>, JsError> {
        let loc = GeoLocation::with_altitude(latitude, longitude, altitude.unwrap_or(0.0));
        let offset = self.inner.to_local(loc).map_err(to_js_error)?;
        Ok(vec![offset.x, offset.y, offset.z])
    }

    /// Haversine distance in meters
    pub fn distance(&self, lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
        self.inner.distance(
            &GeoLocation::new(lat_a, lon_a),
            &GeoLocation::new(lat_b, lon_b),
        )
    }

    /// Clear the origin
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}
