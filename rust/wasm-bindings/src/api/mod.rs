// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JavaScript API for GeoSplat
//!
//! `GeoSplatViewer` drives scene browsing and clipping for one viewer
//! session; `GeoProjector` exposes the projection math on its own.

mod clipping;
mod projector;

pub use projector::GeoProjector;

use crate::utils::to_js_error;
use geosplat_core::{GeoLocation, SceneDirector, SceneView, ViewerConfig};
use wasm_bindgen::prelude::*;

/// Placement of a loaded scene, exposed to JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct SceneViewJs {
    #[wasm_bindgen(skip)]
    pub name: String,
    #[wasm_bindgen(skip)]
    pub model_url: Option<String>,
    /// East offset (m)
    pub x: f64,
    /// Up offset (m)
    pub y: f64,
    /// Negated north offset (m)
    pub z: f64,
    /// Great-circle distance from the origin (m)
    #[wasm_bindgen(js_name = distanceFromOrigin)]
    pub distance_from_origin: f64,
}

#[wasm_bindgen]
impl SceneViewJs {
    /// Scene name
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// Splat URL for the host loader
    #[wasm_bindgen(getter, js_name = modelUrl)]
    pub fn model_url(&self) -> Option<String> {
        self.model_url.clone()
    }

    /// Position as `[x, y, z]`
    #[wasm_bindgen(getter)]
    pub fn position(&self) -> Vec<f64> {
        vec![self.x, self.y, self.z]
    }
}

impl SceneViewJs {
    fn new(view: SceneView, model_url: Option<String>) -> Self {
        Self {
            name: view.name,
            model_url,
            x: view.position.x,
            y: view.position.y,
            z: view.position.z,
            distance_from_origin: view.distance_from_origin,
        }
    }
}

/// Scene browsing and clipping for one viewer session
///
/// Example:
/// ```javascript
/// const viewer = new GeoSplatViewer(JSON.stringify(config));
/// const view = viewer.loadScene('plaza');
/// splatGroup.position.fromArray(view.position);
/// material.clippingPlanes = toPlanes(viewer.clipPlanes());
/// ```
#[wasm_bindgen]
pub struct GeoSplatViewer {
    director: SceneDirector,
}

#[wasm_bindgen]
impl GeoSplatViewer {
    /// Create a viewer from a JSON configuration
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<GeoSplatViewer, JsError> {
        let config = ViewerConfig::from_json(config_json).map_err(to_js_error)?;
        let director = SceneDirector::new(config).map_err(to_js_error)?;
        tracing::debug!(scenes = director.scene_names().count(), "Viewer created");
        Ok(GeoSplatViewer { director })
    }

    /// Names of all configured scenes, in browsing order
    #[wasm_bindgen(js_name = sceneNames)]
    pub fn scene_names(&self) -> js_sys::Array {
        self.director
            .scene_names()
            .map(JsValue::from_str)
            .collect()
    }

    /// Name of the most recently loaded scene
    #[wasm_bindgen(getter, js_name = currentScene)]
    pub fn current_scene(&self) -> Option<String> {
        self.director.current().map(|scene| scene.name.clone())
    }

    /// Place a scene by name
    #[wasm_bindgen(js_name = loadScene)]
    pub fn load_scene(&mut self, name: &str) -> Result<SceneViewJs, JsError> {
        let view = self.director.load_scene(name).map_err(to_js_error)?;
        Ok(self.view_js(view))
    }

    /// Place the next scene, wrapping around
    #[wasm_bindgen(js_name = nextScene)]
    pub fn next_scene(&mut self) -> Result<SceneViewJs, JsError> {
        let view = self.director.next_scene().map_err(to_js_error)?;
        Ok(self.view_js(view))
    }

    /// Place the previous scene, wrapping around
    #[wasm_bindgen(js_name = previousScene)]
    pub fn previous_scene(&mut self) -> Result<SceneViewJs, JsError> {
        let view = self.director.previous_scene().map_err(to_js_error)?;
        Ok(self.view_js(view))
    }

    /// Forget the origin after an abandoned load
    #[wasm_bindgen(js_name = resetOrigin)]
    pub fn reset_origin(&mut self) {
        self.director.reset_origin();
    }

    /// Current origin as `[latitude, longitude, altitude]`
    #[wasm_bindgen(getter)]
    pub fn origin(&self) -> Option<Vec<f64>> {
        self.director
            .projector()
            .origin()
            .map(|o| vec![o.latitude, o.longitude, o.altitude])
    }

    /// Distance of a location from the origin in meters
    #[wasm_bindgen(js_name = distanceFromOrigin)]
    pub fn distance_from_origin(&self, latitude: f64, longitude: f64) -> Option<f64> {
        self.director
            .projector()
            .distance_from_origin(&GeoLocation::new(latitude, longitude))
    }

    /// Column-major model matrix of the container
    #[wasm_bindgen(js_name = modelMatrix)]
    pub fn model_matrix(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.director.transform().to_column_major_f32()[..])
    }
}

impl GeoSplatViewer {
    fn view_js(&self, view: SceneView) -> SceneViewJs {
        let model_url = self
            .director
            .current()
            .and_then(|scene| scene.model_url.clone());
        SceneViewJs::new(view, model_url)
    }
}
