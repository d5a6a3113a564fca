// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use wasm_bindgen::JsError;

/// Set panic hook for better error messages in the browser
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Convert a core error into a JavaScript exception
pub(crate) fn to_js_error(err: geosplat_core::Error) -> JsError {
    JsError::new(&err.to_string())
}
