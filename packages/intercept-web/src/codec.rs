use dioxus_intercept::{LocationState, NavigationError};
use serde::Serialize;
use wasm_bindgen::JsValue;

/// Convert a location into the plain object stored in history entries and event payloads.
///
/// The object has the shape `{ path, query, hash }`, with `false` standing in for an absent
/// query or fragment.
pub fn location_to_js(state: &LocationState) -> Result<JsValue, NavigationError> {
    // plain objects rather than `Map`s, so other scripts can read the payload
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    state
        .serialize(&serializer)
        .map_err(NavigationError::platform)
}

/// Read a location back out of a history entry.
///
/// Returns `None` for entries without state and for state written by other code in a shape that
/// is not a location.
pub fn location_from_js(value: JsValue) -> Option<LocationState> {
    if value.is_null() || value.is_undefined() {
        return None;
    }

    match serde_wasm_bindgen::from_value(value) {
        Ok(state) => Some(state),
        Err(err) => {
            tracing::trace!(%err, "ignoring foreign history state");
            None
        }
    }
}
