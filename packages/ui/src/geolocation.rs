//! Reading the device position through the browser Geolocation API.

use api::GeoPoint;

#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Geolocation is not available")]
    Unavailable,
    #[error("Location request failed: {0}")]
    Failed(String),
}

/// Ask the browser for the current position and blur it with
/// [`GeoPoint::approximate`]. The exact reading never leaves this function.
pub async fn approximate_position() -> Result<GeoPoint, LocationError> {
    let exact = current_position().await?;
    Ok(exact.approximate())
}

#[cfg(target_arch = "wasm32")]
async fn current_position() -> Result<GeoPoint, LocationError> {
    use js_sys::{Function, Promise, Reflect};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    let geolocation = web_sys::window()
        .and_then(|w| w.navigator().geolocation().ok())
        .ok_or(LocationError::Unavailable)?;

    let mut request_error = None;
    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            request_error = Some(e);
        }
    });
    if let Some(e) = request_error {
        return Err(LocationError::Failed(format!("{e:?}")));
    }

    let position = JsFuture::from(promise)
        .await
        .map_err(|e| LocationError::Failed(describe(&e)))?;

    let coord = |name: &str| -> Result<f64, LocationError> {
        let coords = Reflect::get(&position, &JsValue::from_str("coords"))
            .map_err(|e| LocationError::Failed(describe(&e)))?;
        Reflect::get(&coords, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.as_f64())
            .ok_or_else(|| LocationError::Failed(format!("position has no {name}")))
    };

    Ok(GeoPoint::new(coord("latitude")?, coord("longitude")?))
}

#[cfg(target_arch = "wasm32")]
fn describe(value: &wasm_bindgen::JsValue) -> String {
    js_sys::Reflect::get(value, &wasm_bindgen::JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn current_position() -> Result<GeoPoint, LocationError> {
    Err(LocationError::Unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_outside_browser() {
        let result = approximate_position().await;
        assert!(matches!(result, Err(LocationError::Unavailable)));
    }
}
