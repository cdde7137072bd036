//! Blocking alerts for failed actions.

use api::GatewayError;

/// Show a blocking alert. Outside the browser the message is only logged.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::warn!("alert: {message}");
}

/// Log a failed action and tell the user about it.
pub fn report_failure(action: &str, error: &GatewayError) {
    tracing::error!("{action} failed: {error}");
    alert(&error.to_string());
}
