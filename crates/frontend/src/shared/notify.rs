/// Blocking browser alert. Falls back to the log when there is no window.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {:?}", e);
            }
        }
        None => log::warn!("alert without window: {}", message),
    }
}
