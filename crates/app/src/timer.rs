//! Promise-backed timers for the browser event loop.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Suspend the current future for `ms` milliseconds.
///
/// Resolves immediately if no window object exists, so callers never hang.
pub async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().and_then(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .ok()
        });
        if scheduled.is_none() {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}
