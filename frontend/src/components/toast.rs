//! Temporary toast notifications, injected straight into the DOM so they
//! survive whatever component raised them.

const TOAST_STYLE: &str = "position: fixed; bottom: 20px; left: 50%; \
    transform: translateX(-50%); background: rgba(0, 0, 0, 0.8); color: #fff; \
    padding: 10px 20px; border-radius: 4px; z-index: 10000;";

/// Shows `message` at the bottom of the screen for a few seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    let _ = toast.set_attribute("style", TOAST_STYLE);

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3_000).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}
