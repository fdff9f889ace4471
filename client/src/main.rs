mod app;
mod error;
mod leaflet;
mod map;
mod markers;
mod sidebar;

use leptos::mount::mount_to;
use std::any::Any;
use std::cell::RefCell;
use wasm_bindgen::JsCast;

use crate::error::StartupError;

thread_local! {
    static APP_MOUNT_HANDLE: RefCell<Option<Box<dyn Any>>> = RefCell::new(None);
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = start() {
        error::report(&err);
    }
}

fn start() -> Result<(), StartupError> {
    if !leaflet::is_available() {
        return Err(StartupError::LeafletMissing);
    }
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(StartupError::MissingElement("document"))?;
    let target = document
        .get_element_by_id("app")
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .or_else(|| document.body())
        .ok_or(StartupError::MissingElement("#app mount node"))?;

    APP_MOUNT_HANDLE.with(move |slot| {
        // A re-entered main() must not leave the previous mount's effects alive.
        let _old = slot.borrow_mut().take();
        let handle = mount_to(target, app::App);
        *slot.borrow_mut() = Some(Box::new(handle));
    });
    Ok(())
}
