//! Functions published on `window` so inline handlers and other scripts can
//! reach the guardian.

use crate::portal::guardian::Guardian;
use crate::shared::dom;
use js_sys::Reflect;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// `window.protectDropdownContent()` runs one sweep and returns the number of
/// restored menus.
pub const PROTECT_FN: &str = "protectDropdownContent";
/// `window.startInteractionProtection()` starts a burst.
pub const BURST_FN: &str = "startInteractionProtection";

pub fn publish(guardian: &Rc<Guardian>) -> Result<(), JsValue> {
    let window = dom::window()?;

    let g = Rc::clone(guardian);
    let protect = Closure::wrap(Box::new(move || g.protect().recovered_count() as u32) as Box<dyn FnMut() -> u32>);
    Reflect::set(&window, &JsValue::from_str(PROTECT_FN), protect.as_ref())?;
    protect.forget();

    let g = Rc::clone(guardian);
    let burst = Closure::wrap(Box::new(move || g.begin_burst()) as Box<dyn FnMut()>);
    Reflect::set(&window, &JsValue::from_str(BURST_FN), burst.as_ref())?;
    burst.forget();

    log::debug!("published window.{PROTECT_FN} and window.{BURST_FN}");
    Ok(())
}
