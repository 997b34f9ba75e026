//! Timer-driven scheduling for typing, counters, decode and the preloader

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::dom;
use crate::FxError;

fn set_timeout(callback: &Closure<dyn FnMut()>, delay_ms: u32) -> Result<i32, FxError> {
    let id = dom::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        delay_ms as i32,
    )?;
    Ok(id)
}

/// Run `step` after `delay_ms`, then again after each delay it returns,
/// until it returns None.
pub fn chain<F>(delay_ms: u32, mut step: F) -> Result<(), FxError>
where
    F: FnMut() -> Option<u32> + 'static,
{
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let rearm = slot.clone();

    let closure = Closure::<dyn FnMut()>::new(move || {
        let Some(next) = step() else {
            return;
        };
        if let Some(callback) = rearm.borrow().as_ref() {
            if let Err(e) = set_timeout(callback, next) {
                log::warn!("Timer chain stopped: {}", e);
            }
        }
    });
    set_timeout(&closure, delay_ms)?;
    // Chain holds itself; freed with the page
    *slot.borrow_mut() = Some(closure);
    Ok(())
}

/// Call `tick` every `period_ms` until it returns false, then clear the interval
pub fn every<F>(period_ms: u32, mut tick: F) -> Result<(), FxError>
where
    F: FnMut() -> bool + 'static,
{
    let window = dom::window()?;
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let own_handle = handle.clone();

    let closure = Closure::<dyn FnMut()>::new(move || {
        if tick() {
            return;
        }
        if let (Some(id), Some(window)) = (own_handle.take(), web_sys::window()) {
            window.clear_interval_with_handle(id);
        }
    });
    let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        period_ms as i32,
    )?;
    handle.set(Some(id));
    closure.forget();
    Ok(())
}
