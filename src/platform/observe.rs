//! One-shot intersection triggers

use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::FxError;
use crate::fx::OneShot;

/// Call `on_enter` the first time each target is at least `threshold`
/// visible, then stop watching that target.
pub fn on_first_visible<F>(targets: &[Element], threshold: f64, mut on_enter: F) -> Result<(), FxError>
where
    F: FnMut(&Element) + 'static,
{
    let mut guards: Vec<(Element, OneShot)> =
        targets.iter().map(|t| (t.clone(), OneShot::new())).collect();

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);

                let first = guards
                    .iter_mut()
                    .find(|(el, _)| *el == target)
                    .map(|(_, shot)| shot.fire())
                    .unwrap_or(false);
                if first {
                    on_enter(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for target in targets {
        observer.observe(target);
    }
    callback.forget();
    Ok(())
}
