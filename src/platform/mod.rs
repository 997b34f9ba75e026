//! Browser platform layer
//!
//! Wires the `fx` state machines to the page:
//! - DOM lookup and style helpers
//! - Timers and animation frames
//! - One-shot intersection triggers
//! - Canvas rendering for the particle network

pub mod canvas;
pub mod dom;
pub mod effects;
pub mod observe;
pub mod timers;

use crate::FxError;
use crate::settings::Settings;

type Mount = fn(&Settings) -> Result<(), FxError>;

/// Every effect, in mount order
const MOUNTS: [(&str, Mount); 13] = [
    ("preloader", effects::mount_preloader),
    ("particles", canvas::mount),
    ("typing", effects::mount_typing),
    ("decode", effects::mount_decode),
    ("terminal", effects::mount_terminal),
    ("counters", effects::mount_counters),
    ("reveal", effects::mount_reveal),
    ("scroll progress", effects::mount_scroll_progress),
    ("nav", effects::mount_nav),
    ("timeline", effects::mount_timeline),
    ("spotlight", effects::mount_spotlight),
    ("tilt", effects::mount_tilt),
    ("magnetic", effects::mount_magnetic),
];

/// Mount every effect. Each is independent: a failure is logged and the
/// rest still mount. Returns how many mounted.
pub fn mount_all(settings: &Settings) -> usize {
    let mut mounted = 0;
    for (name, mount) in MOUNTS.iter() {
        match mount(settings) {
            Ok(()) => {
                log::debug!("Mounted {}", name);
                mounted += 1;
            }
            Err(e) if e.is_missing_markup() => log::debug!("Skipped {}: {}", name, e),
            Err(e) => log::warn!("Failed to mount {}: {}", name, e),
        }
    }
    mounted
}
