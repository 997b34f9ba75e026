//! Effect state machines
//!
//! Everything the page animates is computed here, without touching the DOM:
//! - Each effect owns its state in a plain struct
//! - Timer-driven effects advance through a pure `advance`/`tick` step
//! - Randomness comes from a seeded RNG only

pub mod counter;
pub mod decode;
pub mod particles;
pub mod pointer;
pub mod scroll;
pub mod trigger;
pub mod typing;

pub use counter::{CounterAnimation, CounterFrame, parse_target};
pub use decode::{DecodeEffect, decode_source};
pub use particles::{Link, Particle, ParticleConfig, ParticleField};
pub use pointer::{
    MAGNETIC_RESET, TILT_RESET, Tilt, magnetic_offset, magnetic_transform, spotlight_vars, tilt_for,
};
pub use scroll::{SectionBox, active_section, item_active, link_matches, scroll_progress, timeline_fill};
pub use trigger::OneShot;
pub use typing::{TerminalTyper, TypeStep, Typewriter, TypingState};

/// Element bounding box in client (viewport) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Offset of a client point from the rect's centre
    #[inline]
    pub fn offset_from_center(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (
            client_x - self.left - self.width / 2.0,
            client_y - self.top - self.height / 2.0,
        )
    }
}

/// `document.readyState` says the `load` event has already fired
pub fn page_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_loaded_only_when_complete() {
        assert!(page_loaded("complete"));
        assert!(!page_loaded("interactive"));
        assert!(!page_loaded("loading"));
    }

    #[test]
    fn test_offset_from_center() {
        let rect = Rect::new(100.0, 50.0, 200.0, 100.0);
        assert_eq!(rect.offset_from_center(200.0, 100.0), (0.0, 0.0));
        assert_eq!(rect.offset_from_center(100.0, 50.0), (-100.0, -50.0));
    }
}
