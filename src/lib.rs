//! Folio FX - visual effects for a single portfolio page
//!
//! Core modules:
//! - `fx`: DOM-free effect state machines (particles, counters, typing, decode, scroll, pointer)
//! - `platform`: Browser wiring through web-sys (wasm32 only)
//! - `settings`: Tunables and their loading
//! - `error`: Mount failures

pub mod error;
pub mod fx;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod settings;

pub use error::FxError;
pub use settings::{Density, Settings};

/// Effect defaults
pub mod consts {
    /// Particle network
    pub const PARTICLE_COUNT: usize = 60;
    pub const CONNECTION_DISTANCE: f32 = 150.0;
    /// Per-axis velocity is drawn from (-SPEED/2, SPEED/2) px/frame
    pub const PARTICLE_SPEED: f32 = 0.5;
    pub const PARTICLE_MIN_RADIUS: f32 = 1.0;
    pub const PARTICLE_MAX_RADIUS: f32 = 3.0;
    pub const PARTICLE_COLOR: &str = "rgba(0, 255, 136, 0.5)";
    pub const LINE_COLOR: &str = "rgba(0, 255, 136, 0.15)";

    /// Counters
    pub const COUNTER_DURATION_MS: u32 = 2000;
    pub const COUNTER_FRAME_MS: u32 = 20;

    /// Hero typing
    pub const TYPING_START_DELAY_MS: u32 = 1000;
    pub const TYPING_CHAR_DELAY_MS: u32 = 100;

    /// Terminal typing
    pub const TERMINAL_CHAR_DELAY_MS: u32 = 30;
    pub const TERMINAL_LINE_PAUSE_MS: u32 = 300;

    /// Decode effect: one real character every TICKS_PER_CHAR ticks
    pub const DECODE_TICK_MS: u32 = 50;
    pub const DECODE_TICKS_PER_CHAR: u32 = 5;
    pub const DECODE_ALPHABET: &str =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

    /// Pointer flourishes
    pub const TILT_MAX_DEG: f64 = 5.0;
    pub const TILT_SCALE: f64 = 1.02;
    pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
    pub const MAGNETIC_STRENGTH: f64 = 0.2;

    /// Scroll
    pub const TIMELINE_TRIGGER_RATIO: f64 = 0.7;
    /// A section becomes current one third of its height before its top
    pub const NAV_SECTION_LEAD_DIVISOR: f64 = 3.0;

    /// Visibility thresholds
    pub const COUNTER_THRESHOLD: f64 = 0.5;
    pub const TERMINAL_THRESHOLD: f64 = 0.5;
    pub const REVEAL_THRESHOLD: f64 = 0.1;

    /// Preloader fade-out before `display: none`
    pub const PRELOADER_FADE_MS: u32 = 500;
}

/// CSS percentage string, e.g. `42.5%`
#[inline]
pub fn percent(value: f64) -> String {
    format!("{}%", value)
}

/// CSS pixel string, e.g. `12px`
#[inline]
pub fn px(value: f64) -> String {
    format!("{}px", value)
}
