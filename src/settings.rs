//! Effect settings
//!
//! Defaults live in `crate::consts`. A page can override any field with an
//! inline `<script id="fx-settings" type="application/json">` block.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Particle density presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Density {
    Low,
    #[default]
    Medium,
    High,
}

impl Density {
    /// Particle count for this preset
    pub fn particle_count(&self) -> usize {
        match self {
            Density::Low => PARTICLE_COUNT / 2,
            Density::Medium => PARTICLE_COUNT,
            Density::High => PARTICLE_COUNT * 2,
        }
    }
}

/// Page effect settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Particle network ===
    pub density: Density,
    /// Explicit count, overrides `density`
    pub particle_count: Option<usize>,
    pub connection_distance: f32,
    pub particle_speed: f32,
    pub particle_min_radius: f32,
    pub particle_max_radius: f32,
    pub particle_color: String,
    pub line_color: String,

    // === Counters ===
    pub counter_duration_ms: u32,
    pub counter_frame_ms: u32,

    // === Typing ===
    pub hero_text: String,
    pub typing_start_delay_ms: u32,
    pub typing_char_delay_ms: u32,
    pub terminal_lines: Vec<String>,
    pub terminal_char_delay_ms: u32,
    pub terminal_line_pause_ms: u32,

    // === Decode ===
    pub decode_tick_ms: u32,
    pub decode_ticks_per_char: u32,

    // === Pointer ===
    pub tilt_max_deg: f64,
    pub magnetic_strength: f64,

    // === Scroll ===
    pub timeline_trigger_ratio: f64,

    // === Accessibility ===
    /// Skip motion-heavy effects
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            density: Density::Medium,
            particle_count: None,
            connection_distance: CONNECTION_DISTANCE,
            particle_speed: PARTICLE_SPEED,
            particle_min_radius: PARTICLE_MIN_RADIUS,
            particle_max_radius: PARTICLE_MAX_RADIUS,
            particle_color: PARTICLE_COLOR.to_string(),
            line_color: LINE_COLOR.to_string(),

            counter_duration_ms: COUNTER_DURATION_MS,
            counter_frame_ms: COUNTER_FRAME_MS,

            hero_text: "Data Scientist & AI/ML Developer".to_string(),
            typing_start_delay_ms: TYPING_START_DELAY_MS,
            typing_char_delay_ms: TYPING_CHAR_DELAY_MS,
            terminal_lines: [
                "> Initializing Personnel Profile...",
                "> Loading Data Points...",
                "> Role: AI Engineer & Data Scientist",
                "> Experience: 3+ Years",
                "",
                "I am a passionate AI/ML Developer specializing in Generative AI, Multi-Agent Systems, and NLP.",
                "My mission is to build intelligent systems that solve complex real-world problems.",
                "",
                "Currently architecting multi-agent document AI solutions at ContractPodAi.",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            terminal_char_delay_ms: TERMINAL_CHAR_DELAY_MS,
            terminal_line_pause_ms: TERMINAL_LINE_PAUSE_MS,

            decode_tick_ms: DECODE_TICK_MS,
            decode_ticks_per_char: DECODE_TICKS_PER_CHAR,

            tilt_max_deg: TILT_MAX_DEG,
            magnetic_strength: MAGNETIC_STRENGTH,

            timeline_trigger_ratio: TIMELINE_TRIGGER_RATIO,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Element holding the JSON overrides
    pub const ELEMENT_ID: &'static str = "fx-settings";

    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Effective particle count
    pub fn particle_count(&self) -> usize {
        self.particle_count
            .unwrap_or_else(|| self.density.particle_count())
    }

    /// Particle animation runs (respects reduced_motion)
    pub fn effective_particles(&self) -> bool {
        !self.reduced_motion && self.particle_count() > 0
    }

    /// Tilt and magnetic buttons (respects reduced_motion)
    pub fn effective_pointer_motion(&self) -> bool {
        !self.reduced_motion
    }

    /// Decode scramble (respects reduced_motion)
    pub fn effective_decode(&self) -> bool {
        !self.reduced_motion
    }

    /// Counter frame count, at least one
    pub fn counter_frames(&self) -> u32 {
        (self.counter_duration_ms / self.counter_frame_ms.max(1)).max(1)
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let window = web_sys::window();
        let inline = window
            .as_ref()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        let mut settings = match inline {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::ELEMENT_ID);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed #{}: {}", Self::ELEMENT_ID, e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        };

        let prefers_reduced = window
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false);
        if prefers_reduced {
            log::info!("Reduced motion requested by the browser");
            settings.reduced_motion = true;
        }

        settings
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_from_json() {
        let low = Settings::from_json(r#"{ "density": "Low" }"#).unwrap();
        assert_eq!(low.density, Density::Low);
        assert_eq!(low.particle_count(), 30);
        assert!(Settings::from_json(r#"{ "density": "ultra" }"#).is_err());
    }

    #[test]
    fn test_default_particle_count() {
        let settings = Settings::default();
        assert_eq!(settings.particle_count(), 60);
        assert!(settings.effective_particles());
        assert_eq!(settings.counter_frames(), 100);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "density": "High", "connection_distance": 90.0 }"#).unwrap();
        assert_eq!(settings.particle_count(), 120);
        assert_eq!(settings.connection_distance, 90.0);
        assert_eq!(settings.typing_char_delay_ms, TYPING_CHAR_DELAY_MS);
        assert_eq!(settings.terminal_lines.len(), 9);
    }

    #[test]
    fn test_explicit_count_overrides_density() {
        let settings =
            Settings::from_json(r#"{ "density": "Low", "particle_count": 7 }"#).unwrap();
        assert_eq!(settings.particle_count(), 7);
    }

    #[test]
    fn test_reduced_motion_disables_motion_effects() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!settings.effective_particles());
        assert!(!settings.effective_pointer_motion());
        assert!(!settings.effective_decode());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ nope").is_err());
    }
}
