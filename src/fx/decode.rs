//! Decode (scramble) heading effect
//!
//! Each tick reveals `1 / ticks_per_char` of a character, left to right.
//! Unrevealed positions show a random glyph, rerolled every tick.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{DECODE_ALPHABET, DECODE_TICKS_PER_CHAR};

/// Text to decode: a non-empty `data-value`, else the rendered text
pub fn decode_source(data_value: Option<String>, rendered: impl FnOnce() -> String) -> String {
    data_value.filter(|v| !v.is_empty()).unwrap_or_else(rendered)
}

#[derive(Debug, Clone)]
pub struct DecodeEffect {
    original: Vec<char>,
    alphabet: Vec<char>,
    ticks: u32,
    ticks_per_char: u32,
    done: bool,
    rng: Pcg32,
}

impl DecodeEffect {
    pub fn new(text: &str, seed: u64) -> Self {
        Self::with_rate(text, DECODE_TICKS_PER_CHAR, seed)
    }

    pub fn with_rate(text: &str, ticks_per_char: u32, seed: u64) -> Self {
        Self {
            original: text.chars().collect(),
            alphabet: DECODE_ALPHABET.chars().collect(),
            ticks: 0,
            ticks_per_char: ticks_per_char.max(1),
            done: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Characters currently showing their real value. The first one appears
    /// on the second tick; all of them by `total_ticks`.
    pub fn revealed(&self) -> usize {
        if self.ticks >= self.total_ticks() {
            return self.original.len();
        }
        let elapsed = self.ticks.saturating_sub(1);
        (elapsed.div_ceil(self.ticks_per_char) as usize).min(self.original.len())
    }

    /// Advance one tick and return the frame to display.
    /// After the final tick the effect is done and keeps returning the original.
    pub fn tick(&mut self) -> String {
        if self.done {
            return self.original();
        }
        self.ticks += 1;
        let revealed = self.revealed();

        let frame = self
            .original
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if i < revealed {
                    c
                } else {
                    self.alphabet[self.rng.random_range(0..self.alphabet.len())]
                }
            })
            .collect();

        if self.ticks >= self.total_ticks() {
            self.done = true;
        }
        frame
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn original(&self) -> String {
        self.original.iter().collect()
    }

    /// Ticks needed to fully reveal the text
    pub fn total_ticks(&self) -> u32 {
        self.original.len() as u32 * self.ticks_per_char
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_alphabet_has_seventy_glyphs() {
        assert_eq!(DECODE_ALPHABET.chars().count(), 70);
    }

    #[test]
    fn test_reveals_one_char_per_five_ticks() {
        let mut fx = DecodeEffect::new("Nadia", 7);
        fx.tick();
        assert_eq!(fx.revealed(), 0);
        // First real character lands on the second tick
        let frame = fx.tick();
        assert_eq!(fx.revealed(), 1);
        assert!(frame.starts_with('N'));
        assert_eq!(frame.chars().count(), 5);
        for _ in 0..4 {
            fx.tick();
        }
        assert_eq!(fx.revealed(), 1);
        fx.tick();
        assert_eq!(fx.revealed(), 2);
    }

    #[test]
    fn test_one_tick_per_char_still_completes() {
        let mut fx = DecodeEffect::with_rate("abc", 1, 3);
        let frames: Vec<String> = (0..3).map(|_| fx.tick()).collect();
        assert_eq!(frames[2], "abc");
        assert!(fx.is_done());
    }

    #[test]
    fn test_empty_data_value_falls_back_to_text() {
        let text = || "Jane Doe".to_string();
        assert_eq!(decode_source(Some(String::new()), text), "Jane Doe");
        assert_eq!(decode_source(None, text), "Jane Doe");
        assert_eq!(decode_source(Some("J. Doe".into()), text), "J. Doe");
    }

    #[test]
    fn test_unrevealed_from_alphabet() {
        let mut fx = DecodeEffect::new("hello world", 99);
        let frame = fx.tick();
        for c in frame.chars() {
            assert!(DECODE_ALPHABET.contains(c));
        }
    }

    #[test]
    fn test_stops_after_full_reveal() {
        let mut fx = DecodeEffect::new("Ada", 1);
        assert_eq!(fx.total_ticks(), 15);
        let mut last = String::new();
        for _ in 0..fx.total_ticks() {
            assert!(!fx.is_done());
            last = fx.tick();
        }
        assert_eq!(last, "Ada");
        assert!(fx.is_done());
        assert_eq!(fx.tick(), "Ada");
    }

    #[test]
    fn test_empty_text_finishes_on_first_tick() {
        let mut fx = DecodeEffect::new("", 1);
        assert_eq!(fx.tick(), "");
        assert!(fx.is_done());
    }

    proptest! {
        #[test]
        fn prop_complete_after_five_ticks_per_char(text in "[ -~]{0,40}", seed in any::<u64>()) {
            let mut fx = DecodeEffect::new(&text, seed);
            let mut frame = String::new();
            for _ in 0..(5 * text.chars().count()).max(1) {
                frame = fx.tick();
            }
            prop_assert_eq!(frame, text);
            prop_assert!(fx.is_done());
        }
    }
}
