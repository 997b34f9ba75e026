//! Counter animation: 0 up to a target over a fixed number of frames

/// Digits of `text` as an integer; `"1,234 Users"` is 1234.
/// None when there are no digits, or when the digits overflow a `u64`
/// (such a counter is skipped rather than animated).
pub fn parse_target(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// What to display after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFrame {
    /// Still counting, show this value and schedule another frame
    Counting(u64),
    /// Reached the target; show it and stop
    Done(u64),
}

impl CounterFrame {
    pub fn value(&self) -> u64 {
        match *self {
            CounterFrame::Counting(v) | CounterFrame::Done(v) => v,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, CounterFrame::Done(_))
    }
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, frames: u32) -> Self {
        Self {
            target,
            increment: target as f64 / frames.max(1) as f64,
            current: 0.0,
            done: false,
        }
    }

    /// Text shown before the first frame
    pub fn initial_text(&self) -> &'static str {
        "0"
    }

    /// Accumulate one frame's increment
    pub fn advance(&mut self) -> CounterFrame {
        if self.done {
            return CounterFrame::Done(self.target);
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            CounterFrame::Counting(self.current.ceil() as u64)
        } else {
            self.done = true;
            CounterFrame::Done(self.target)
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}
