//! One-shot start guards for intersection-triggered effects

/// Fires at most once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    pub fn new() -> Self {
        Self { fired: false }
    }

    /// Returns true the first time only
    pub fn fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
