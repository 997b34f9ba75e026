//! Typing effects
//!
//! `Typewriter` reveals one string a character at a time.
//! `TerminalTyper` reveals a list of lines with a pause and a line break after
//! each, and only ever starts once.

use super::trigger::OneShot;
use crate::settings::Settings;

/// Result of one typing step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeStep {
    /// Append this character
    Char(char),
    /// Current line is complete; append a line break
    LineBreak,
    /// Nothing left to type
    Finished,
}

/// Cursor into a list of lines. Only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypingState {
    pub line: usize,
    pub char: usize,
    pub done: bool,
}

impl TypingState {
    /// Pure transition: next cursor and what to emit
    pub fn advance(self, lines: &[Vec<char>]) -> (TypingState, TypeStep) {
        if self.done {
            return (self, TypeStep::Finished);
        }
        let Some(current) = lines.get(self.line) else {
            let done = TypingState { done: true, ..self };
            return (done, TypeStep::Finished);
        };
        match current.get(self.char) {
            Some(&c) => (
                TypingState {
                    char: self.char + 1,
                    ..self
                },
                TypeStep::Char(c),
            ),
            None => (
                TypingState {
                    line: self.line + 1,
                    char: 0,
                    done: false,
                },
                TypeStep::LineBreak,
            ),
        }
    }
}

/// Single-string typewriter
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    index: usize,
    pub start_delay_ms: u32,
    pub char_delay_ms: u32,
}

impl Typewriter {
    pub fn new(text: &str, start_delay_ms: u32, char_delay_ms: u32) -> Self {
        Self {
            chars: text.chars().collect(),
            index: 0,
            start_delay_ms,
            char_delay_ms,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.hero_text,
            settings.typing_start_delay_ms,
            settings.typing_char_delay_ms,
        )
    }

    /// Next character to append, None once the text is complete
    pub fn advance(&mut self) -> Option<char> {
        let c = self.chars.get(self.index).copied()?;
        self.index += 1;
        Some(c)
    }

    /// Text revealed so far
    pub fn typed(&self) -> String {
        self.chars[..self.index].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.index >= self.chars.len()
    }
}

/// Multi-line "terminal" typer
#[derive(Debug, Clone)]
pub struct TerminalTyper {
    lines: Vec<Vec<char>>,
    state: TypingState,
    trigger: OneShot,
    pub char_delay_ms: u32,
    pub line_pause_ms: u32,
}

impl TerminalTyper {
    pub fn new<S: AsRef<str>>(lines: &[S], char_delay_ms: u32, line_pause_ms: u32) -> Self {
        Self {
            lines: lines.iter().map(|l| l.as_ref().chars().collect()).collect(),
            state: TypingState::default(),
            trigger: OneShot::new(),
            char_delay_ms,
            line_pause_ms,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.terminal_lines,
            settings.terminal_char_delay_ms,
            settings.terminal_line_pause_ms,
        )
    }

    /// Begin typing. Returns false if typing was already started.
    pub fn start(&mut self) -> bool {
        self.trigger.fire()
    }

    pub fn is_started(&self) -> bool {
        self.trigger.has_fired()
    }

    /// Emit the next step. Does nothing until started.
    pub fn advance(&mut self) -> TypeStep {
        if !self.is_started() {
            return TypeStep::Finished;
        }
        let (next, step) = self.state.advance(&self.lines);
        self.state = next;
        step
    }

    /// Delay before the step after `step`; None when finished
    pub fn delay_after(&self, step: TypeStep) -> Option<u32> {
        match step {
            TypeStep::Char(_) => Some(self.char_delay_ms),
            TypeStep::LineBreak => Some(self.line_pause_ms),
            TypeStep::Finished => None,
        }
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    /// Output so far with line breaks as '\n'
    pub fn rendered(&self) -> String {
        let mut out = String::new();
        for line in self.lines.iter().take(self.state.line) {
            out.extend(line.iter());
            out.push('\n');
        }
        if let Some(line) = self.lines.get(self.state.line) {
            out.extend(line[..self.state.char].iter());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(typer: &mut TerminalTyper) -> Vec<TypeStep> {
        let mut steps = Vec::new();
        loop {
            let step = typer.advance();
            steps.push(step);
            if step == TypeStep::Finished {
                return steps;
            }
        }
    }

    #[test]
    fn test_typewriter_reveals_in_order() {
        let mut tw = Typewriter::new("AI/ML", 1000, 100);
        let mut out = String::new();
        while let Some(c) = tw.advance() {
            out.push(c);
            assert!(tw.typed().len() <= 5);
        }
        assert_eq!(out, "AI/ML");
        assert_eq!(tw.typed(), "AI/ML");
        assert!(tw.is_done());
        assert_eq!(tw.advance(), None);
    }

    #[test]
    fn test_typewriter_handles_multibyte() {
        let mut tw = Typewriter::new("café", 0, 1);
        let chars: Vec<char> = std::iter::from_fn(|| tw.advance()).collect();
        assert_eq!(chars, vec!['c', 'a', 'f', 'é']);
    }

    #[test]
    fn test_state_advance_is_pure() {
        let lines = vec![vec!['a'], vec![]];
        let s0 = TypingState::default();
        let (s1, step) = s0.advance(&lines);
        assert_eq!(step, TypeStep::Char('a'));
        assert_eq!(s0, TypingState::default());
        let (s2, step) = s1.advance(&lines);
        assert_eq!(step, TypeStep::LineBreak);
        let (s3, step) = s2.advance(&lines);
        assert_eq!(step, TypeStep::LineBreak);
        let (s4, step) = s3.advance(&lines);
        assert_eq!(step, TypeStep::Finished);
        assert!(s4.done);
        assert_eq!(s4.advance(&lines).1, TypeStep::Finished);
    }

    #[test]
    fn test_terminal_needs_start() {
        let mut typer = TerminalTyper::new(&["> hi"], 30, 300);
        assert_eq!(typer.advance(), TypeStep::Finished);
        assert_eq!(typer.rendered(), "");
    }

    #[test]
    fn test_terminal_types_lines_with_breaks() {
        let mut typer = TerminalTyper::new(&["> ok", "", "done"], 30, 300);
        assert!(typer.start());
        let steps = run(&mut typer);
        let breaks = steps.iter().filter(|s| **s == TypeStep::LineBreak).count();
        assert_eq!(breaks, 3);
        assert_eq!(typer.rendered(), "> ok\n\ndone\n");
        assert!(typer.state().done);
    }

    #[test]
    fn test_terminal_second_start_does_not_duplicate() {
        let mut typer = TerminalTyper::new(&["abc"], 30, 300);
        assert!(typer.start());
        typer.advance();
        typer.advance();
        // Section scrolled out and back in while typing
        assert!(!typer.start());
        assert_eq!(typer.rendered(), "ab");
        run(&mut typer);
        assert!(!typer.start());
        assert_eq!(typer.rendered(), "abc\n");
    }

    #[test]
    fn test_terminal_delays() {
        let typer = TerminalTyper::new(&["x"], 30, 300);
        assert_eq!(typer.delay_after(TypeStep::Char('x')), Some(30));
        assert_eq!(typer.delay_after(TypeStep::LineBreak), Some(300));
        assert_eq!(typer.delay_after(TypeStep::Finished), None);
    }

    #[test]
    fn test_index_never_exceeds_line_length() {
        let settings = Settings::default();
        let mut typer = TerminalTyper::from_settings(&settings);
        typer.start();
        loop {
            let state = typer.state();
            if let Some(line) = settings.terminal_lines.get(state.line) {
                assert!(state.char <= line.chars().count());
            }
            if typer.advance() == TypeStep::Finished {
                break;
            }
        }
        assert_eq!(typer.rendered(), settings.terminal_lines.join("\n") + "\n");
    }
}
