//! Character-by-character reveal.

use std::time::Duration;

/// Block cursor drawn on the next character while typing.
pub const CURSOR: char = '█';

/// Reveals a line one character per `speed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teletype {
    chars: Vec<char>,
    speed: Duration,
    elapsed: Duration,
    shown: usize,
    reported: bool,
}

impl Teletype {
    /// Starts typing `text`. With `autocomplete` the whole line shows at once.
    pub fn new(text: &str, speed: Duration, autocomplete: bool) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let shown = if autocomplete { chars.len() } else { 0 };
        Self {
            chars,
            speed,
            elapsed: Duration::ZERO,
            shown,
            reported: false,
        }
    }

    /// Advances the effect by `dt`.
    ///
    /// Returns `true` exactly once, on the tick where the line is complete.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.is_finished() {
            self.elapsed += dt;
            let due = if self.speed.is_zero() {
                self.chars.len()
            } else {
                (self.elapsed.as_millis() / self.speed.as_millis().max(1)) as usize
            };
            self.shown = due.min(self.chars.len());
        }

        if self.is_finished() && !self.reported {
            self.reported = true;
            return true;
        }
        false
    }

    /// Whether every character is visible.
    pub fn is_finished(&self) -> bool {
        self.shown >= self.chars.len()
    }

    /// Characters typed so far.
    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    /// The visible text followed by the cursor while typing.
    pub fn frame(&self) -> String {
        let mut frame = self.visible();
        if !self.is_finished() {
            frame.push(CURSOR);
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_character_per_step() {
        let mut teletype = Teletype::new("abc", Duration::from_millis(10), false);
        assert_eq!(teletype.frame(), "█");

        assert!(!teletype.tick(Duration::from_millis(10)));
        assert_eq!(teletype.frame(), "a█");

        assert!(!teletype.tick(Duration::from_millis(15)));
        assert_eq!(teletype.frame(), "ab█");

        assert!(teletype.tick(Duration::from_millis(5)));
        assert_eq!(teletype.frame(), "abc");
        assert!(!teletype.tick(Duration::from_millis(10)));
    }

    #[test]
    fn empty_line_completes_on_first_tick() {
        let mut teletype = Teletype::new("", Duration::from_millis(10), false);
        assert!(teletype.tick(Duration::ZERO));
        assert!(!teletype.tick(Duration::ZERO));
    }

    #[test]
    fn autocomplete_shows_everything() {
        let mut teletype = Teletype::new("done", Duration::from_millis(50), true);
        assert_eq!(teletype.visible(), "done");
        assert!(teletype.tick(Duration::ZERO));
    }
}
