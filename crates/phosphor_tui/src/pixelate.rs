//! Progressive-resolution reveal for bitmaps.
//!
//! A terminal cannot show the image itself, so its alt text stands in for
//! it. At each resolution step a matching share of characters resolves; the
//! rest are drawn as shade glyphs that get denser as resolution grows.

use std::time::Duration;

/// Resolution at each step of the reveal.
pub const STEPS: [f32; 11] = [
    0.01, 0.02, 0.03, 0.05, 0.08, 0.13, 0.21, 0.34, 0.55, 0.89, 1.00,
];

/// Pixelation reveal of a bitmap stand-in.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixelate {
    chars: Vec<char>,
    order: Vec<usize>,
    tick: Duration,
    elapsed: Duration,
    // STEPS.len() means one tick past the last step
    step: usize,
    reported: bool,
}

impl Pixelate {
    /// Starts pixelating `text`. With `autocomplete` it is resolved at once.
    pub fn new(text: &str, tick: Duration, autocomplete: bool) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut order: Vec<usize> = (0..chars.len()).collect();
        order.sort_by_key(|&i| (i as u64).wrapping_mul(2_654_435_761) % 4_294_967_296);
        Self {
            chars,
            order,
            tick,
            elapsed: Duration::ZERO,
            step: if autocomplete { STEPS.len() } else { 0 },
            reported: false,
        }
    }

    /// Advances the effect by `dt`.
    ///
    /// Returns `true` exactly once, one tick after full resolution.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.is_finished() {
            self.elapsed += dt;
            let due = if self.tick.is_zero() {
                STEPS.len()
            } else {
                (self.elapsed.as_millis() / self.tick.as_millis().max(1)) as usize
            };
            self.step = due.min(STEPS.len());
        }

        if self.is_finished() && !self.reported {
            self.reported = true;
            return true;
        }
        false
    }

    /// Whether the reveal has run past its last step.
    pub fn is_finished(&self) -> bool {
        self.step >= STEPS.len()
    }

    /// Current resolution in `0.0..=1.0`.
    pub fn resolution(&self) -> f32 {
        STEPS[self.step.min(STEPS.len() - 1)]
    }

    /// Text with unresolved characters replaced by shade glyphs.
    pub fn frame(&self) -> String {
        let resolution = self.resolution();
        let resolved = (resolution * self.chars.len() as f32).round() as usize;
        let shade = match resolution {
            r if r < 0.1 => '░',
            r if r < 0.5 => '▒',
            _ => '▓',
        };

        let mut out: Vec<char> = self
            .chars
            .iter()
            .map(|c| if c.is_whitespace() { *c } else { shade })
            .collect();
        for &i in self.order.iter().take(resolved) {
            out[i] = self.chars[i];
        }
        out.into_iter().collect()
    }
}
