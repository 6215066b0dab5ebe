//! The hero tagline's typing animation.
//!
//! A single timed-step engine: each call to [`Typewriter::step`] advances
//! the visible text by one character (typing or deleting) and returns the
//! delay to honor before the next step. The caller owns the clock; the
//! engine owns the state. It runs forever; there is no terminal phase,
//! only the cyclic walk through the configured phrases.

use std::time::Duration;

use crate::config::CadenceConfig;

/// Step delays by phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    /// After typing one character.
    pub typing: Duration,
    /// After deleting one character.
    pub deleting: Duration,
    /// Once the phrase is fully typed, before deletion starts.
    pub hold_full: Duration,
    /// Once the phrase is fully deleted, before the next phrase starts.
    pub hold_empty: Duration,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(100),
            deleting: Duration::from_millis(50),
            hold_full: Duration::from_millis(2000),
            hold_empty: Duration::from_millis(500),
        }
    }
}

impl From<&CadenceConfig> for Cadence {
    fn from(config: &CadenceConfig) -> Self {
        Self {
            typing: Duration::from_millis(config.type_ms),
            deleting: Duration::from_millis(config.delete_ms),
            hold_full: Duration::from_millis(config.hold_full_ms),
            hold_empty: Duration::from_millis(config.hold_empty_ms),
        }
    }
}

/// Cycles through phrases, typing and deleting one character per step.
///
/// Invariant: the visible text is always a character prefix of the current
/// phrase; it grows only while typing and shrinks only while deleting.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    cadence: Cadence,
    phrase: usize,
    shown: usize,
    deleting: bool,
    display: String,
}

impl Typewriter {
    /// An engine over a non-empty phrase list. Zero-length phrases are
    /// tolerated (they flip straight from typing to deleting and on to the
    /// next phrase); an empty list leaves the engine inert.
    pub fn new(phrases: Vec<String>, cadence: Cadence) -> Self {
        Self {
            phrases,
            cadence,
            phrase: 0,
            shown: 0,
            deleting: false,
            display: String::new(),
        }
    }

    /// The text currently on screen.
    pub fn visible(&self) -> &str {
        &self.display
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    fn current_len(&self) -> usize {
        self.phrases[self.phrase].chars().count()
    }

    /// Advances one step and returns the delay before the next one.
    pub fn step(&mut self) -> Duration {
        if self.phrases.is_empty() {
            return self.cadence.hold_empty;
        }

        if self.deleting {
            if self.shown > 0 {
                self.display.pop();
                self.shown -= 1;
            }
            if self.shown == 0 {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % self.phrases.len();
                return self.cadence.hold_empty;
            }
            self.cadence.deleting
        } else {
            if self.shown < self.current_len() {
                if let Some(next) = self.phrases[self.phrase].chars().nth(self.shown) {
                    self.display.push(next);
                    self.shown += 1;
                }
            }
            if self.shown >= self.current_len() {
                self.deleting = true;
                return self.cadence.hold_full;
            }
            self.cadence.typing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(phrases: &[&str]) -> Typewriter {
        Typewriter::new(
            phrases.iter().map(|p| p.to_string()).collect(),
            Cadence::default(),
        )
    }

    #[test]
    fn types_one_character_per_step() {
        let mut tw = engine(&["hi"]);
        tw.step();
        assert_eq!(tw.visible(), "h");
        tw.step();
        assert_eq!(tw.visible(), "hi");
    }

    #[test]
    fn full_phrase_flips_to_deleting_with_long_hold() {
        let mut tw = engine(&["hi"]);
        tw.step();
        let delay = tw.step();
        assert!(tw.is_deleting());
        assert_eq!(delay, Cadence::default().hold_full);
    }

    #[test]
    fn empty_deletion_advances_phrase_with_medium_hold() {
        let mut tw = engine(&["a", "b"]);
        tw.step(); // types "a" and flips to deleting in the same step
        let delay = tw.step(); // deletes back to ""
        assert_eq!(tw.visible(), "");
        assert!(!tw.is_deleting());
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(delay, Cadence::default().hold_empty);
    }

    #[test]
    fn zero_length_phrase_does_not_wedge() {
        let mut tw = engine(&["", "ok"]);
        let delay = tw.step();
        assert!(tw.is_deleting());
        assert_eq!(delay, Cadence::default().hold_full);
        tw.step();
        assert_eq!(tw.phrase_index(), 1);
        assert!(!tw.is_deleting());
        tw.step();
        assert_eq!(tw.visible(), "o");
    }

    #[test]
    fn multibyte_phrases_step_by_character() {
        let mut tw = engine(&["héllo"]);
        tw.step();
        tw.step();
        assert_eq!(tw.visible(), "hé");
        tw.step();
        assert_eq!(tw.visible(), "hél");
    }

    #[test]
    fn empty_phrase_list_is_inert() {
        let mut tw = engine(&[]);
        let delay = tw.step();
        assert_eq!(tw.visible(), "");
        assert_eq!(delay, Cadence::default().hold_empty);
    }
}
