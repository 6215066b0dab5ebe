//! The konami-code easter egg.
//!
//! A sliding window over the last ten keys; when it matches
//! up up down down left right left right b a, the header goes rainbow
//! for a few seconds.

use std::collections::VecDeque;

use crossterm::event::KeyCode;

const SEQUENCE: [KonamiKey; 10] = [
    KonamiKey::Up,
    KonamiKey::Up,
    KonamiKey::Down,
    KonamiKey::Down,
    KonamiKey::Left,
    KonamiKey::Right,
    KonamiKey::Left,
    KonamiKey::Right,
    KonamiKey::B,
    KonamiKey::A,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KonamiKey {
    Up,
    Down,
    Left,
    Right,
    B,
    A,
    Other,
}

impl KonamiKey {
    fn from_code(code: KeyCode) -> Self {
        match code {
            KeyCode::Up => KonamiKey::Up,
            KeyCode::Down => KonamiKey::Down,
            KeyCode::Left => KonamiKey::Left,
            KeyCode::Right => KonamiKey::Right,
            KeyCode::Char('b') | KeyCode::Char('B') => KonamiKey::B,
            KeyCode::Char('a') | KeyCode::Char('A') => KonamiKey::A,
            _ => KonamiKey::Other,
        }
    }
}

#[derive(Debug, Default)]
pub struct KonamiTracker {
    window: VecDeque<KonamiKey>,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key press; returns true when the last ten keys spell the
    /// code exactly.
    pub fn record(&mut self, code: KeyCode) -> bool {
        self.window.push_back(KonamiKey::from_code(code));
        while self.window.len() > SEQUENCE.len() {
            self.window.pop_front();
        }
        self.window.len() == SEQUENCE.len()
            && self.window.iter().copied().eq(SEQUENCE.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(tracker: &mut KonamiTracker, codes: &[KeyCode]) -> bool {
        let mut hit = false;
        for code in codes {
            hit = tracker.record(*code);
        }
        hit
    }

    const CODE: [KeyCode; 10] = [
        KeyCode::Up,
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Char('b'),
        KeyCode::Char('a'),
    ];

    #[test]
    fn exact_sequence_fires() {
        let mut tracker = KonamiTracker::new();
        assert!(feed(&mut tracker, &CODE));
    }

    #[test]
    fn fires_on_suffix_after_noise() {
        let mut tracker = KonamiTracker::new();
        tracker.record(KeyCode::Char('x'));
        tracker.record(KeyCode::Down);
        assert!(feed(&mut tracker, &CODE));
    }

    #[test]
    fn wrong_order_does_not_fire() {
        let mut tracker = KonamiTracker::new();
        let mut shuffled = CODE;
        shuffled.swap(0, 9);
        assert!(!feed(&mut tracker, &shuffled));
    }

    #[test]
    fn partial_sequence_does_not_fire() {
        let mut tracker = KonamiTracker::new();
        assert!(!feed(&mut tracker, &CODE[..9]));
    }
}
