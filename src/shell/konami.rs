use std::collections::VecDeque;

/// The classic 10-key sequence that unlocks the easter egg.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Sliding window over the most recent keydowns. The window is length-capped
/// so no explicit reset is needed; a repeated match simply requires the
/// buffer to refill with the full sequence.
#[derive(Debug, Clone, Default)]
pub struct KonamiDetector {
    buffer: VecDeque<String>,
}

impl KonamiDetector {
    /// Record one keydown; returns true when the buffer now matches the
    /// secret sequence exactly.
    pub fn record(&mut self, key: &str) -> bool {
        self.buffer.push_back(normalize_key(key));
        if self.buffer.len() > KONAMI_SEQUENCE.len() {
            self.buffer.pop_front();
        }
        self.buffer.len() == KONAMI_SEQUENCE.len()
            && self
                .buffer
                .iter()
                .zip(KONAMI_SEQUENCE.iter())
                .all(|(got, want)| got == want)
    }
}

/// Single characters compare case-insensitively; named keys (arrows) verbatim.
fn normalize_key(key: &str) -> String {
    if key.chars().count() == 1 {
        key.to_lowercase()
    } else {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(detector: &mut KonamiDetector, keys: &[&str]) -> usize {
        keys.iter().filter(|k| detector.record(k)).count()
    }

    #[test]
    fn exact_sequence_matches_once() {
        let mut detector = KonamiDetector::default();
        assert_eq!(feed(&mut detector, &KONAMI_SEQUENCE), 1);
    }

    #[test]
    fn one_substituted_key_never_matches() {
        let mut detector = KonamiDetector::default();
        let mut keys = KONAMI_SEQUENCE;
        keys[4] = "ArrowRight";
        assert_eq!(feed(&mut detector, &keys), 0);
    }

    #[test]
    fn sequence_twice_matches_twice() {
        let mut detector = KonamiDetector::default();
        let hits = feed(&mut detector, &KONAMI_SEQUENCE) + feed(&mut detector, &KONAMI_SEQUENCE);
        assert_eq!(hits, 2);
    }

    #[test]
    fn noise_before_the_sequence_is_forgotten() {
        let mut detector = KonamiDetector::default();
        feed(&mut detector, &["x", "y", "z", "Enter"]);
        assert_eq!(feed(&mut detector, &KONAMI_SEQUENCE), 1);
    }

    #[test]
    fn letter_keys_match_case_insensitively() {
        let mut detector = KonamiDetector::default();
        let keys = [
            "ArrowUp",
            "ArrowUp",
            "ArrowDown",
            "ArrowDown",
            "ArrowLeft",
            "ArrowRight",
            "ArrowLeft",
            "ArrowRight",
            "B",
            "A",
        ];
        assert_eq!(feed(&mut detector, &keys), 1);
    }

    #[test]
    fn named_keys_are_compared_verbatim() {
        let mut detector = KonamiDetector::default();
        let mut keys = KONAMI_SEQUENCE;
        keys[0] = "arrowup";
        assert_eq!(feed(&mut detector, &keys), 0);
    }
}
