//! The closed word list used by the `word` challenge kind.
//!
//! All-uppercase, safety-themed, chosen so a skimming human recognizes the
//! word is worth typing carefully. The list is intentionally small and
//! fixed — not configurable, not reloadable.

pub const WORDS: &[&str] = &[
    "CONFIRM", "DESTROY", "PERMANENT", "IRREVERSIBLE", "DANGER", "CAUTION", "OVERRIDE", "ACCEPT",
    "PROCEED", "UNDERSTOOD", "DELIBERATE", "AUTHORIZE",
];

/// Picks a word uniformly at random from [`WORDS`].
#[must_use]
pub fn pick() -> &'static str {
    use rand::Rng;
    let idx = rand::thread_rng().gen_range(0..WORDS.len());
    WORDS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_has_at_least_eight_entries() {
        assert!(WORDS.len() >= 8);
    }

    #[test]
    fn every_word_is_all_uppercase() {
        for word in WORDS {
            assert_eq!(*word, word.to_ascii_uppercase());
        }
    }

    #[test]
    fn pick_always_returns_a_listed_word() {
        for _ in 0..50 {
            assert!(WORDS.contains(&pick()));
        }
    }
}
