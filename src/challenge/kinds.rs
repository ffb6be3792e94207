//! Challenge kinds: what the local web page asks the human to do before
//! resolving a pending approval.
//!
//! Modeled as a tagged variant rather than an inheritance hierarchy — each
//! kind carries exactly the data its rendering and answer-checking need.

use super::words;

/// A challenge, with the server-chosen answer already baked in.
#[derive(Debug, Clone)]
pub enum Kind {
    /// Two buttons, no client-side validation.
    Confirm,
    /// `"{lhs} + {rhs} = ?"`, operands uniform in `[0, 10]`.
    Math { lhs: u8, rhs: u8 },
    /// A target word picked from [`words::WORDS`].
    Word { target: &'static str },
    /// Permanent-block page; cannot be approved from the page.
    Block,
}

impl Kind {
    /// Builds a math challenge with freshly rolled operands.
    #[must_use]
    pub fn new_math() -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        Self::Math { lhs: rng.gen_range(0..=10), rhs: rng.gen_range(0..=10) }
    }

    /// Builds a word challenge with a freshly picked target.
    #[must_use]
    pub fn new_word() -> Self {
        Self::Word { target: words::pick() }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirm => "confirm",
            Self::Math { .. } => "math",
            Self::Word { .. } => "word",
            Self::Block => "block",
        }
    }

    /// The correct integer answer for a math challenge, if this is one.
    #[must_use]
    pub fn math_answer(&self) -> Option<u16> {
        match self {
            Self::Math { lhs, rhs } => Some(u16::from(*lhs) + u16::from(*rhs)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn math_operands_are_within_bounds() {
        for _ in 0..100 {
            if let Kind::Math { lhs, rhs } = Kind::new_math() {
                assert!(lhs <= 10);
                assert!(rhs <= 10);
            }
        }
    }

    #[test]
    fn math_answer_is_the_sum() {
        let kind = Kind::Math { lhs: 3, rhs: 4 };
        assert_eq!(kind.math_answer(), Some(7));
    }

    #[test]
    fn non_math_kinds_have_no_math_answer() {
        assert_eq!(Kind::Confirm.math_answer(), None);
        assert_eq!(Kind::Block.math_answer(), None);
    }

    #[test]
    fn word_challenge_targets_a_listed_word() {
        if let Kind::Word { target } = Kind::new_word() {
            assert!(words::WORDS.contains(&target));
        } else {
            panic!("expected Kind::Word");
        }
    }

    #[test]
    fn labels_match_expected_strings() {
        assert_eq!(Kind::Confirm.label(), "confirm");
        assert_eq!(Kind::Math { lhs: 1, rhs: 1 }.label(), "math");
        assert_eq!(Kind::Word { target: "DANGER" }.label(), "word");
        assert_eq!(Kind::Block.label(), "block");
    }
}
