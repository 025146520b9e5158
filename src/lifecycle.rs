//! Default-value ("seed") lifecycle of the phone field.
//!
//! ```text
//!  EMPTY --focus--> SEEDED --input past seed--> TOUCHED
//!    ^                 |                           |
//!    +------blur-------+                           |
//!                      ^------empty input----------+
//! ```
//!
//! Touched is sticky: editing back to the bare calling code keeps it, so
//! blur no longer clears the field. Only an empty buffer reseeds.

use serde::Serialize;

/// Seed state of a phone field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedState {
    /// No content.
    #[default]
    Empty,
    /// Holds exactly the calling-code seed, not yet edited by the user.
    Seeded,
    /// The user typed past the seed.
    Touched,
}

impl SeedState {
    /// State for a digit buffer relative to the active calling code.
    pub fn classify(digits: &str, calling_code: &str) -> Self {
        if digits.is_empty() {
            SeedState::Empty
        } else if digits == calling_code {
            SeedState::Seeded
        } else {
            SeedState::Touched
        }
    }

    /// Input transition for a non-empty digit buffer.
    ///
    /// A touched field stays touched whatever the buffer holds.
    pub fn on_input(self, digits: &str, calling_code: &str) -> Self {
        match self {
            SeedState::Touched if !digits.is_empty() => SeedState::Touched,
            _ => Self::classify(digits, calling_code),
        }
    }

    /// Whether the user has typed past the seed.
    pub fn is_touched(self) -> bool {
        matches!(self, SeedState::Touched)
    }

    /// Focus transition: an empty field gets seeded.
    pub fn on_focus(self) -> Self {
        match self {
            SeedState::Empty => SeedState::Seeded,
            other => other,
        }
    }

    /// Blur transition: an untouched seed whose display still equals the
    /// seed is cleared. Returns the next state and whether to clear.
    pub fn on_blur(self, display: &str, seed: &str) -> (Self, bool) {
        match self {
            SeedState::Seeded if display == seed => (SeedState::Empty, true),
            other => (other, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(SeedState::classify("", "44"), SeedState::Empty);
        assert_eq!(SeedState::classify("44", "44"), SeedState::Seeded);
        assert_eq!(SeedState::classify("447", "44"), SeedState::Touched);
        assert_eq!(SeedState::classify("4", "44"), SeedState::Touched);
    }

    #[test]
    fn test_input_from_seed() {
        assert_eq!(SeedState::Seeded.on_input("44", "44"), SeedState::Seeded);
        assert_eq!(SeedState::Seeded.on_input("447", "44"), SeedState::Touched);
        assert_eq!(SeedState::Empty.on_input("44", "44"), SeedState::Seeded);
    }

    #[test]
    fn test_touched_is_sticky() {
        assert_eq!(SeedState::Touched.on_input("44", "44"), SeedState::Touched);
        assert_eq!(SeedState::Touched.on_input("4", "44"), SeedState::Touched);
        assert_eq!(SeedState::Touched.on_input("", "44"), SeedState::Empty);
    }

    #[test]
    fn test_focus_seeds_only_empty() {
        assert_eq!(SeedState::Empty.on_focus(), SeedState::Seeded);
        assert_eq!(SeedState::Seeded.on_focus(), SeedState::Seeded);
        assert_eq!(SeedState::Touched.on_focus(), SeedState::Touched);
    }

    #[test]
    fn test_blur_clears_untouched_seed() {
        assert_eq!(SeedState::Seeded.on_blur("+44", "+44"), (SeedState::Empty, true));
    }

    #[test]
    fn test_blur_keeps_everything_else() {
        assert_eq!(SeedState::Seeded.on_blur("+1", "+44"), (SeedState::Seeded, false));
        assert_eq!(
            SeedState::Touched.on_blur("+44 7", "+44"),
            (SeedState::Touched, false)
        );
        assert_eq!(SeedState::Empty.on_blur("", "+44"), (SeedState::Empty, false));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&SeedState::Seeded).unwrap(), r#""seeded""#);
    }
}
