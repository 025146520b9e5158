//! Cyclic list navigation.

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the end of the list.
    Next,
    /// Towards the start of the list.
    Previous,
}

/// Move `index` one step in `direction` over a list of `len` items,
/// wrapping around at both ends. An empty list always yields 0.
///
/// ```rust
/// use tel_input::utils::navigation::{advance, Direction};
///
/// assert_eq!(advance(1, 2, Direction::Next), 0);
/// assert_eq!(advance(0, 2, Direction::Previous), 1);
/// ```
pub fn advance(index: usize, len: usize, direction: Direction) -> usize {
    if len == 0 {
        return 0;
    }
    let index = index % len;
    match direction {
        Direction::Next => (index + 1) % len,
        Direction::Previous => (index + len - 1) % len,
    }
}
