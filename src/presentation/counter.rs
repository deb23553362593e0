//! Quantity stepper policy. Stepping past a bound is a no-op, not an error.

use crate::domain::{MAX_COUNT, MIN_COUNT};

/// Next quantity up, or `None` when already at the maximum.
pub fn increment(count: u32) -> Option<u32> {
    (count < MAX_COUNT).then(|| count + 1)
}

/// Next quantity down, or `None` when already at the minimum.
pub fn decrement(count: u32) -> Option<u32> {
    (count > MIN_COUNT).then(|| count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_stops_at_max() {
        assert_eq!(increment(98), Some(99));
        assert_eq!(increment(99), None);
    }

    #[test]
    fn test_decrement_stops_at_min() {
        assert_eq!(decrement(2), Some(1));
        assert_eq!(decrement(1), None);
    }
}
