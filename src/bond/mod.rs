//! Bond patterns: rules choosing a brick variant per grid position.
//!
//! A rule is queried with a horizontal index (position within the row) and
//! a course index. Deterministic rules must return the same variant for the
//! same position; rules that draw on randomness report it through
//! [`PatternRule::is_deterministic`] and own their random source.

pub mod rng;
pub mod cycle;
pub mod presets;

pub use rng::BondRng;
pub use cycle::{CourseCycle, CourseRule};
pub use presets::{BondStyle, WildBond};

use crate::brick::BrickVariant;

/// Trait for choosing the brick variant at a grid position.
pub trait PatternRule: Send + Sync {
    /// Variant at horizontal index `x` in course `y`.
    fn brick_at(&self, x: u32, y: u32) -> BrickVariant;

    /// False for rules whose output varies between calls.
    fn is_deterministic(&self) -> bool {
        true
    }
}

impl<F> PatternRule for F
where
    F: Fn(u32, u32) -> BrickVariant + Send + Sync,
{
    fn brick_at(&self, x: u32, y: u32) -> BrickVariant {
        self(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_rule() {
        let rule = |x: u32, _y: u32| if x % 2 == 0 { BrickVariant::Whole } else { BrickVariant::Half };
        assert_eq!(rule.brick_at(0, 3), BrickVariant::Whole);
        assert_eq!(rule.brick_at(1, 3), BrickVariant::Half);
        assert!(rule.is_deterministic());
    }

    #[test]
    fn test_boxed_rule_dispatch() {
        let boxed: Box<dyn PatternRule> = Box::new(WildBond::new(7));
        assert!(!boxed.is_deterministic());
        assert_eq!(boxed.brick_at(0, 1), BrickVariant::ThreeQuarters);
    }
}
