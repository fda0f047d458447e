//! Periodic bonds: one rule per course, selected by `course % period`.
//!
//! Every course rule has at least one repeating variant and every cycle has
//! at least one course, so lookups are total for any index.

use serde::{Deserialize, Serialize};

use crate::brick::BrickVariant;
use crate::core::Error;
use super::PatternRule;

/// Brick sequence for one course: fixed header bricks at the start of the
/// row, then a repeating sequence indexed by absolute horizontal position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCourseRule")]
pub struct CourseRule {
    header: Vec<BrickVariant>,
    repeat: Vec<BrickVariant>,
}

#[derive(Deserialize)]
struct RawCourseRule {
    #[serde(default)]
    header: Vec<BrickVariant>,
    repeat: Vec<BrickVariant>,
}

impl TryFrom<RawCourseRule> for CourseRule {
    type Error = Error;

    fn try_from(raw: RawCourseRule) -> Result<Self, Self::Error> {
        if raw.repeat.is_empty() {
            return Err(Error::InvalidCatalogue("course rule needs at least one repeating brick".into()));
        }
        Ok(Self { header: raw.header, repeat: raw.repeat })
    }
}

impl CourseRule {
    /// The same variant at every position.
    pub fn uniform(variant: BrickVariant) -> Self {
        Self { header: Vec::new(), repeat: vec![variant] }
    }

    /// Repeat `first, rest...` along the row; position `x` takes entry `x % len`.
    pub fn cycle(first: BrickVariant, rest: &[BrickVariant]) -> Self {
        let mut repeat = Vec::with_capacity(rest.len() + 1);
        repeat.push(first);
        repeat.extend_from_slice(rest);
        Self { header: Vec::new(), repeat }
    }

    /// Override the first positions of the row (closers at the wall end).
    pub fn with_header(mut self, header: &[BrickVariant]) -> Self {
        self.header = header.to_vec();
        self
    }

    /// Variant at horizontal index `x`.
    #[inline]
    pub fn brick_at(&self, x: u32) -> BrickVariant {
        let x = x as usize;
        match self.header.get(x) {
            Some(&variant) => variant,
            None => self.repeat[x % self.repeat.len()],
        }
    }
}

/// Bond that cycles through course rules with period `courses.len()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CourseRule>", into = "Vec<CourseRule>")]
pub struct CourseCycle {
    courses: Vec<CourseRule>,
}

impl TryFrom<Vec<CourseRule>> for CourseCycle {
    type Error = Error;

    fn try_from(courses: Vec<CourseRule>) -> Result<Self, Self::Error> {
        if courses.is_empty() {
            return Err(Error::InvalidCatalogue("course cycle needs at least one course".into()));
        }
        Ok(Self { courses })
    }
}

impl From<CourseCycle> for Vec<CourseRule> {
    fn from(cycle: CourseCycle) -> Self {
        cycle.courses
    }
}

impl CourseCycle {
    /// Start a cycle whose course 0 follows `first`.
    pub fn new(first: CourseRule) -> Self {
        Self { courses: vec![first] }
    }

    /// Append the rule for the next course in the period.
    pub fn then(mut self, rule: CourseRule) -> Self {
        self.courses.push(rule);
        self
    }

    /// Number of courses before the bond repeats.
    pub fn period(&self) -> u32 {
        self.courses.len() as u32
    }

    /// Rule applied to course `y`.
    pub fn course(&self, y: u32) -> &CourseRule {
        &self.courses[(y % self.period()) as usize]
    }
}

impl PatternRule for CourseCycle {
    fn brick_at(&self, x: u32, y: u32) -> BrickVariant {
        self.course(y).brick_at(x)
    }
}
