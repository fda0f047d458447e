//! Named historical bonds.
//!
//! Each style is a plain course table; only the wild bond draws on
//! randomness, through its own seeded [`BondRng`].

use std::sync::Mutex;

use crate::brick::BrickVariant::{self, *};
use super::{BondRng, CourseCycle, CourseRule, PatternRule};

/// Brick bond presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondStyle {
    /// Stretchers offset by half a brick every other course
    #[default]
    RunningHalf,
    /// Stretchers offset by a quarter brick, four-course period
    RunningQuarter,
    /// Alternating header and stretcher courses
    Block,
    /// Block bond with every second stretcher course shifted by a header
    Cross,
    /// Headers only
    Header,
    /// Randomly mixed headers and stretchers
    Wild,
    /// Two stretchers then one header, alternating courses
    MarkischClassic,
    /// Märkisch bond with a six-course zigzag of closers
    MarkischZigzag,
    /// Header and stretcher alternating within each course
    Gothic,
    /// Header courses between Flemish-style courses
    Dutch,
    /// Two stretchers per header, closers alternate half and three-quarter
    Silesian,
    /// Header and stretcher alternating, shifted per course
    Flemish,
}

impl BondStyle {
    /// Get all available bond styles.
    pub const ALL: [BondStyle; 12] = [
        BondStyle::RunningHalf,
        BondStyle::RunningQuarter,
        BondStyle::Block,
        BondStyle::Cross,
        BondStyle::Header,
        BondStyle::Wild,
        BondStyle::MarkischClassic,
        BondStyle::MarkischZigzag,
        BondStyle::Gothic,
        BondStyle::Dutch,
        BondStyle::Silesian,
        BondStyle::Flemish,
    ];

    /// Get bond name as string.
    pub fn name(&self) -> &'static str {
        match self {
            BondStyle::RunningHalf => "running-half",
            BondStyle::RunningQuarter => "running-quarter",
            BondStyle::Block => "block",
            BondStyle::Cross => "cross",
            BondStyle::Header => "header",
            BondStyle::Wild => "wild",
            BondStyle::MarkischClassic => "markisch-classic",
            BondStyle::MarkischZigzag => "markisch-zigzag",
            BondStyle::Gothic => "gothic",
            BondStyle::Dutch => "dutch",
            BondStyle::Silesian => "silesian",
            BondStyle::Flemish => "flemish",
        }
    }

    /// Parse bond from its English or German name.
    pub fn from_name(name: &str) -> Option<BondStyle> {
        match name.to_lowercase().replace('_', "-").as_str() {
            "running-half" | "running" | "stretcher" | "halb-läuferverband" => Some(BondStyle::RunningHalf),
            "running-quarter" | "viertel-läuferverband" => Some(BondStyle::RunningQuarter),
            "block" | "english" | "blockverband" => Some(BondStyle::Block),
            "cross" | "english-cross" | "kreuzverband" => Some(BondStyle::Cross),
            "header" | "kopfverband" => Some(BondStyle::Header),
            "wild" | "wilderverband" => Some(BondStyle::Wild),
            "markisch-classic" | "märkischerverbandklassisch" => Some(BondStyle::MarkischClassic),
            "markisch-zigzag" | "märkischerverbandzickzack" => Some(BondStyle::MarkischZigzag),
            "gothic" | "gotischerverband" => Some(BondStyle::Gothic),
            "dutch" | "holländischerverband" => Some(BondStyle::Dutch),
            "silesian" | "schlesischerverband" => Some(BondStyle::Silesian),
            "flemish" | "flämischerverband" => Some(BondStyle::Flemish),
            _ => None,
        }
    }

    pub fn is_deterministic(&self) -> bool {
        !matches!(self, BondStyle::Wild)
    }

    /// Course table for deterministic styles; `None` for the wild bond.
    pub fn course_cycle(&self) -> Option<CourseCycle> {
        const MARKISCH: [BrickVariant; 2] = [Half, Whole];
        let markisch = |closer: BrickVariant| CourseRule::cycle(Whole, &MARKISCH).with_header(&[closer]);

        let cycle = match self {
            BondStyle::RunningHalf => CourseCycle::new(CourseRule::uniform(Whole))
                .then(CourseRule::uniform(Whole).with_header(&[Half])),
            BondStyle::RunningQuarter => CourseCycle::new(CourseRule::uniform(Whole))
                .then(CourseRule::uniform(Whole).with_header(&[Quarter]))
                .then(CourseRule::uniform(Whole).with_header(&[Half]))
                .then(CourseRule::uniform(Whole).with_header(&[ThreeQuarters])),
            BondStyle::Block => CourseCycle::new(CourseRule::uniform(Half))
                .then(CourseRule::uniform(Whole).with_header(&[ThreeQuarters])),
            BondStyle::Cross => CourseCycle::new(CourseRule::uniform(Half))
                .then(CourseRule::uniform(Whole).with_header(&[ThreeQuarters]))
                .then(CourseRule::uniform(Half))
                .then(CourseRule::uniform(Whole).with_header(&[ThreeQuarters, Half])),
            BondStyle::Header => CourseCycle::new(CourseRule::uniform(Half))
                .then(CourseRule::uniform(Half).with_header(&[ThreeQuarters])),
            BondStyle::Wild => return None,
            BondStyle::MarkischClassic => CourseCycle::new(markisch(ThreeQuarters))
                .then(CourseRule::cycle(Whole, &[Whole, Half])),
            BondStyle::MarkischZigzag => CourseCycle::new(markisch(Quarter))
                .then(markisch(Half))
                .then(markisch(ThreeQuarters))
                .then(markisch(Whole))
                .then(markisch(ThreeQuarters))
                .then(markisch(Half)),
            BondStyle::Gothic => CourseCycle::new(CourseRule::cycle(Half, &[Whole]).with_header(&[ThreeQuarters]))
                .then(CourseRule::cycle(Half, &[Whole])),
            BondStyle::Dutch => CourseCycle::new(CourseRule::uniform(Half))
                .then(CourseRule::cycle(Whole, &[Half]).with_header(&[ThreeQuarters])),
            BondStyle::Silesian => CourseCycle::new(markisch(Half))
                .then(markisch(ThreeQuarters)),
            BondStyle::Flemish => CourseCycle::new(CourseRule::cycle(Whole, &[Half]).with_header(&[ThreeQuarters]))
                .then(CourseRule::cycle(Half, &[Whole])),
        };
        Some(cycle)
    }

    /// Build a pattern rule for this style. `seed` only affects the wild bond.
    pub fn rule(&self, seed: u64) -> Box<dyn PatternRule> {
        match self.course_cycle() {
            Some(cycle) => Box::new(cycle),
            None => Box::new(WildBond::new(seed)),
        }
    }
}

/// Wild bond: odd courses start with a three-quarter closer, then each
/// position is a header or stretcher drawn from the bond's own RNG.
#[derive(Debug)]
pub struct WildBond {
    rng: Mutex<BondRng>,
}

impl WildBond {
    /// Chance of a header in courses without a closer.
    const EVEN_HEADER_CHANCE: f64 = 0.25;
    /// Chance of a header after the closer in odd courses.
    const ODD_HEADER_CHANCE: f64 = 0.5;

    pub fn new(seed: u64) -> Self {
        Self::with_rng(BondRng::new(seed))
    }

    pub fn with_rng(rng: BondRng) -> Self {
        Self { rng: Mutex::new(rng) }
    }

    fn draw(&self) -> f64 {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).next_f64()
    }
}

impl PatternRule for WildBond {
    fn brick_at(&self, x: u32, y: u32) -> BrickVariant {
        let header_chance = if y % 2 == 1 {
            if x == 0 {
                return ThreeQuarters;
            }
            Self::ODD_HEADER_CHANCE
        } else {
            Self::EVEN_HEADER_CHANCE
        };

        if self.draw() < header_chance { Half } else { Whole }
    }

    fn is_deterministic(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rule: &dyn PatternRule, y: u32, len: u32) -> Vec<BrickVariant> {
        (0..len).map(|x| rule.brick_at(x, y)).collect()
    }

    #[test]
    fn test_name_roundtrip() {
        for style in BondStyle::ALL {
            assert_eq!(BondStyle::from_name(style.name()), Some(style));
        }
        assert_eq!(BondStyle::from_name("Kreuzverband"), Some(BondStyle::Cross));
        assert_eq!(BondStyle::from_name("herringbone"), None);
    }

    #[test]
    fn test_only_wild_is_random() {
        for style in BondStyle::ALL {
            assert_eq!(style.course_cycle().is_some(), style.is_deterministic());
            assert_eq!(style.rule(1).is_deterministic(), style.is_deterministic());
        }
    }

    #[test]
    fn test_running_half() {
        let rule = BondStyle::RunningHalf.rule(0);
        assert_eq!(row(rule.as_ref(), 0, 3), vec![Whole, Whole, Whole]);
        assert_eq!(row(rule.as_ref(), 1, 3), vec![Half, Whole, Whole]);
        assert_eq!(row(rule.as_ref(), 2, 3), vec![Whole, Whole, Whole]);
    }

    #[test]
    fn test_cross_bond_period() {
        let cycle = BondStyle::Cross.course_cycle().unwrap();
        assert_eq!(cycle.period(), 4);
        assert_eq!(row(&cycle, 3, 4), vec![ThreeQuarters, Half, Whole, Whole]);
        assert_eq!(row(&cycle, 2, 2), vec![Half, Half]);
    }

    #[test]
    fn test_markisch_classic() {
        let cycle = BondStyle::MarkischClassic.course_cycle().unwrap();
        assert_eq!(row(&cycle, 0, 7), vec![ThreeQuarters, Half, Whole, Whole, Half, Whole, Whole]);
        assert_eq!(row(&cycle, 1, 6), vec![Whole, Whole, Half, Whole, Whole, Half]);
    }

    #[test]
    fn test_markisch_zigzag_closers() {
        let cycle = BondStyle::MarkischZigzag.course_cycle().unwrap();
        let closers: Vec<_> = (0..6).map(|y| cycle.brick_at(0, y)).collect();
        assert_eq!(closers, vec![Quarter, Half, ThreeQuarters, Whole, ThreeQuarters, Half]);
    }

    #[test]
    fn test_flemish_and_gothic() {
        let flemish = BondStyle::Flemish.course_cycle().unwrap();
        assert_eq!(row(&flemish, 0, 4), vec![ThreeQuarters, Half, Whole, Half]);
        assert_eq!(row(&flemish, 1, 4), vec![Half, Whole, Half, Whole]);

        let gothic = BondStyle::Gothic.course_cycle().unwrap();
        assert_eq!(row(&gothic, 0, 4), vec![ThreeQuarters, Whole, Half, Whole]);
    }

    #[test]
    fn test_wild_bond_seeded() {
        let a = WildBond::new(99);
        let b = WildBond::new(99);
        assert_eq!(row(&a, 0, 50), row(&b, 0, 50));
        assert_eq!(a.brick_at(0, 1), ThreeQuarters);
    }

    #[test]
    fn test_wild_bond_mixes_variants() {
        let bond = WildBond::new(3);
        let bricks = row(&bond, 0, 200);
        assert!(bricks.contains(&Half));
        assert!(bricks.contains(&Whole));
        assert!(bricks.iter().all(|&v| v == Half || v == Whole));
    }
}
