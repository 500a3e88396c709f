//! Discrete bracket keys for each factor table.
//!
//! Brackets are the lookup keys the rule-set exports use; every enum lists
//! its full key set so load-time validation can require the tables to be
//! exhaustive.

use super::Bracket;
use crate::domain::EducationLevel;

/// Age brackets: exact ages 17-44 with a merged 20-29 bucket and saturating
/// ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AgeBracket {
    SeventeenOrUnder,
    Eighteen,
    Nineteen,
    TwentyToTwentyNine,
    Thirty,
    ThirtyOne,
    ThirtyTwo,
    ThirtyThree,
    ThirtyFour,
    ThirtyFive,
    ThirtySix,
    ThirtySeven,
    ThirtyEight,
    ThirtyNine,
    Forty,
    FortyOne,
    FortyTwo,
    FortyThree,
    FortyFour,
    FortyFiveOrOver,
}

impl AgeBracket {
    /// Bracket for a validated age; the scorer rejects ages outside
    /// [17, 100] before calling this.
    pub fn from_age(age: u8) -> Self {
        match age {
            0..=17 => AgeBracket::SeventeenOrUnder,
            18 => AgeBracket::Eighteen,
            19 => AgeBracket::Nineteen,
            20..=29 => AgeBracket::TwentyToTwentyNine,
            30 => AgeBracket::Thirty,
            31 => AgeBracket::ThirtyOne,
            32 => AgeBracket::ThirtyTwo,
            33 => AgeBracket::ThirtyThree,
            34 => AgeBracket::ThirtyFour,
            35 => AgeBracket::ThirtyFive,
            36 => AgeBracket::ThirtySix,
            37 => AgeBracket::ThirtySeven,
            38 => AgeBracket::ThirtyEight,
            39 => AgeBracket::ThirtyNine,
            40 => AgeBracket::Forty,
            41 => AgeBracket::FortyOne,
            42 => AgeBracket::FortyTwo,
            43 => AgeBracket::FortyThree,
            44 => AgeBracket::FortyFour,
            _ => AgeBracket::FortyFiveOrOver,
        }
    }
}

impl Bracket for AgeBracket {
    fn all() -> &'static [Self] {
        &[
            AgeBracket::SeventeenOrUnder,
            AgeBracket::Eighteen,
            AgeBracket::Nineteen,
            AgeBracket::TwentyToTwentyNine,
            AgeBracket::Thirty,
            AgeBracket::ThirtyOne,
            AgeBracket::ThirtyTwo,
            AgeBracket::ThirtyThree,
            AgeBracket::ThirtyFour,
            AgeBracket::ThirtyFive,
            AgeBracket::ThirtySix,
            AgeBracket::ThirtySeven,
            AgeBracket::ThirtyEight,
            AgeBracket::ThirtyNine,
            AgeBracket::Forty,
            AgeBracket::FortyOne,
            AgeBracket::FortyTwo,
            AgeBracket::FortyThree,
            AgeBracket::FortyFour,
            AgeBracket::FortyFiveOrOver,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            AgeBracket::SeventeenOrUnder => "17_or_under",
            AgeBracket::Eighteen => "18",
            AgeBracket::Nineteen => "19",
            AgeBracket::TwentyToTwentyNine => "20_to_29",
            AgeBracket::Thirty => "30",
            AgeBracket::ThirtyOne => "31",
            AgeBracket::ThirtyTwo => "32",
            AgeBracket::ThirtyThree => "33",
            AgeBracket::ThirtyFour => "34",
            AgeBracket::ThirtyFive => "35",
            AgeBracket::ThirtySix => "36",
            AgeBracket::ThirtySeven => "37",
            AgeBracket::ThirtyEight => "38",
            AgeBracket::ThirtyNine => "39",
            AgeBracket::Forty => "40",
            AgeBracket::FortyOne => "41",
            AgeBracket::FortyTwo => "42",
            AgeBracket::FortyThree => "43",
            AgeBracket::FortyFour => "44",
            AgeBracket::FortyFiveOrOver => "45_or_over",
        }
    }
}

impl Bracket for EducationLevel {
    fn all() -> &'static [Self] {
        &[
            EducationLevel::LessThanSecondary,
            EducationLevel::Secondary,
            EducationLevel::OneYearPostSecondary,
            EducationLevel::TwoYearPostSecondary,
            EducationLevel::BachelorsDegree,
            EducationLevel::TwoOrMoreCredentials,
            EducationLevel::MastersOrProfessional,
            EducationLevel::Doctorate,
        ]
    }

    fn key(self) -> &'static str {
        self.label()
    }
}

/// First-official-language benchmark tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ClbTier {
    BelowFour,
    FourToFive,
    Six,
    Seven,
    Eight,
    Nine,
    TenOrHigher,
}

impl ClbTier {
    pub fn from_level(level: u8) -> Self {
        match level {
            0..=3 => ClbTier::BelowFour,
            4 | 5 => ClbTier::FourToFive,
            6 => ClbTier::Six,
            7 => ClbTier::Seven,
            8 => ClbTier::Eight,
            9 => ClbTier::Nine,
            _ => ClbTier::TenOrHigher,
        }
    }
}

impl Bracket for ClbTier {
    fn all() -> &'static [Self] {
        &[
            ClbTier::BelowFour,
            ClbTier::FourToFive,
            ClbTier::Six,
            ClbTier::Seven,
            ClbTier::Eight,
            ClbTier::Nine,
            ClbTier::TenOrHigher,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            ClbTier::BelowFour => "clb_below_4",
            ClbTier::FourToFive => "clb_4_5",
            ClbTier::Six => "clb_6",
            ClbTier::Seven => "clb_7",
            ClbTier::Eight => "clb_8",
            ClbTier::Nine => "clb_9",
            ClbTier::TenOrHigher => "clb_10_plus",
        }
    }
}

/// Coarser benchmark tiers used for the second official language and the
/// spouse's language factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CoarseClbTier {
    FourOrBelow,
    FiveToSix,
    SevenToEight,
    NineOrHigher,
}

impl CoarseClbTier {
    pub fn from_level(level: u8) -> Self {
        match level {
            0..=4 => CoarseClbTier::FourOrBelow,
            5 | 6 => CoarseClbTier::FiveToSix,
            7 | 8 => CoarseClbTier::SevenToEight,
            _ => CoarseClbTier::NineOrHigher,
        }
    }
}

impl Bracket for CoarseClbTier {
    fn all() -> &'static [Self] {
        &[
            CoarseClbTier::FourOrBelow,
            CoarseClbTier::FiveToSix,
            CoarseClbTier::SevenToEight,
            CoarseClbTier::NineOrHigher,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            CoarseClbTier::FourOrBelow => "clb_4_or_below",
            CoarseClbTier::FiveToSix => "clb_5_6",
            CoarseClbTier::SevenToEight => "clb_7_8",
            CoarseClbTier::NineOrHigher => "clb_9_plus",
        }
    }
}

/// Canadian work-experience buckets, saturating at five years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkYearsBracket {
    None,
    One,
    Two,
    Three,
    Four,
    FiveOrMore,
}

impl WorkYearsBracket {
    pub fn from_years(years: u8) -> Self {
        match years {
            0 => WorkYearsBracket::None,
            1 => WorkYearsBracket::One,
            2 => WorkYearsBracket::Two,
            3 => WorkYearsBracket::Three,
            4 => WorkYearsBracket::Four,
            _ => WorkYearsBracket::FiveOrMore,
        }
    }
}

impl Bracket for WorkYearsBracket {
    fn all() -> &'static [Self] {
        &[
            WorkYearsBracket::None,
            WorkYearsBracket::One,
            WorkYearsBracket::Two,
            WorkYearsBracket::Three,
            WorkYearsBracket::Four,
            WorkYearsBracket::FiveOrMore,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            WorkYearsBracket::None => "none",
            WorkYearsBracket::One => "1_year",
            WorkYearsBracket::Two => "2_years",
            WorkYearsBracket::Three => "3_years",
            WorkYearsBracket::Four => "4_years",
            WorkYearsBracket::FiveOrMore => "5_years_plus",
        }
    }
}

/// Brackets of the additional-factors table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AdditionalFactor {
    SiblingInCanada,
    FrenchWithWeakEnglish,
    FrenchWithStrongEnglish,
    CanadianEducationSecondaryOrLess,
    CanadianEducationOneOrTwoYears,
    CanadianEducationThreeYearsOrAdvanced,
    ProvincialNomination,
}

impl Bracket for AdditionalFactor {
    fn all() -> &'static [Self] {
        &[
            AdditionalFactor::SiblingInCanada,
            AdditionalFactor::FrenchWithWeakEnglish,
            AdditionalFactor::FrenchWithStrongEnglish,
            AdditionalFactor::CanadianEducationSecondaryOrLess,
            AdditionalFactor::CanadianEducationOneOrTwoYears,
            AdditionalFactor::CanadianEducationThreeYearsOrAdvanced,
            AdditionalFactor::ProvincialNomination,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            AdditionalFactor::SiblingInCanada => "sibling_in_canada",
            AdditionalFactor::FrenchWithWeakEnglish => "french_clb7_weak_english",
            AdditionalFactor::FrenchWithStrongEnglish => "french_clb7_strong_english",
            AdditionalFactor::CanadianEducationSecondaryOrLess => {
                "canadian_education_secondary_or_less"
            }
            AdditionalFactor::CanadianEducationOneOrTwoYears => {
                "canadian_education_one_or_two_years"
            }
            AdditionalFactor::CanadianEducationThreeYearsOrAdvanced => {
                "canadian_education_three_years_or_advanced"
            }
            AdditionalFactor::ProvincialNomination => "provincial_nomination",
        }
    }
}
