//! Skill transferability combinations.
//!
//! Three buckets (education combinations, foreign-work combinations, and
//! the certificate of qualification), each capped at 50 before summing,
//! with the section subtotal capped again at 100. Within a bucket both
//! pair-combinations count toward the cap, matching the official worksheet.
//! Combination grids are exhaustive matches over enum pairs.

use super::{LanguageSummary, ScoreDetail, ScoreError, ScoreFactor};
use crate::domain::{ApplicantProfile, EducationLevel};

const BUCKET_CAP: u32 = 50;
const SECTION_CAP: u32 = 100;

/// Coarse education grouping used by the combination grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EducationCategory {
    SecondaryOrLess,
    OneYearCredential,
    TwoYearCredential,
    DegreeOfThreeYears,
    TwoOrMoreCredentials,
    GraduateLevel,
}

impl EducationCategory {
    fn from_level(level: EducationLevel) -> Self {
        match level {
            EducationLevel::LessThanSecondary | EducationLevel::Secondary => {
                EducationCategory::SecondaryOrLess
            }
            EducationLevel::OneYearPostSecondary => EducationCategory::OneYearCredential,
            EducationLevel::TwoYearPostSecondary => EducationCategory::TwoYearCredential,
            EducationLevel::BachelorsDegree => EducationCategory::DegreeOfThreeYears,
            EducationLevel::TwoOrMoreCredentials => EducationCategory::TwoOrMoreCredentials,
            EducationLevel::MastersOrProfessional | EducationLevel::Doctorate => {
                EducationCategory::GraduateLevel
            }
        }
    }

    fn label(self) -> &'static str {
        match self {
            EducationCategory::SecondaryOrLess => "secondary_or_less",
            EducationCategory::OneYearCredential => "one_year_credential",
            EducationCategory::TwoYearCredential => "two_year_credential",
            EducationCategory::DegreeOfThreeYears => "three_year_degree",
            EducationCategory::TwoOrMoreCredentials => "two_or_more_credentials",
            EducationCategory::GraduateLevel => "graduate_level",
        }
    }
}

/// Benchmark tiers recognized by the combination grids; below CLB 7 no
/// combination applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LanguageTier {
    BelowSeven,
    SevenToEight,
    NineOrHigher,
}

impl LanguageTier {
    fn from_min_clb(min_clb: u8) -> Self {
        match min_clb {
            0..=6 => LanguageTier::BelowSeven,
            7 | 8 => LanguageTier::SevenToEight,
            _ => LanguageTier::NineOrHigher,
        }
    }

    fn label(self) -> &'static str {
        match self {
            LanguageTier::BelowSeven => "clb_below_7",
            LanguageTier::SevenToEight => "clb_7_8",
            LanguageTier::NineOrHigher => "clb_9_plus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CanadianWorkTier {
    LessThanOne,
    OneYear,
    TwoOrMore,
}

impl CanadianWorkTier {
    fn from_years(years: u8) -> Self {
        match years {
            0 => CanadianWorkTier::LessThanOne,
            1 => CanadianWorkTier::OneYear,
            _ => CanadianWorkTier::TwoOrMore,
        }
    }

    fn label(self) -> &'static str {
        match self {
            CanadianWorkTier::LessThanOne => "under_1_year",
            CanadianWorkTier::OneYear => "1_year",
            CanadianWorkTier::TwoOrMore => "2_years_plus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ForeignWorkTier {
    None,
    OneToTwo,
    ThreeOrMore,
}

impl ForeignWorkTier {
    fn from_years(years: u8) -> Self {
        match years {
            0 => ForeignWorkTier::None,
            1 | 2 => ForeignWorkTier::OneToTwo,
            _ => ForeignWorkTier::ThreeOrMore,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ForeignWorkTier::None => "none",
            ForeignWorkTier::OneToTwo => "1_2_years",
            ForeignWorkTier::ThreeOrMore => "3_years_plus",
        }
    }
}

fn education_language_points(category: EducationCategory, tier: LanguageTier) -> u32 {
    match (category, tier) {
        (_, LanguageTier::BelowSeven) => 0,
        (EducationCategory::SecondaryOrLess, _) => 0,
        (
            EducationCategory::OneYearCredential
            | EducationCategory::TwoYearCredential
            | EducationCategory::DegreeOfThreeYears,
            LanguageTier::SevenToEight,
        ) => 13,
        (
            EducationCategory::OneYearCredential
            | EducationCategory::TwoYearCredential
            | EducationCategory::DegreeOfThreeYears,
            LanguageTier::NineOrHigher,
        ) => 25,
        (
            EducationCategory::TwoOrMoreCredentials | EducationCategory::GraduateLevel,
            LanguageTier::SevenToEight,
        ) => 25,
        (
            EducationCategory::TwoOrMoreCredentials | EducationCategory::GraduateLevel,
            LanguageTier::NineOrHigher,
        ) => 50,
    }
}

fn education_work_points(category: EducationCategory, work: CanadianWorkTier) -> u32 {
    match (category, work) {
        (_, CanadianWorkTier::LessThanOne) => 0,
        (EducationCategory::SecondaryOrLess, _) => 0,
        (
            EducationCategory::OneYearCredential
            | EducationCategory::TwoYearCredential
            | EducationCategory::DegreeOfThreeYears,
            CanadianWorkTier::OneYear,
        ) => 13,
        (
            EducationCategory::OneYearCredential
            | EducationCategory::TwoYearCredential
            | EducationCategory::DegreeOfThreeYears,
            CanadianWorkTier::TwoOrMore,
        ) => 25,
        (
            EducationCategory::TwoOrMoreCredentials | EducationCategory::GraduateLevel,
            CanadianWorkTier::OneYear,
        ) => 25,
        (
            EducationCategory::TwoOrMoreCredentials | EducationCategory::GraduateLevel,
            CanadianWorkTier::TwoOrMore,
        ) => 50,
    }
}

fn foreign_language_points(foreign: ForeignWorkTier, tier: LanguageTier) -> u32 {
    match (foreign, tier) {
        (ForeignWorkTier::None, _) => 0,
        (_, LanguageTier::BelowSeven) => 0,
        (ForeignWorkTier::OneToTwo, LanguageTier::SevenToEight) => 13,
        (ForeignWorkTier::OneToTwo, LanguageTier::NineOrHigher) => 25,
        (ForeignWorkTier::ThreeOrMore, LanguageTier::SevenToEight) => 25,
        (ForeignWorkTier::ThreeOrMore, LanguageTier::NineOrHigher) => 50,
    }
}

fn foreign_canadian_points(foreign: ForeignWorkTier, canadian: CanadianWorkTier) -> u32 {
    match (foreign, canadian) {
        (ForeignWorkTier::None, _) => 0,
        (_, CanadianWorkTier::LessThanOne) => 0,
        (ForeignWorkTier::OneToTwo, CanadianWorkTier::OneYear) => 13,
        (ForeignWorkTier::OneToTwo, CanadianWorkTier::TwoOrMore) => 25,
        (ForeignWorkTier::ThreeOrMore, CanadianWorkTier::OneYear) => 25,
        (ForeignWorkTier::ThreeOrMore, CanadianWorkTier::TwoOrMore) => 50,
    }
}

fn certificate_points(min_clb: u8) -> Result<u32, ScoreError> {
    match min_clb {
        0..=4 => Err(ScoreError::CertificateClbTooLow(min_clb)),
        5 | 6 => Ok(25),
        _ => Ok(50),
    }
}

pub(crate) fn score(
    profile: &ApplicantProfile,
    languages: &LanguageSummary,
    details: &mut Vec<ScoreDetail>,
) -> Result<u32, ScoreError> {
    let category = EducationCategory::from_level(profile.education);
    let language = LanguageTier::from_min_clb(languages.first_min_clb);
    let canadian = CanadianWorkTier::from_years(profile.canadian_work_years);
    let foreign = ForeignWorkTier::from_years(profile.foreign_work_years);

    let education_language = education_language_points(category, language);
    details.push(ScoreDetail {
        factor: ScoreFactor::EducationTransfer,
        bracket: format!("{} x {}", category.label(), language.label()),
        points: education_language,
    });
    let education_work = education_work_points(category, canadian);
    details.push(ScoreDetail {
        factor: ScoreFactor::EducationTransfer,
        bracket: format!("{} x {}", category.label(), canadian.label()),
        points: education_work,
    });
    let education_bucket = (education_language + education_work).min(BUCKET_CAP);

    let foreign_language = foreign_language_points(foreign, language);
    details.push(ScoreDetail {
        factor: ScoreFactor::ForeignWorkTransfer,
        bracket: format!("{} x {}", foreign.label(), language.label()),
        points: foreign_language,
    });
    let foreign_canadian = foreign_canadian_points(foreign, canadian);
    details.push(ScoreDetail {
        factor: ScoreFactor::ForeignWorkTransfer,
        bracket: format!("{} x {}", foreign.label(), canadian.label()),
        points: foreign_canadian,
    });
    let foreign_bucket = (foreign_language + foreign_canadian).min(BUCKET_CAP);

    let certificate_bucket = if profile.certificate_of_qualification {
        let certificate = certificate_points(languages.first_min_clb)?;
        let bracket = if languages.first_min_clb <= 6 {
            "clb_5_6"
        } else {
            "clb_7_plus"
        };
        details.push(ScoreDetail {
            factor: ScoreFactor::CertificateOfQualification,
            bracket: bracket.to_string(),
            points: certificate,
        });
        certificate.min(BUCKET_CAP)
    } else {
        0
    };

    Ok((education_bucket + foreign_bucket + certificate_bucket).min(SECTION_CAP))
}
