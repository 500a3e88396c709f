//! Applicant profile input model for a single scoring call.
//!
//! Profiles are constructed by the caller from externally-collected form
//! data, consumed once by the engine, and never mutated internally. Free-text
//! parsing (education strings, year strings, yes/no answers) happens before a
//! profile is built; the one exception is the Canadian-education category,
//! which the rule tables key by substring matching.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Marital status declared by the principal applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    CommonLaw,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            MaritalStatus::Single => "single",
            MaritalStatus::Married => "married",
            MaritalStatus::CommonLaw => "common_law",
            MaritalStatus::Divorced => "divorced",
            MaritalStatus::Widowed => "widowed",
        }
    }

    /// True when the status admits an accompanying spouse or partner.
    pub const fn has_partner(self) -> bool {
        matches!(self, MaritalStatus::Married | MaritalStatus::CommonLaw)
    }
}

/// Credential tiers recognized by the education factor tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum EducationLevel {
    LessThanSecondary,
    Secondary,
    OneYearPostSecondary,
    TwoYearPostSecondary,
    BachelorsDegree,
    TwoOrMoreCredentials,
    MastersOrProfessional,
    Doctorate,
}

impl EducationLevel {
    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::LessThanSecondary => "less_than_secondary",
            EducationLevel::Secondary => "secondary",
            EducationLevel::OneYearPostSecondary => "one_year_post_secondary",
            EducationLevel::TwoYearPostSecondary => "two_year_post_secondary",
            EducationLevel::BachelorsDegree => "bachelors_degree",
            EducationLevel::TwoOrMoreCredentials => "two_or_more_credentials",
            EducationLevel::MastersOrProfessional => "masters_or_professional",
            EducationLevel::Doctorate => "doctorate",
        }
    }
}

/// Raw per-ability results from one designated language test sitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageTestResult {
    /// Test name as reported by the intake form (e.g. "IELTS", "TCF Canada").
    pub test: String,
    pub listening: f32,
    pub reading: f32,
    pub writing: f32,
    pub speaking: f32,
}

/// Accompanying spouse or common-law partner snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpouseProfile {
    /// Whether the spouse will accompany the applicant to Canada.
    pub accompanying: bool,
    /// Citizens do not contribute spouse factors and do not shrink the
    /// principal applicant's scale.
    pub canadian_citizen: bool,
    pub education: Option<EducationLevel>,
    pub language: Option<LanguageTestResult>,
    pub canadian_work_years: u8,
}

/// Fully-formed input to one scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub age: u8,
    pub marital_status: MaritalStatus,
    pub spouse: Option<SpouseProfile>,
    pub education: EducationLevel,
    pub first_language: LanguageTestResult,
    pub second_language: Option<LanguageTestResult>,
    pub canadian_work_years: u8,
    pub foreign_work_years: u8,
    pub certificate_of_qualification: bool,
    pub sibling_in_canada: bool,
    pub provincial_nomination: bool,
    /// Canadian study credential category, free text mapped by substring
    /// (absent means no Canadian education claimed).
    pub canadian_education: Option<String>,
}

impl ApplicantProfile {
    /// Derived spouse eligibility: married or common-law, spouse
    /// accompanying, and the spouse not already a Canadian citizen. Gates
    /// the table variant every scorer uses and whether spouse factors are
    /// scored at all.
    pub fn has_accompanying_spouse(&self) -> bool {
        if !self.marital_status.has_partner() {
            return false;
        }
        match &self.spouse {
            Some(spouse) => spouse.accompanying && !spouse.canadian_citizen,
            None => false,
        }
    }
}

/// Age in completed years on the given reference date, for callers that
/// collect birth dates rather than ages.
pub fn age_on(date_of_birth: NaiveDate, as_of: NaiveDate) -> u8 {
    as_of
        .years_since(date_of_birth)
        .map(|years| years.min(u8::MAX as u32) as u8)
        .unwrap_or(0)
}
