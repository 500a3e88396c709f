//! Comprehensive Ranking System score aggregation.
//!
//! The engine runs the four factor sections in order, carrying the language
//! benchmark summary from the core section into the transferability and
//! additional sections, and returns per-section subtotals plus a per-factor
//! audit trace. Each scoring call is pure: the profile is read once, the
//! shared tables are read-only, and nothing partial is returned on failure.

pub(crate) mod additional;
pub(crate) mod core;
pub(crate) mod spouse;
pub(crate) mod transferability;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::benchmark::NormalizeError;
use crate::domain::ApplicantProfile;
use crate::tables::{FactorTables, SpouseVariant, TableError};

/// Sections of the comprehensive ranking score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreSection {
    CoreHumanCapital,
    SpouseFactors,
    SkillTransferability,
    AdditionalFactors,
}

/// Individual factors appearing in audit traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreFactor {
    Age,
    Education,
    FirstLanguage,
    SecondLanguage,
    CanadianWork,
    SpouseEducation,
    SpouseLanguage,
    SpouseWork,
    EducationTransfer,
    ForeignWorkTransfer,
    CertificateOfQualification,
    SiblingInCanada,
    FrenchLanguageSkills,
    CanadianEducation,
    ProvincialNomination,
}

impl ScoreFactor {
    pub const fn section(self) -> ScoreSection {
        match self {
            ScoreFactor::Age
            | ScoreFactor::Education
            | ScoreFactor::FirstLanguage
            | ScoreFactor::SecondLanguage
            | ScoreFactor::CanadianWork => ScoreSection::CoreHumanCapital,
            ScoreFactor::SpouseEducation
            | ScoreFactor::SpouseLanguage
            | ScoreFactor::SpouseWork => ScoreSection::SpouseFactors,
            ScoreFactor::EducationTransfer
            | ScoreFactor::ForeignWorkTransfer
            | ScoreFactor::CertificateOfQualification => ScoreSection::SkillTransferability,
            ScoreFactor::SiblingInCanada
            | ScoreFactor::FrenchLanguageSkills
            | ScoreFactor::CanadianEducation
            | ScoreFactor::ProvincialNomination => ScoreSection::AdditionalFactors,
        }
    }
}

/// Discrete contribution to a score, allowing transparent audits. Details
/// record raw sub-scores and the bracket each one matched; section caps
/// apply to the subtotals, so a capped section can carry details summing
/// above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetail {
    pub factor: ScoreFactor,
    pub bracket: String,
    pub points: u32,
}

/// Section subtotals and grand total for one scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub core_human_capital: u32,
    pub spouse_factors: u32,
    pub skill_transferability: u32,
    pub additional_factors: u32,
    pub total: u32,
    pub details: Vec<ScoreDetail>,
}

/// Input failures surfaced to the caller; scoring aborts and nothing
/// partial is returned.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("age {0} is outside the scorable range of 17 to 100")]
    InvalidAge(u8),
    #[error("certificate of qualification requires CLB 5 or higher, found CLB {0}")]
    CertificateClbTooLow(u8),
    #[error(transparent)]
    Language(#[from] NormalizeError),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Benchmark levels carried forward from the core language assessment for
/// the transferability and additional sections.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LanguageSummary {
    pub(crate) first_min_clb: u8,
    pub(crate) first_is_french: bool,
    pub(crate) second_min_clb: Option<u8>,
    pub(crate) second_is_french: bool,
}

/// Stateless engine applying the factor tables to applicant profiles.
pub struct CrsEngine {
    tables: Arc<FactorTables>,
}

impl CrsEngine {
    pub fn new(tables: Arc<FactorTables>) -> Self {
        Self { tables }
    }

    /// Engine over the bundled regulatory tables.
    pub fn with_bundled_tables() -> Result<Self, TableError> {
        Ok(Self::new(Arc::new(FactorTables::bundled()?)))
    }

    /// Score a fully-formed profile, returning subtotals and an audit
    /// trace. The total is the plain sum of the four subtotals; a
    /// provincial nomination alone pushes it near 1200.
    pub fn score(&self, profile: &ApplicantProfile) -> Result<ScoreBreakdown, ScoreError> {
        let variant = if profile.has_accompanying_spouse() {
            SpouseVariant::WithSpouse
        } else {
            SpouseVariant::WithoutSpouse
        };
        let mut details = Vec::new();

        let core = core::score(profile, variant, &self.tables, &mut details)?;
        let spouse_factors = spouse::score(profile, &self.tables, &mut details)?;
        let skill_transferability =
            transferability::score(profile, &core.languages, &mut details)?;
        let additional_factors =
            additional::score(profile, &core.languages, variant, &self.tables, &mut details)?;

        let total = core.points + spouse_factors + skill_transferability + additional_factors;
        debug!(
            core = core.points,
            spouse = spouse_factors,
            transferability = skill_transferability,
            additional = additional_factors,
            total,
            "profile scored"
        );

        Ok(ScoreBreakdown {
            core_human_capital: core.points,
            spouse_factors,
            skill_transferability,
            additional_factors,
            total,
            details,
        })
    }
}
