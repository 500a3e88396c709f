//! Spouse or common-law partner factors.
//!
//! A no-op unless the derived spouse eligibility holds. Eligible spouses
//! score on a distinct, smaller point scale and always against the
//! with-spouse column, whatever variant the principal applicant's own
//! factors use.

use super::{core, ScoreDetail, ScoreError, ScoreFactor};
use crate::domain::ApplicantProfile;
use crate::tables::{Bracket, CoarseClbTier, FactorTables, SpouseVariant, WorkYearsBracket};

pub(crate) fn score(
    profile: &ApplicantProfile,
    tables: &FactorTables,
    details: &mut Vec<ScoreDetail>,
) -> Result<u32, ScoreError> {
    if !profile.has_accompanying_spouse() {
        return Ok(0);
    }
    let spouse = match &profile.spouse {
        Some(spouse) => spouse,
        None => return Ok(0),
    };

    let mut points = 0u32;

    if let Some(education) = spouse.education {
        let education_points = tables
            .spouse_education()
            .points(education, SpouseVariant::WithSpouse)?;
        details.push(ScoreDetail {
            factor: ScoreFactor::SpouseEducation,
            bracket: education.label().to_string(),
            points: education_points,
        });
        points += education_points;
    }

    if let Some(language) = &spouse.language {
        let assessment = core::assess_language(language)?;
        for (ability, level) in assessment.levels() {
            let tier = CoarseClbTier::from_level(level);
            let ability_points = tables
                .spouse_language()
                .points(tier, SpouseVariant::WithSpouse)?;
            details.push(ScoreDetail {
                factor: ScoreFactor::SpouseLanguage,
                bracket: format!("{} {}", ability.label(), tier.key()),
                points: ability_points,
            });
            points += ability_points;
        }
    }

    let work_bracket = WorkYearsBracket::from_years(spouse.canadian_work_years);
    let work_points = tables
        .spouse_work()
        .points(work_bracket, SpouseVariant::WithSpouse)?;
    details.push(ScoreDetail {
        factor: ScoreFactor::SpouseWork,
        bracket: work_bracket.key().to_string(),
        points: work_points,
    });
    points += work_points;

    Ok(points)
}
