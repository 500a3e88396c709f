//! Additional factors: sibling in Canada, French-language skills, Canadian
//! education, and provincial nomination. Contributions are summed with no
//! internal cap.

use super::{LanguageSummary, ScoreDetail, ScoreError, ScoreFactor};
use crate::domain::ApplicantProfile;
use crate::tables::{AdditionalFactor, Bracket, FactorTables, SpouseVariant};

/// Minimum NCLC across the four French abilities for the bonus to apply.
const FRENCH_BONUS_FLOOR: u8 = 7;

pub(crate) fn score(
    profile: &ApplicantProfile,
    languages: &LanguageSummary,
    variant: SpouseVariant,
    tables: &FactorTables,
    details: &mut Vec<ScoreDetail>,
) -> Result<u32, ScoreError> {
    let table = tables.additional();
    let mut points = 0u32;

    if profile.sibling_in_canada {
        let sibling = table.points(AdditionalFactor::SiblingInCanada, variant)?;
        details.push(ScoreDetail {
            factor: ScoreFactor::SiblingInCanada,
            bracket: AdditionalFactor::SiblingInCanada.key().to_string(),
            points: sibling,
        });
        points += sibling;
    }

    if let Some(factor) = french_bonus_factor(languages) {
        let french = table.points(factor, variant)?;
        details.push(ScoreDetail {
            factor: ScoreFactor::FrenchLanguageSkills,
            bracket: factor.key().to_string(),
            points: french,
        });
        points += french;
    }

    if let Some(description) = &profile.canadian_education {
        let factor = canadian_education_factor(description);
        let education = table.points(factor, variant)?;
        details.push(ScoreDetail {
            factor: ScoreFactor::CanadianEducation,
            bracket: factor.key().to_string(),
            points: education,
        });
        points += education;
    }

    if profile.provincial_nomination {
        let nomination = table.points(AdditionalFactor::ProvincialNomination, variant)?;
        details.push(ScoreDetail {
            factor: ScoreFactor::ProvincialNomination,
            bracket: AdditionalFactor::ProvincialNomination.key().to_string(),
            points: nomination,
        });
        points += nomination;
    }

    Ok(points)
}

/// The bonus applies when either official-language test is French with a
/// minimum NCLC of 7. The weak-English branch (other language CLB <= 4 or
/// absent) is evaluated first; the strong-English branch only applies when
/// it does not.
fn french_bonus_factor(languages: &LanguageSummary) -> Option<AdditionalFactor> {
    let (french_min, other_min) = if languages.first_is_french {
        (Some(languages.first_min_clb), languages.second_min_clb)
    } else if languages.second_is_french {
        (languages.second_min_clb, Some(languages.first_min_clb))
    } else {
        (None, None)
    };

    let french_min = french_min?;
    if french_min < FRENCH_BONUS_FLOOR {
        return None;
    }
    if other_min.map(|clb| clb <= 4).unwrap_or(true) {
        Some(AdditionalFactor::FrenchWithWeakEnglish)
    } else {
        Some(AdditionalFactor::FrenchWithStrongEnglish)
    }
}

/// Map the free-text Canadian credential category by substring, longest
/// programs first.
fn canadian_education_factor(description: &str) -> AdditionalFactor {
    let needle = description.trim().to_ascii_lowercase();
    if needle.contains("secondary") || needle.contains("high school") {
        return AdditionalFactor::CanadianEducationSecondaryOrLess;
    }
    if needle.contains("three")
        || needle.contains('3')
        || needle.contains("advanced")
        || needle.contains("bachelor")
        || needle.contains("master")
        || needle.contains("doctor")
        || needle.contains("degree")
    {
        return AdditionalFactor::CanadianEducationThreeYearsOrAdvanced;
    }
    if needle.contains("one")
        || needle.contains("two")
        || needle.contains('1')
        || needle.contains('2')
    {
        return AdditionalFactor::CanadianEducationOneOrTwoYears;
    }
    AdditionalFactor::CanadianEducationSecondaryOrLess
}
