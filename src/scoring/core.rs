//! Core human capital factors: age, education, official languages, and
//! Canadian work experience.

use tracing::debug;

use super::{LanguageSummary, ScoreDetail, ScoreError, ScoreFactor};
use crate::benchmark::{self, Ability, LanguageTest, NormalizeError};
use crate::domain::{ApplicantProfile, LanguageTestResult};
use crate::tables::{
    AgeBracket, Bracket, ClbTier, CoarseClbTier, FactorTables, SpouseVariant, WorkYearsBracket,
};

// The four-ability sum for the second official language is capped; the
// per-ability table alone would allow 24 under both variants.
const SECOND_LANGUAGE_CAP_WITH_SPOUSE: u32 = 22;
const SECOND_LANGUAGE_CAP_WITHOUT_SPOUSE: u32 = 24;

pub(crate) struct CoreOutcome {
    pub(crate) points: u32,
    pub(crate) languages: LanguageSummary,
}

/// Benchmark levels for one test sitting, ability by ability. The minimum
/// gates downstream combination bonuses, so it is computed here once.
pub(crate) struct LanguageAssessment {
    pub(crate) test: LanguageTest,
    pub(crate) listening: u8,
    pub(crate) reading: u8,
    pub(crate) writing: u8,
    pub(crate) speaking: u8,
    pub(crate) min_level: u8,
}

impl LanguageAssessment {
    pub(crate) fn levels(&self) -> [(Ability, u8); 4] {
        [
            (Ability::Listening, self.listening),
            (Ability::Reading, self.reading),
            (Ability::Writing, self.writing),
            (Ability::Speaking, self.speaking),
        ]
    }
}

pub(crate) fn assess_language(
    result: &LanguageTestResult,
) -> Result<LanguageAssessment, NormalizeError> {
    let test = LanguageTest::parse(&result.test)?;
    let listening = benchmark::benchmark_level(test, Ability::Listening, result.listening);
    let reading = benchmark::benchmark_level(test, Ability::Reading, result.reading);
    let writing = benchmark::benchmark_level(test, Ability::Writing, result.writing);
    let speaking = benchmark::benchmark_level(test, Ability::Speaking, result.speaking);
    let min_level = listening.min(reading).min(writing).min(speaking);
    Ok(LanguageAssessment {
        test,
        listening,
        reading,
        writing,
        speaking,
        min_level,
    })
}

pub(crate) fn score(
    profile: &ApplicantProfile,
    variant: SpouseVariant,
    tables: &FactorTables,
    details: &mut Vec<ScoreDetail>,
) -> Result<CoreOutcome, ScoreError> {
    if !(17..=100).contains(&profile.age) {
        return Err(ScoreError::InvalidAge(profile.age));
    }

    let mut points = 0u32;

    let age_bracket = AgeBracket::from_age(profile.age);
    let age_points = tables.age().points(age_bracket, variant)?;
    details.push(ScoreDetail {
        factor: ScoreFactor::Age,
        bracket: age_bracket.key().to_string(),
        points: age_points,
    });
    points += age_points;

    let education_points = tables.education().points(profile.education, variant)?;
    details.push(ScoreDetail {
        factor: ScoreFactor::Education,
        bracket: profile.education.label().to_string(),
        points: education_points,
    });
    points += education_points;

    let first = assess_language(&profile.first_language)?;
    let mut first_points = 0u32;
    for (ability, level) in first.levels() {
        let tier = ClbTier::from_level(level);
        let ability_points = tables.first_language().points(tier, variant)?;
        details.push(ScoreDetail {
            factor: ScoreFactor::FirstLanguage,
            bracket: format!("{} {}", ability.label(), tier.key()),
            points: ability_points,
        });
        first_points += ability_points;
    }
    points += first_points;

    let second = profile
        .second_language
        .as_ref()
        .map(assess_language)
        .transpose()?;
    if let Some(second) = &second {
        let mut second_points = 0u32;
        for (ability, level) in second.levels() {
            let tier = CoarseClbTier::from_level(level);
            let ability_points = tables.second_language().points(tier, variant)?;
            details.push(ScoreDetail {
                factor: ScoreFactor::SecondLanguage,
                bracket: format!("{} {}", ability.label(), tier.key()),
                points: ability_points,
            });
            second_points += ability_points;
        }
        let cap = match variant {
            SpouseVariant::WithSpouse => SECOND_LANGUAGE_CAP_WITH_SPOUSE,
            SpouseVariant::WithoutSpouse => SECOND_LANGUAGE_CAP_WITHOUT_SPOUSE,
        };
        if second_points > cap {
            debug!(second_points, cap, "second language sum capped");
            second_points = cap;
        }
        points += second_points;
    }

    let work_bracket = WorkYearsBracket::from_years(profile.canadian_work_years);
    let work_points = tables.canadian_work().points(work_bracket, variant)?;
    details.push(ScoreDetail {
        factor: ScoreFactor::CanadianWork,
        bracket: work_bracket.key().to_string(),
        points: work_points,
    });
    points += work_points;

    Ok(CoreOutcome {
        points,
        languages: LanguageSummary {
            first_min_clb: first.min_level,
            first_is_french: first.test.is_french(),
            second_min_clb: second.as_ref().map(|s| s.min_level),
            second_is_french: second.as_ref().map(|s| s.test.is_french()).unwrap_or(false),
        },
    })
}
