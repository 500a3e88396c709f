use std::sync::Arc;

use crate::domain::{
    ApplicantProfile, EducationLevel, LanguageTestResult, MaritalStatus, SpouseProfile,
};
use crate::scoring::CrsEngine;
use crate::tables::FactorTables;

pub(super) fn tables() -> Arc<FactorTables> {
    Arc::new(FactorTables::bundled().expect("bundled tables load"))
}

pub(super) fn engine() -> CrsEngine {
    CrsEngine::new(tables())
}

pub(super) fn ielts(
    listening: f32,
    reading: f32,
    writing: f32,
    speaking: f32,
) -> LanguageTestResult {
    LanguageTestResult {
        test: "ielts".to_string(),
        listening,
        reading,
        writing,
        speaking,
    }
}

pub(super) fn celpip(level: f32) -> LanguageTestResult {
    LanguageTestResult {
        test: "celpip".to_string(),
        listening: level,
        reading: level,
        writing: level,
        speaking: level,
    }
}

pub(super) fn tef(score: f32) -> LanguageTestResult {
    LanguageTestResult {
        test: "tef canada".to_string(),
        listening: score,
        reading: score,
        writing: score,
        speaking: score,
    }
}

/// Age 28, bachelor's, IELTS {L 8.0, R 8.0, W 7.0, S 7.5} (minimum CLB 9),
/// three years of Canadian work: core subtotal 424 without a spouse.
pub(super) fn single_profile() -> ApplicantProfile {
    ApplicantProfile {
        age: 28,
        marital_status: MaritalStatus::Single,
        spouse: None,
        education: EducationLevel::BachelorsDegree,
        first_language: ielts(8.0, 8.0, 7.0, 7.5),
        second_language: None,
        canadian_work_years: 3,
        foreign_work_years: 0,
        certificate_of_qualification: false,
        sibling_in_canada: false,
        provincial_nomination: false,
        canadian_education: None,
    }
}

pub(super) fn accompanying_spouse() -> SpouseProfile {
    SpouseProfile {
        accompanying: true,
        canadian_citizen: false,
        education: Some(EducationLevel::BachelorsDegree),
        language: Some(celpip(9.0)),
        canadian_work_years: 1,
    }
}

/// Age 33, master's, IELTS {L 8.5, R 7.0, W 7.0, S 7.0} (minimum CLB 9),
/// two years Canadian and three years foreign work, accompanying spouse
/// with a bachelor's, CELPIP 9s, and one year of Canadian work, plus a
/// sibling in Canada: 371 + 33 + 100 + 15 = 519.
pub(super) fn married_profile() -> ApplicantProfile {
    ApplicantProfile {
        age: 33,
        marital_status: MaritalStatus::Married,
        spouse: Some(accompanying_spouse()),
        education: EducationLevel::MastersOrProfessional,
        first_language: ielts(8.5, 7.0, 7.0, 7.0),
        second_language: None,
        canadian_work_years: 2,
        foreign_work_years: 3,
        certificate_of_qualification: false,
        sibling_in_canada: true,
        provincial_nomination: false,
        canadian_education: None,
    }
}
