//! Integration scenarios for the scoring engine's public surface.
//!
//! Scenarios exercise the engine end to end through the crate API (bundled
//! table loading, benchmark normalization, and full-profile scoring) so
//! regressions in any section surface as a changed total or a missing typed
//! failure.

mod common {
    use crs_engine::{
        ApplicantProfile, CrsEngine, EducationLevel, LanguageTestResult, MaritalStatus,
        SpouseProfile,
    };

    pub(super) fn engine() -> CrsEngine {
        CrsEngine::with_bundled_tables().expect("bundled tables load")
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

    pub(super) fn nominated_profile() -> ApplicantProfile {
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
            provincial_nomination: true,
            canadian_education: None,
        }
    }

    pub(super) fn married_profile() -> ApplicantProfile {
        ApplicantProfile {
            age: 33,
            marital_status: MaritalStatus::Married,
            spouse: Some(SpouseProfile {
                accompanying: true,
                canadian_citizen: false,
                education: Some(EducationLevel::BachelorsDegree),
                language: Some(LanguageTestResult {
                    test: "celpip".to_string(),
                    listening: 9.0,
                    reading: 9.0,
                    writing: 9.0,
                    speaking: 9.0,
                }),
                canadian_work_years: 1,
            }),
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
}

use common::*;
use crs_engine::{normalize, MaritalStatus, ScoreError, ScoreFactor};

#[test]
fn nomination_stacks_a_flat_six_hundred_on_the_base_score() {
    let breakdown = engine().score(&nominated_profile()).expect("scores");

    assert_eq!(breakdown.additional_factors, 600);
    assert!(breakdown.core_human_capital > 0);
    assert!(breakdown.total >= 600 + breakdown.core_human_capital);
    assert_eq!(breakdown.total, 1074);
}

#[test]
fn married_profile_scores_every_section() {
    let breakdown = engine().score(&married_profile()).expect("scores");

    assert_eq!(breakdown.core_human_capital, 371);
    assert_eq!(breakdown.spouse_factors, 33);
    assert_eq!(breakdown.skill_transferability, 100);
    assert_eq!(breakdown.additional_factors, 15);
    assert_eq!(
        breakdown.total,
        breakdown.core_human_capital
            + breakdown.spouse_factors
            + breakdown.skill_transferability
            + breakdown.additional_factors
    );
}

#[test]
fn single_status_zeroes_spouse_factors_even_with_spouse_fields_present() {
    let mut profile = married_profile();
    profile.marital_status = MaritalStatus::Single;

    let breakdown = engine().score(&profile).expect("scores");
    assert_eq!(breakdown.spouse_factors, 0);
}

#[test]
fn tcf_reading_maps_through_the_banded_thresholds() {
    assert_eq!(normalize("tcf", "reading", 75.0).expect("normalizes"), 8);
}

#[test]
fn certificate_with_clb_four_is_a_typed_failure() {
    let mut profile = nominated_profile();
    profile.certificate_of_qualification = true;
    profile.first_language = ielts(4.5, 3.5, 4.0, 4.0);

    match engine().score(&profile) {
        Err(ScoreError::CertificateClbTooLow(clb)) => assert_eq!(clb, 4),
        other => panic!("expected certificate rejection, got {other:?}"),
    }
}

#[test]
fn the_trace_names_the_bracket_every_factor_matched() {
    let breakdown = engine().score(&nominated_profile()).expect("scores");

    let age = breakdown
        .details
        .iter()
        .find(|detail| detail.factor == ScoreFactor::Age)
        .expect("age detail");
    assert_eq!(age.bracket, "20_to_29");
    assert_eq!(age.points, 110);

    let nomination = breakdown
        .details
        .iter()
        .find(|detail| detail.factor == ScoreFactor::ProvincialNomination)
        .expect("nomination detail");
    assert_eq!(nomination.bracket, "provincial_nomination");
}
