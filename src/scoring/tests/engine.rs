use super::common::*;
use crate::domain::{EducationLevel, MaritalStatus};
use crate::scoring::ScoreSection;

#[test]
fn married_profile_breaks_down_exactly() {
    let engine = engine();
    let breakdown = engine.score(&married_profile()).expect("scores");

    assert_eq!(breakdown.core_human_capital, 371);
    assert_eq!(breakdown.spouse_factors, 33);
    assert_eq!(breakdown.skill_transferability, 100);
    assert_eq!(breakdown.additional_factors, 15);
    assert_eq!(breakdown.total, 519);
}

#[test]
fn nominated_single_profile_stacks_the_bonus_on_the_base_score() {
    let engine = engine();
    let mut profile = single_profile();
    profile.provincial_nomination = true;

    let breakdown = engine.score(&profile).expect("scores");

    assert_eq!(breakdown.additional_factors, 600);
    assert_eq!(breakdown.core_human_capital, 424);
    assert_eq!(breakdown.skill_transferability, 50);
    assert_eq!(breakdown.total, 1074);
    assert!(breakdown.total >= 600 + breakdown.core_human_capital);
}

#[test]
fn total_is_the_plain_sum_of_the_subtotals() {
    let engine = engine();
    for profile in [single_profile(), married_profile()] {
        let breakdown = engine.score(&profile).expect("scores");
        assert_eq!(
            breakdown.total,
            breakdown.core_human_capital
                + breakdown.spouse_factors
                + breakdown.skill_transferability
                + breakdown.additional_factors
        );
    }
}

#[test]
fn spouse_factors_max_out_at_forty_alongside_a_maxed_core() {
    let engine = engine();
    let mut profile = married_profile();
    profile.age = 25;
    profile.education = EducationLevel::Doctorate;
    profile.first_language = celpip(10.0);
    profile.second_language = Some(tef(600.0));
    profile.canadian_work_years = 6;
    if let Some(spouse) = profile.spouse.as_mut() {
        spouse.education = Some(EducationLevel::Doctorate);
        spouse.language = Some(celpip(10.0));
        spouse.canadian_work_years = 5;
    }

    let breakdown = engine.score(&profile).expect("scores");
    // 100 + 140 + 128 + 22 + 70 on the with-spouse column.
    assert_eq!(breakdown.core_human_capital, 460);
    assert_eq!(breakdown.spouse_factors, 40);
}

#[test]
fn section_invariants_hold_across_the_input_grid() {
    let engine = engine();
    let language_sets = [
        ielts(4.5, 3.5, 4.0, 4.0),
        ielts(6.5, 6.5, 6.0, 6.0),
        ielts(8.5, 8.0, 7.5, 7.5),
    ];

    for age in [17u8, 21, 29, 35, 44, 60] {
        for education in [
            EducationLevel::LessThanSecondary,
            EducationLevel::TwoYearPostSecondary,
            EducationLevel::BachelorsDegree,
            EducationLevel::Doctorate,
        ] {
            for first_language in &language_sets {
                for canadian_work_years in [0u8, 1, 3, 6] {
                    for foreign_work_years in [0u8, 2, 4] {
                        for married in [false, true] {
                            let mut profile = single_profile();
                            profile.age = age;
                            profile.education = education;
                            profile.first_language = first_language.clone();
                            profile.canadian_work_years = canadian_work_years;
                            profile.foreign_work_years = foreign_work_years;
                            if married {
                                profile.marital_status = MaritalStatus::Married;
                                profile.spouse = Some(accompanying_spouse());
                            }

                            let breakdown = engine.score(&profile).expect("scores");

                            assert!(breakdown.core_human_capital <= 500);
                            assert!(breakdown.spouse_factors <= 40);
                            assert!(breakdown.skill_transferability <= 100);
                            if !married {
                                assert_eq!(breakdown.spouse_factors, 0);
                            }
                            assert_eq!(
                                breakdown.total,
                                breakdown.core_human_capital
                                    + breakdown.spouse_factors
                                    + breakdown.skill_transferability
                                    + breakdown.additional_factors
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn details_carry_their_sections_for_audit_grouping() {
    let engine = engine();
    let breakdown = engine.score(&married_profile()).expect("scores");

    assert!(breakdown
        .details
        .iter()
        .any(|detail| detail.factor.section() == ScoreSection::CoreHumanCapital));
    assert!(breakdown
        .details
        .iter()
        .any(|detail| detail.factor.section() == ScoreSection::SpouseFactors));
    assert!(breakdown
        .details
        .iter()
        .any(|detail| detail.factor.section() == ScoreSection::SkillTransferability));
    assert!(breakdown
        .details
        .iter()
        .any(|detail| detail.factor.section() == ScoreSection::AdditionalFactors));
}

#[test]
fn breakdown_serializes_for_service_responses() {
    let engine = engine();
    let breakdown = engine.score(&single_profile()).expect("scores");

    let payload = serde_json::to_value(&breakdown).expect("serializes");
    assert_eq!(payload["core_human_capital"], 424);
    assert_eq!(payload["total"], breakdown.total);
    assert!(payload["details"].as_array().expect("details array").len() >= 7);
}
