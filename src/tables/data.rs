//! Bundled regulatory export.
//!
//! Snapshot of the extraction pipeline's CSV export of the Ministerial
//! Instructions point tables, embedded so the engine can run without a live
//! extraction run. It passes through the same parse-and-validate path as any
//! external export.

pub(super) const BUNDLED_EFFECTIVE: &str = "2025-03-25";

pub(super) const BUNDLED_EXPORT: &str = "\
category,bracket,with_spouse,without_spouse
age,17_or_under,0,0
age,18,90,99
age,19,95,105
age,20_to_29,100,110
age,30,95,105
age,31,90,99
age,32,85,94
age,33,80,88
age,34,75,83
age,35,70,77
age,36,65,72
age,37,60,66
age,38,55,61
age,39,50,55
age,40,45,50
age,41,35,39
age,42,25,28
age,43,15,17
age,44,5,6
age,45_or_over,0,0
education,less_than_secondary,0,0
education,secondary,28,30
education,one_year_post_secondary,84,90
education,two_year_post_secondary,91,98
education,bachelors_degree,112,120
education,two_or_more_credentials,119,128
education,masters_or_professional,126,135
education,doctorate,140,150
first_language,clb_below_4,0,0
first_language,clb_4_5,6,6
first_language,clb_6,8,9
first_language,clb_7,16,17
first_language,clb_8,22,23
first_language,clb_9,29,31
first_language,clb_10_plus,32,34
second_language,clb_4_or_below,0,0
second_language,clb_5_6,1,1
second_language,clb_7_8,3,3
second_language,clb_9_plus,6,6
canadian_work,none,0,0
canadian_work,1_year,35,40
canadian_work,2_years,46,53
canadian_work,3_years,56,64
canadian_work,4_years,63,72
canadian_work,5_years_plus,70,80
spouse_education,less_than_secondary,0,0
spouse_education,secondary,2,2
spouse_education,one_year_post_secondary,6,6
spouse_education,two_year_post_secondary,7,7
spouse_education,bachelors_degree,8,8
spouse_education,two_or_more_credentials,9,9
spouse_education,masters_or_professional,10,10
spouse_education,doctorate,10,10
spouse_language,clb_4_or_below,0,0
spouse_language,clb_5_6,1,1
spouse_language,clb_7_8,3,3
spouse_language,clb_9_plus,5,5
spouse_work,none,0,0
spouse_work,1_year,5,5
spouse_work,2_years,7,7
spouse_work,3_years,8,8
spouse_work,4_years,9,9
spouse_work,5_years_plus,10,10
additional,sibling_in_canada,15,15
additional,french_clb7_weak_english,25,25
additional,french_clb7_strong_english,50,50
additional,canadian_education_secondary_or_less,0,0
additional,canadian_education_one_or_two_years,15,15
additional,canadian_education_three_years_or_advanced,30,30
additional,provincial_nomination,600,600
";
