//! Benchmark equivalency bands per designated test and ability.
//!
//! Bands are listed highest level first; lookup takes the first band the raw
//! score satisfies. English tests publish scalar minimum scores, the French
//! tests publish closed ranges as extracted from the upstream equivalency
//! tables.

use super::{Ability, LanguageTest, Threshold};

type Band = (Threshold, u8);

const IELTS_LISTENING: &[Band] = &[
    (Threshold::AtLeast(8.5), 10),
    (Threshold::AtLeast(8.0), 9),
    (Threshold::AtLeast(7.5), 8),
    (Threshold::AtLeast(6.0), 7),
    (Threshold::AtLeast(5.5), 6),
    (Threshold::AtLeast(5.0), 5),
    (Threshold::AtLeast(4.5), 4),
];

const IELTS_READING: &[Band] = &[
    (Threshold::AtLeast(8.0), 10),
    (Threshold::AtLeast(7.0), 9),
    (Threshold::AtLeast(6.5), 8),
    (Threshold::AtLeast(6.0), 7),
    (Threshold::AtLeast(5.0), 6),
    (Threshold::AtLeast(4.0), 5),
    (Threshold::AtLeast(3.5), 4),
];

const IELTS_WRITING: &[Band] = &[
    (Threshold::AtLeast(7.5), 10),
    (Threshold::AtLeast(7.0), 9),
    (Threshold::AtLeast(6.5), 8),
    (Threshold::AtLeast(6.0), 7),
    (Threshold::AtLeast(5.5), 6),
    (Threshold::AtLeast(5.0), 5),
    (Threshold::AtLeast(4.0), 4),
];

// IELTS publishes the same conversion for speaking and writing.
const IELTS_SPEAKING: &[Band] = IELTS_WRITING;

// CELPIP-G levels coincide with benchmark levels; 11 and 12 report above
// the CLB 10 ceiling.
const CELPIP_ALL: &[Band] = &[
    (Threshold::AtLeast(10.0), 10),
    (Threshold::AtLeast(9.0), 9),
    (Threshold::AtLeast(8.0), 8),
    (Threshold::AtLeast(7.0), 7),
    (Threshold::AtLeast(6.0), 6),
    (Threshold::AtLeast(5.0), 5),
    (Threshold::AtLeast(4.0), 4),
];

// TEF Canada harmonized 0-699 scale, identical across abilities.
const TEF_ALL: &[Band] = &[
    (Threshold::Between(566.0, 699.0), 10),
    (Threshold::Between(533.0, 565.0), 9),
    (Threshold::Between(503.0, 532.0), 8),
    (Threshold::Between(458.0, 502.0), 7),
    (Threshold::Between(426.0, 457.0), 6),
    (Threshold::Between(375.0, 425.0), 5),
    (Threshold::Between(306.0, 374.0), 4),
];

const TCF_LISTENING: &[Band] = &[
    (Threshold::Between(89.0, 90.0), 10),
    (Threshold::Between(82.0, 88.0), 9),
    (Threshold::Between(71.0, 81.0), 8),
    (Threshold::Between(60.0, 70.0), 7),
    (Threshold::Between(50.0, 59.0), 6),
    (Threshold::Between(39.0, 49.0), 5),
    (Threshold::Between(28.0, 38.0), 4),
];

const TCF_READING: &[Band] = &[
    (Threshold::Between(88.0, 90.0), 10),
    (Threshold::Between(78.0, 87.0), 9),
    (Threshold::Between(69.0, 77.0), 8),
    (Threshold::Between(60.0, 68.0), 7),
    (Threshold::Between(51.0, 59.0), 6),
    (Threshold::Between(42.0, 50.0), 5),
    (Threshold::Between(33.0, 41.0), 4),
];

// TCF expression sections report on the 0-20 scale.
const TCF_EXPRESSION: &[Band] = &[
    (Threshold::Between(16.0, 20.0), 10),
    (Threshold::Between(14.0, 15.0), 9),
    (Threshold::Between(12.0, 13.0), 8),
    (Threshold::Between(10.0, 11.0), 7),
    (Threshold::Between(7.0, 9.0), 6),
    (Threshold::Between(6.0, 6.0), 5),
    (Threshold::Between(4.0, 5.0), 4),
];

pub(super) fn bands_for(test: LanguageTest, ability: Ability) -> &'static [Band] {
    match (test, ability) {
        (LanguageTest::Ielts, Ability::Listening) => IELTS_LISTENING,
        (LanguageTest::Ielts, Ability::Reading) => IELTS_READING,
        (LanguageTest::Ielts, Ability::Writing) => IELTS_WRITING,
        (LanguageTest::Ielts, Ability::Speaking) => IELTS_SPEAKING,
        (LanguageTest::Celpip, _) => CELPIP_ALL,
        (LanguageTest::TefCanada, _) => TEF_ALL,
        (LanguageTest::TcfCanada, Ability::Listening) => TCF_LISTENING,
        (LanguageTest::TcfCanada, Ability::Reading) => TCF_READING,
        (LanguageTest::TcfCanada, Ability::Writing) => TCF_EXPRESSION,
        (LanguageTest::TcfCanada, Ability::Speaking) => TCF_EXPRESSION,
    }
}
