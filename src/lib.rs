//! Comprehensive Ranking System scoring engine.
//!
//! Converts an applicant profile (age, education, language test results,
//! work history, spouse data, certificates, nominations) into the official
//! Express Entry point score. The crate is a pure, synchronous computation
//! library: callers construct an [`ApplicantProfile`], build the factor
//! tables once at startup, and receive a [`ScoreBreakdown`] with per-section
//! subtotals and a per-factor audit trace. Wrapping the engine in a service
//! layer, persisting results, and collecting form input are the caller's
//! concern.

pub mod benchmark;
pub mod domain;
pub mod scoring;
pub mod tables;

pub use benchmark::{normalize, Ability, LanguageTest, NormalizeError};
pub use domain::{
    age_on, ApplicantProfile, EducationLevel, LanguageTestResult, MaritalStatus, SpouseProfile,
};
pub use scoring::{
    CrsEngine, ScoreBreakdown, ScoreDetail, ScoreError, ScoreFactor, ScoreSection,
};
pub use tables::{FactorTables, RuleEntry, RuleSet, SpouseVariant, TableError};
