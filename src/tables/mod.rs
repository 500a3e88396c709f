//! Immutable factor point tables, one per scoring category.
//!
//! Tables are built once at startup from pre-extracted rule data and are
//! read-only afterwards, so concurrent scoring calls can share them without
//! locking. Every bracket a category's enum defines must be present in both
//! spouse-variant columns; gaps are a configuration error reported at load
//! time, never a silent zero at lookup time.

mod brackets;
mod data;
mod ingest;

pub use brackets::{AdditionalFactor, AgeBracket, ClbTier, CoarseClbTier, WorkYearsBracket};
pub use ingest::{RuleEntry, RuleSet};

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::EducationLevel;

pub(crate) const CATEGORY_AGE: &str = "age";
pub(crate) const CATEGORY_EDUCATION: &str = "education";
pub(crate) const CATEGORY_FIRST_LANGUAGE: &str = "first_language";
pub(crate) const CATEGORY_SECOND_LANGUAGE: &str = "second_language";
pub(crate) const CATEGORY_CANADIAN_WORK: &str = "canadian_work";
pub(crate) const CATEGORY_SPOUSE_EDUCATION: &str = "spouse_education";
pub(crate) const CATEGORY_SPOUSE_LANGUAGE: &str = "spouse_language";
pub(crate) const CATEGORY_SPOUSE_WORK: &str = "spouse_work";
pub(crate) const CATEGORY_ADDITIONAL: &str = "additional";

const KNOWN_CATEGORIES: &[&str] = &[
    CATEGORY_AGE,
    CATEGORY_EDUCATION,
    CATEGORY_FIRST_LANGUAGE,
    CATEGORY_SECOND_LANGUAGE,
    CATEGORY_CANADIAN_WORK,
    CATEGORY_SPOUSE_EDUCATION,
    CATEGORY_SPOUSE_LANGUAGE,
    CATEGORY_SPOUSE_WORK,
    CATEGORY_ADDITIONAL,
];

/// Selector for the two point columns every factor table carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpouseVariant {
    WithSpouse,
    WithoutSpouse,
}

impl SpouseVariant {
    pub const BOTH: [SpouseVariant; 2] = [SpouseVariant::WithSpouse, SpouseVariant::WithoutSpouse];

    pub const fn label(self) -> &'static str {
        match self {
            SpouseVariant::WithSpouse => "with_spouse",
            SpouseVariant::WithoutSpouse => "without_spouse",
        }
    }
}

/// Discrete lookup key for one scoring category.
pub trait Bracket: Copy + Ord + core::fmt::Debug + Sized + 'static {
    /// Every bracket the category requires; load-time validation walks this.
    fn all() -> &'static [Self];

    /// Canonical key label used by rule-set exports and error messages.
    fn key(self) -> &'static str;

    fn parse_key(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|b| b.key() == value)
    }
}

/// Errors raised while loading or consulting the factor tables.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("rule set is missing required brackets: {}", .0.join(", "))]
    MissingBrackets(Vec<String>),
    #[error("no points recorded for {category}/{bracket} ({variant})")]
    MissingBracket {
        category: &'static str,
        bracket: &'static str,
        variant: &'static str,
    },
    #[error("unknown bracket key '{key}' in category '{category}'")]
    UnknownBracket { category: String, key: String },
    #[error("unknown rule category '{0}'")]
    UnknownCategory(String),
    #[error("invalid effective date '{0}' in rule export")]
    InvalidEffectiveDate(String),
    #[error("malformed rule export: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed rule set: {0}")]
    Json(#[from] serde_json::Error),
}

/// One category's points keyed by bracket and spouse variant.
#[derive(Debug, Clone)]
pub struct FactorTable<K: Bracket> {
    category: &'static str,
    with_spouse: BTreeMap<K, u32>,
    without_spouse: BTreeMap<K, u32>,
}

impl<K: Bracket> FactorTable<K> {
    /// Points for a bracket under the selected variant. Zero-point brackets
    /// are explicit table rows; an absent bracket is an error, never a
    /// default.
    pub fn points(&self, bracket: K, variant: SpouseVariant) -> Result<u32, TableError> {
        let column = match variant {
            SpouseVariant::WithSpouse => &self.with_spouse,
            SpouseVariant::WithoutSpouse => &self.without_spouse,
        };
        column
            .get(&bracket)
            .copied()
            .ok_or(TableError::MissingBracket {
                category: self.category,
                bracket: bracket.key(),
                variant: variant.label(),
            })
    }
}

/// Repository of every factor table, shared read-only by the scorers.
#[derive(Debug, Clone)]
pub struct FactorTables {
    effective_date: NaiveDate,
    age: FactorTable<AgeBracket>,
    education: FactorTable<EducationLevel>,
    first_language: FactorTable<ClbTier>,
    second_language: FactorTable<CoarseClbTier>,
    canadian_work: FactorTable<WorkYearsBracket>,
    spouse_education: FactorTable<EducationLevel>,
    spouse_language: FactorTable<CoarseClbTier>,
    spouse_work: FactorTable<WorkYearsBracket>,
    additional: FactorTable<AdditionalFactor>,
}

impl FactorTables {
    /// Build and validate every table from a rule set. Fails if the set
    /// names an unknown category or bracket, or omits any required bracket;
    /// all gaps are reported in one pass so a misconfigured export is
    /// diagnosable without repeated loads.
    pub fn from_rule_set(rules: RuleSet) -> Result<Self, TableError> {
        let mut grouped: BTreeMap<String, Vec<RuleEntry>> = BTreeMap::new();
        for entry in rules.rows {
            grouped.entry(entry.category.clone()).or_default().push(entry);
        }
        if let Some(unknown) = grouped
            .keys()
            .find(|category| !KNOWN_CATEGORIES.contains(&category.as_str()))
        {
            return Err(TableError::UnknownCategory(unknown.clone()));
        }

        let mut missing = Vec::new();
        let age = category_table(CATEGORY_AGE, &grouped, &mut missing)?;
        let education = category_table(CATEGORY_EDUCATION, &grouped, &mut missing)?;
        let first_language = category_table(CATEGORY_FIRST_LANGUAGE, &grouped, &mut missing)?;
        let second_language = category_table(CATEGORY_SECOND_LANGUAGE, &grouped, &mut missing)?;
        let canadian_work = category_table(CATEGORY_CANADIAN_WORK, &grouped, &mut missing)?;
        let spouse_education = category_table(CATEGORY_SPOUSE_EDUCATION, &grouped, &mut missing)?;
        let spouse_language = category_table(CATEGORY_SPOUSE_LANGUAGE, &grouped, &mut missing)?;
        let spouse_work = category_table(CATEGORY_SPOUSE_WORK, &grouped, &mut missing)?;
        let additional = category_table(CATEGORY_ADDITIONAL, &grouped, &mut missing)?;
        if !missing.is_empty() {
            return Err(TableError::MissingBrackets(missing));
        }

        info!(effective_date = %rules.effective_date, "factor tables loaded");

        Ok(Self {
            effective_date: rules.effective_date,
            age,
            education,
            first_language,
            second_language,
            canadian_work,
            spouse_education,
            spouse_language,
            spouse_work,
            additional,
        })
    }

    /// Tables built from the bundled regulatory export.
    pub fn bundled() -> Result<Self, TableError> {
        Self::from_rule_set(RuleSet::bundled()?)
    }

    /// Effective date of the loaded rule set.
    pub fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }

    /// String-keyed lookup for audit tooling; scorers use the typed
    /// accessors below.
    pub fn lookup(
        &self,
        category: &str,
        bracket_key: &str,
        variant: SpouseVariant,
    ) -> Result<u32, TableError> {
        match category {
            CATEGORY_AGE => typed_lookup(&self.age, bracket_key, variant),
            CATEGORY_EDUCATION => typed_lookup(&self.education, bracket_key, variant),
            CATEGORY_FIRST_LANGUAGE => typed_lookup(&self.first_language, bracket_key, variant),
            CATEGORY_SECOND_LANGUAGE => typed_lookup(&self.second_language, bracket_key, variant),
            CATEGORY_CANADIAN_WORK => typed_lookup(&self.canadian_work, bracket_key, variant),
            CATEGORY_SPOUSE_EDUCATION => typed_lookup(&self.spouse_education, bracket_key, variant),
            CATEGORY_SPOUSE_LANGUAGE => typed_lookup(&self.spouse_language, bracket_key, variant),
            CATEGORY_SPOUSE_WORK => typed_lookup(&self.spouse_work, bracket_key, variant),
            CATEGORY_ADDITIONAL => typed_lookup(&self.additional, bracket_key, variant),
            other => Err(TableError::UnknownCategory(other.to_string())),
        }
    }

    pub fn age(&self) -> &FactorTable<AgeBracket> {
        &self.age
    }

    pub fn education(&self) -> &FactorTable<EducationLevel> {
        &self.education
    }

    pub fn first_language(&self) -> &FactorTable<ClbTier> {
        &self.first_language
    }

    pub fn second_language(&self) -> &FactorTable<CoarseClbTier> {
        &self.second_language
    }

    pub fn canadian_work(&self) -> &FactorTable<WorkYearsBracket> {
        &self.canadian_work
    }

    pub fn spouse_education(&self) -> &FactorTable<EducationLevel> {
        &self.spouse_education
    }

    pub fn spouse_language(&self) -> &FactorTable<CoarseClbTier> {
        &self.spouse_language
    }

    pub fn spouse_work(&self) -> &FactorTable<WorkYearsBracket> {
        &self.spouse_work
    }

    pub fn additional(&self) -> &FactorTable<AdditionalFactor> {
        &self.additional
    }
}

fn typed_lookup<K: Bracket>(
    table: &FactorTable<K>,
    bracket_key: &str,
    variant: SpouseVariant,
) -> Result<u32, TableError> {
    let bracket = K::parse_key(bracket_key).ok_or_else(|| TableError::UnknownBracket {
        category: table.category.to_string(),
        key: bracket_key.to_string(),
    })?;
    table.points(bracket, variant)
}

fn category_table<K: Bracket>(
    category: &'static str,
    grouped: &BTreeMap<String, Vec<RuleEntry>>,
    missing: &mut Vec<String>,
) -> Result<FactorTable<K>, TableError> {
    let mut with_spouse = BTreeMap::new();
    let mut without_spouse = BTreeMap::new();
    let rows = grouped.get(category).map(Vec::as_slice).unwrap_or(&[]);
    for row in rows {
        let bracket = K::parse_key(&row.bracket).ok_or_else(|| TableError::UnknownBracket {
            category: category.to_string(),
            key: row.bracket.clone(),
        })?;
        with_spouse.insert(bracket, row.with_spouse);
        without_spouse.insert(bracket, row.without_spouse);
    }
    for bracket in K::all() {
        if !with_spouse.contains_key(bracket) {
            missing.push(format!(
                "{category}/{} ({})",
                bracket.key(),
                SpouseVariant::WithSpouse.label()
            ));
        }
        if !without_spouse.contains_key(bracket) {
            missing.push(format!(
                "{category}/{} ({})",
                bracket.key(),
                SpouseVariant::WithoutSpouse.label()
            ));
        }
    }
    Ok(FactorTable {
        category,
        with_spouse,
        without_spouse,
    })
}
