//! Profession definitions - static catalog data.
//!
//! A `Profession` holds the immutable educational content shown when its
//! pair is found: name, a short summary, job-market notes and a salary
//! range. Runtime card state (face-up, matched) lives in `Card`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a profession.
///
/// Doubles as the group key of a round: exactly two cards carry each id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfessionId(pub u32);

impl ProfessionId {
    /// Create a new profession ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ProfessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Profession({})", self.0)
    }
}

/// Typical salary range, entry level to senior.
///
/// Kept as display text since catalogs carry currency and formatting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub initial: String,
    pub senior: String,
}

impl SalaryRange {
    /// Create a new salary range.
    pub fn new(initial: impl Into<String>, senior: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            senior: senior.into(),
        }
    }
}

impl std::fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.initial, self.senior)
    }
}

/// Static profession entry.
///
/// ## Example
///
/// ```
/// use profession_memory::cards::{Profession, ProfessionId};
///
/// let nurse = Profession::new(ProfessionId::new(1), "Enfermagem")
///     .with_summary("Cuida de pacientes em hospitais e clínicas.")
///     .with_salary("R$ 3.500", "R$ 8.000");
///
/// assert_eq!(nurse.salary.to_string(), "R$ 3.500 - R$ 8.000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profession {
    /// Unique identifier, also the card group key.
    pub id: ProfessionId,

    /// Display name, printed on both cards of the pair.
    pub name: String,

    /// What the profession does.
    #[serde(default)]
    pub summary: String,

    /// Job-market outlook.
    #[serde(default)]
    pub market: String,

    #[serde(default)]
    pub salary: SalaryRange,
}

impl Profession {
    /// Create a profession with only a name.
    #[must_use]
    pub fn new(id: ProfessionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            summary: String::new(),
            market: String::new(),
            salary: SalaryRange::default(),
        }
    }

    /// Set the summary (builder pattern).
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the market text (builder pattern).
    #[must_use]
    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = market.into();
        self
    }

    /// Set the salary range (builder pattern).
    #[must_use]
    pub fn with_salary(mut self, initial: impl Into<String>, senior: impl Into<String>) -> Self {
        self.salary = SalaryRange::new(initial, senior);
        self
    }
}
