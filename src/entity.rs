//! Entities being grouped and their score model.
//!
//! An [`Entity`] has an identifier, a list of preferred peers, and a scalar
//! score. The score is either supplied directly or derived once from a set
//! of weighted [`Criterion`] values, so reading it inside the search loop is
//! free.
//!
//! # Score scales
//!
//! Every criterion is measured on one of three scales, each weighted so
//! that the three contribute on a common 0–100 range:
//!
//! | Label   | Scale                          | Weight |
//! |---------|--------------------------------|--------|
//! | `0-1`   | [`CriterionScale::UnitInterval`] | ×100 |
//! | `0-10`  | [`CriterionScale::Decile`]       | ×10  |
//! | `0-100` | [`CriterionScale::Percent`]      | ×1   |

use crate::error::GroupingError;
use std::fmt;
use std::str::FromStr;

/// Identifier of an entity. Unique within one run.
pub type EntityId = u64;

/// Measurement scale of a [`Criterion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CriterionScale {
    /// Values in `[0, 1]`.
    #[cfg_attr(feature = "serde", serde(rename = "0-1"))]
    UnitInterval,
    /// Values in `[0, 10]`.
    #[cfg_attr(feature = "serde", serde(rename = "0-10"))]
    Decile,
    /// Values in `[0, 100]`.
    #[cfg_attr(feature = "serde", serde(rename = "0-100"))]
    Percent,
}

impl CriterionScale {
    /// Multiplier bringing a raw value onto the 0–100 range.
    pub fn weight(self) -> f64 {
        match self {
            CriterionScale::UnitInterval => 100.0,
            CriterionScale::Decile => 10.0,
            CriterionScale::Percent => 1.0,
        }
    }

    /// The textual label (`"0-1"`, `"0-10"`, `"0-100"`).
    pub fn label(self) -> &'static str {
        match self {
            CriterionScale::UnitInterval => "0-1",
            CriterionScale::Decile => "0-10",
            CriterionScale::Percent => "0-100",
        }
    }
}

impl FromStr for CriterionScale {
    type Err = GroupingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0-1" => Ok(CriterionScale::UnitInterval),
            "0-10" => Ok(CriterionScale::Decile),
            "0-100" => Ok(CriterionScale::Percent),
            other => Err(GroupingError::UnknownCriterionScale(other.to_string())),
        }
    }
}

impl fmt::Display for CriterionScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One named measurement contributing to an entity's score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Criterion {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub scale: CriterionScale,
    pub value: f64,
}

impl Criterion {
    /// Creates a criterion.
    pub fn new(name: impl Into<String>, scale: CriterionScale, value: f64) -> Self {
        Self {
            name: name.into(),
            scale,
            value,
        }
    }

    /// Creates a criterion from a textual scale label.
    ///
    /// # Errors
    /// [`GroupingError::UnknownCriterionScale`] if the label is not one of
    /// `"0-1"`, `"0-10"`, `"0-100"`.
    pub fn parse(name: impl Into<String>, scale: &str, value: f64) -> Result<Self, GroupingError> {
        Ok(Self::new(name, scale.parse()?, value))
    }

    /// The value scaled onto the common 0–100 range.
    pub fn weighted(&self) -> f64 {
        self.value * self.scale.weight()
    }
}

/// A unit to be placed into exactly one group.
///
/// # Examples
///
/// ```
/// use u_grouping::{Criterion, CriterionScale, Entity};
///
/// let a = Entity::new(1, 72.5).with_preferences(vec![2, 3]);
/// assert_eq!(a.score(), 72.5);
///
/// let b = Entity::from_criteria(
///     2,
///     vec![
///         Criterion::new("gpa", CriterionScale::Percent, 80.0),
///         Criterion::new("lab", CriterionScale::UnitInterval, 0.5),
///     ],
/// );
/// assert_eq!(b.score(), 130.0);
/// ```
///
/// # Deserialization
///
/// With the `serde` feature, `score` may be omitted. When criteria are
/// present the score is always recomputed from them, so a stored score
/// can never disagree with the criteria it came from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "EntityRecord")
)]
pub struct Entity {
    id: EntityId,
    name: Option<String>,
    preferences: Vec<EntityId>,
    criteria: Vec<Criterion>,
    score: f64,
}

/// Wire shape of an [`Entity`] before its score is settled.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct EntityRecord {
    id: EntityId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    preferences: Vec<EntityId>,
    #[serde(default)]
    criteria: Vec<Criterion>,
    #[serde(default)]
    score: Option<f64>,
}

#[cfg(feature = "serde")]
impl From<EntityRecord> for Entity {
    fn from(record: EntityRecord) -> Self {
        let base = if record.criteria.is_empty() {
            Entity::new(record.id, record.score.unwrap_or(0.0))
        } else {
            Entity::from_criteria(record.id, record.criteria)
        };
        Entity {
            name: record.name,
            preferences: record.preferences,
            ..base
        }
    }
}

impl Entity {
    /// Creates an entity with a precomputed score and no preferences.
    pub fn new(id: EntityId, score: f64) -> Self {
        Self {
            id,
            name: None,
            preferences: Vec::new(),
            criteria: Vec::new(),
            score,
        }
    }

    /// Creates an entity whose score is the sum of its weighted criteria.
    pub fn from_criteria(id: EntityId, criteria: Vec<Criterion>) -> Self {
        let score = criteria.iter().map(Criterion::weighted).sum();
        Self {
            id,
            name: None,
            preferences: Vec::new(),
            criteria,
            score,
        }
    }

    /// Sets the preferred peers.
    pub fn with_preferences(mut self, preferences: Vec<EntityId>) -> Self {
        self.preferences = preferences;
        self
    }

    /// Sets a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Identifiers of the peers this entity would like to share a group with.
    pub fn preferences(&self) -> &[EntityId] {
        &self.preferences
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// The scalar score used by the fitness function.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Pairwise comparison score against another entity: the absolute
    /// difference of the two scores.
    pub fn affinity(&self, other: &Entity) -> f64 {
        (self.score - other.score).abs()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity(*{}*, {:?}, {})", self.id, self.preferences, self.score)
    }
}
