use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    DetailAtom,
    LearnMethod,
    LearnMethodKind,
    learners::detail_atom::SerializedDetails,
};

/// A single Mon that learns a move by some method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Learner {
    /// Name of the Mon.
    pub name: String,
    /// Supplementary details, such as the levels the move is learned at.
    #[serde(default)]
    pub details: Vec<DetailAtom>,
}

impl Learner {
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            details: Vec::new(),
        }
    }

    pub fn with_details<S, I, D>(name: S, details: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = D>,
        D: Into<DetailAtom>,
    {
        Self {
            name: name.into(),
            details: details.into_iter().map(Into::into).collect(),
        }
    }
}

/// All Mons that learn a single move, broken down by learn method.
///
/// Sections and learners keep the order they were read in. Learner data is normalized once when
/// read, so consumers never inspect the shape of the source data.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "SerializedMoveLearners")]
pub struct MoveLearners {
    sections: IndexMap<LearnMethodKind, Vec<Learner>>,
}

impl MoveLearners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates learner data that does not record how each Mon learns the move.
    pub fn names_only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut learners = Self::new();
        for name in names {
            learners.push(LearnMethodKind::Unspecified, Learner::new(name));
        }
        learners
    }

    /// Adds a learner under the given method.
    pub fn push(&mut self, kind: LearnMethodKind, learner: Learner) {
        self.sections.entry(kind).or_default().push(learner);
    }

    /// Adds an empty section for the given method, if it does not already exist.
    ///
    /// Empty sections are kept so that data sources can record that a method was checked.
    pub fn add_section(&mut self, kind: LearnMethodKind) {
        self.sections.entry(kind).or_default();
    }

    /// Learners for the given method.
    pub fn get(&self, kind: LearnMethodKind) -> &[Learner] {
        self.sections.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterates over each method section, in source order.
    pub fn sections(&self) -> impl Iterator<Item = (LearnMethodKind, &[Learner])> {
        self.sections
            .iter()
            .map(|(kind, learners)| (*kind, learners.as_slice()))
    }

    /// Levels the given Mon learns the move at, if it learns the move on level up.
    pub fn level_up(&self, name: &str) -> Option<&[DetailAtom]> {
        self.get(LearnMethodKind::LevelUp)
            .iter()
            .find(|learner| learner.name == name)
            .map(|learner| learner.details.as_slice())
    }

    /// Checks if the given Mon learns the move by any method.
    pub fn learns(&self, name: &str) -> bool {
        self.sections
            .values()
            .flatten()
            .any(|learner| learner.name == name)
    }

    /// Flattens all sections into individual learn method occurrences.
    ///
    /// A Mon appears once for every occurrence, so a Mon that learns the move by two methods
    /// appears twice.
    pub fn flatten(&self) -> impl Iterator<Item = (&str, LearnMethod)> {
        self.sections.iter().flat_map(|(kind, learners)| {
            learners.iter().map(|learner| {
                (
                    learner.name.as_str(),
                    LearnMethod::new(*kind, learner.details.clone()),
                )
            })
        })
    }

    /// Total number of learn method occurrences.
    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A level-up entry written as an object, as emitted by the extraction pipeline.
#[derive(Debug, Clone, Deserialize)]
struct SerializedLevelUpEntry {
    #[serde(rename = "Pokemon", alias = "name")]
    name: String,
    #[serde(rename = "Levels", alias = "levels", alias = "details", default)]
    levels: SerializedDetails,
}

/// A single method section, in any of the shapes data sources use.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SerializedSection {
    /// A list of names.
    Names(Vec<String>),
    /// A map of names to details.
    Table(IndexMap<String, SerializedDetails>),
    /// A list of objects with names and levels.
    Entries(Vec<SerializedLevelUpEntry>),
}

impl From<SerializedSection> for Vec<Learner> {
    fn from(value: SerializedSection) -> Self {
        match value {
            SerializedSection::Names(names) => names.into_iter().map(Learner::new).collect(),
            SerializedSection::Table(table) => table
                .into_iter()
                .map(|(name, details)| Learner {
                    name,
                    details: details.into(),
                })
                .collect(),
            SerializedSection::Entries(entries) => entries
                .into_iter()
                .map(|entry| Learner {
                    name: entry.name,
                    details: entry.levels.into(),
                })
                .collect(),
        }
    }
}

/// Learner data for a single move, as read from a data source.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SerializedMoveLearners {
    /// Learners broken down by method.
    Breakdown(IndexMap<LearnMethodKind, SerializedSection>),
    /// Learners with no method information.
    NamesOnly(Vec<String>),
}

impl From<SerializedMoveLearners> for MoveLearners {
    fn from(value: SerializedMoveLearners) -> Self {
        match value {
            SerializedMoveLearners::Breakdown(sections) => Self {
                sections: sections
                    .into_iter()
                    .map(|(kind, section)| (kind, section.into()))
                    .collect(),
            },
            SerializedMoveLearners::NamesOnly(names) => Self::names_only(names),
        }
    }
}

impl Serialize for MoveLearners {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.sections.serialize(serializer)
    }
}
