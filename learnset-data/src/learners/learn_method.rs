use std::fmt::{
    self,
    Display,
};

use serde::{
    Serialize,
    Serializer,
    ser::SerializeStruct,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::DetailAtom;

/// The label of a learn method, used to key sections of learner data.
///
/// Labels match the section headers written by the learnset extraction pipeline.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum LearnMethodKind {
    /// Learned on level up.
    #[string = "Via Level Up"]
    #[alias = "Level Up"]
    LevelUp,
    /// Taught by a Technical or Hidden Machine.
    #[string = "Via TM"]
    #[alias = "Via HM"]
    TeachableItem,
    /// Learned only through breeding.
    #[string = "Via Breeding"]
    #[alias = "Breeding"]
    Breeding,
    /// Learned through an event or some other special way.
    #[string = "Via Special Event"]
    #[alias = "Special Event"]
    SpecialEvent,
    /// Learned by some method that the data source does not record.
    #[string = "Unspecified"]
    Unspecified,
}

impl LearnMethodKind {
    /// Human-readable label for the method.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LevelUp => "Level Up",
            Self::TeachableItem => "TM/HM",
            Self::Breeding => "Breeding",
            Self::SpecialEvent => "Special Event",
            Self::Unspecified => "Unspecified",
        }
    }
}

/// A single way a Mon learns a move.
///
/// Only level-up learning carries details (the levels the move is learned at, possibly one per
/// game version).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LearnMethod {
    LevelUp(Vec<DetailAtom>),
    TeachableItem,
    Breeding,
    SpecialEvent,
    Unspecified,
}

impl LearnMethod {
    /// Creates a learn method of the given kind.
    ///
    /// Details are dropped for methods that do not carry them.
    pub fn new(kind: LearnMethodKind, details: Vec<DetailAtom>) -> Self {
        match kind {
            LearnMethodKind::LevelUp => Self::LevelUp(details),
            LearnMethodKind::TeachableItem => Self::TeachableItem,
            LearnMethodKind::Breeding => Self::Breeding,
            LearnMethodKind::SpecialEvent => Self::SpecialEvent,
            LearnMethodKind::Unspecified => Self::Unspecified,
        }
    }

    pub fn kind(&self) -> LearnMethodKind {
        match self {
            Self::LevelUp(_) => LearnMethodKind::LevelUp,
            Self::TeachableItem => LearnMethodKind::TeachableItem,
            Self::Breeding => LearnMethodKind::Breeding,
            Self::SpecialEvent => LearnMethodKind::SpecialEvent,
            Self::Unspecified => LearnMethodKind::Unspecified,
        }
    }

    /// Supplementary details for the method, which may be empty.
    pub fn details(&self) -> &[DetailAtom] {
        match self {
            Self::LevelUp(details) => details,
            _ => &[],
        }
    }
}

impl Display for LearnMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.kind().label())?;
        for (i, detail) in self.details().iter().enumerate() {
            if i == 0 {
                write!(f, " {detail}")?;
            } else {
                write!(f, ", {detail}")?;
            }
        }
        Ok(())
    }
}

impl Serialize for LearnMethod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("LearnMethod", 2)?;
        state.serialize_field("type", &self.kind())?;
        state.serialize_field("details", self.details())?;
        state.end()
    }
}
