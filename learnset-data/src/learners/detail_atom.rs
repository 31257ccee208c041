use std::fmt::{
    self,
    Display,
};

use serde::{
    Deserialize,
    Serialize,
};

/// A single piece of supplementary data attached to a learn method.
///
/// Level-up data is the common case, where each atom is a level number. Older data pipelines emit
/// levels as strings (for example, `"12"` or `"Lv. 12"`), so both forms are kept as-is rather than
/// being coerced into numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailAtom {
    Integer(i64),
    Text(String),
}

impl DetailAtom {
    /// The atom as an integer, if it is one or is a string holding one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl Display for DetailAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<i64> for DetailAtom {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u8> for DetailAtom {
    fn from(value: u8) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for DetailAtom {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DetailAtom {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One or more detail atoms.
///
/// Data sources sometimes write a single atom where a list is expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum SerializedDetails {
    Many(Vec<DetailAtom>),
    One(DetailAtom),
}

impl Default for SerializedDetails {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl From<SerializedDetails> for Vec<DetailAtom> {
    fn from(value: SerializedDetails) -> Self {
        match value {
            SerializedDetails::Many(atoms) => atoms,
            SerializedDetails::One(atom) => vec![atom],
        }
    }
}
