use std::fmt::{
    self,
    Display,
};

use learnset_data::LearnMethod;
use serde::Serialize;

use crate::LookupError;

/// A single way a Mon learns one of the queried moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearnerRecord {
    /// The canonical name of the move.
    #[serde(rename = "move")]
    pub move_name: String,
    /// How the move is learned.
    #[serde(flatten)]
    pub method: LearnMethod,
}

impl LearnerRecord {
    pub fn new<S>(move_name: S, method: LearnMethod) -> Self
    where
        S: Into<String>,
    {
        Self {
            move_name: move_name.into(),
            method,
        }
    }
}

/// A Mon that matches a query, with every way it learns the queried moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub name: String,
    pub methods: Vec<LearnerRecord>,
}

impl Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for (i, record) in self.methods.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", record.method)?;
        }
        Ok(())
    }
}

/// The outcome of a query.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FindOutcome {
    /// Mons that match the query, in order of first appearance in move data.
    pub results: Vec<QueryResult>,
    /// Moves that could not be used in the query.
    pub diagnostics: Vec<LookupError>,
}

impl FindOutcome {
    /// Names of all matching Mons.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|result| result.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod query_result_test {
    use learnset_data::{
        DetailAtom,
        LearnMethod,
    };
    use pretty_assertions::assert_eq;

    use crate::{
        LearnerRecord,
        QueryResult,
    };

    fn rattata() -> QueryResult {
        QueryResult {
            name: "Rattata".to_owned(),
            methods: vec![
                LearnerRecord::new("Tackle", LearnMethod::LevelUp(vec![DetailAtom::Integer(1)])),
                LearnerRecord::new("Thunderbolt", LearnMethod::TeachableItem),
            ],
        }
    }

    #[test]
    fn formats_as_result_row() {
        assert_eq!(rattata().to_string(), "Rattata: Level Up: 1 | TM/HM:");
    }

    #[test]
    fn serializes_records_with_type_and_details() {
        assert_eq!(
            serde_json::to_value(rattata()).unwrap(),
            serde_json::json!({
                "name": "Rattata",
                "methods": [
                    { "move": "Tackle", "type": "Via Level Up", "details": [1] },
                    { "move": "Thunderbolt", "type": "Via TM", "details": [] },
                ],
            })
        );
    }
}
