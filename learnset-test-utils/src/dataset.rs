use learnset_data::{
    DetailAtom,
    LearnMethodKind,
    Learner,
    MoveLearners,
    MoveTable,
    StaticDataSource,
};

/// Builder for small, hand-written datasets.
///
/// Moves are added to the move list in the order they are first mentioned.
#[derive(Debug, Default, Clone)]
pub struct TestDatasetBuilder {
    move_list: Vec<String>,
    moves: MoveTable,
}

impl TestDatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn learners_mut(&mut self, move_name: &str) -> &mut MoveLearners {
        if !self.move_list.iter().any(|name| name == move_name) {
            self.move_list.push(move_name.to_owned());
        }
        self.moves.entry(move_name.to_owned()).or_default()
    }

    /// Adds a move to the move list without any learner data.
    pub fn with_listed_move(mut self, move_name: &str) -> Self {
        if !self.move_list.iter().any(|name| name == move_name) {
            self.move_list.push(move_name.to_owned());
        }
        self
    }

    /// Adds a Mon that learns the move on level up at the given levels.
    pub fn with_level_up<I, D>(mut self, move_name: &str, mon: &str, levels: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<DetailAtom>,
    {
        self.learners_mut(move_name).push(
            LearnMethodKind::LevelUp,
            Learner::with_details(mon, levels),
        );
        self
    }

    /// Adds Mons that learn the move by the given method, with no details.
    pub fn with_learners<'a, I>(mut self, move_name: &str, kind: LearnMethodKind, mons: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let learners = self.learners_mut(move_name);
        learners.add_section(kind);
        for mon in mons {
            learners.push(kind, Learner::new(mon));
        }
        self
    }

    /// Adds Mons that learn the move by TM or HM.
    pub fn with_teachable<'a, I>(self, move_name: &str, mons: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.with_learners(move_name, LearnMethodKind::TeachableItem, mons)
    }

    /// The move list and move table.
    pub fn into_parts(self) -> (Vec<String>, MoveTable) {
        (self.move_list, self.moves)
    }

    /// Builds a data source over the dataset.
    pub fn build(self) -> StaticDataSource {
        StaticDataSource::new(self.move_list, self.moves)
    }
}
