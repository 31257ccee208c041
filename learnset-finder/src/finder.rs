use std::sync::{
    Arc,
    atomic::{
        AtomicBool,
        Ordering,
    },
};

use anyhow::{
    Context,
    Error,
    Result,
};
use learnset_data::DataSource;
use log::{
    debug,
    error,
    info,
};
use once_cell::sync::OnceCell;
use tokio::task::JoinHandle;

use crate::{
    FindOutcome,
    FinderOptions,
    LearnerLookup,
    LookupError,
    MoveIndex,
    MoveQuery,
    ResolvedMove,
    find_common,
};

/// The state of loading move data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Move data is still loading.
    Pending,
    /// Move data is loaded and can be queried.
    Loaded,
    /// Move data failed to load, with the reason.
    ///
    /// Move data will never be available.
    Failed(String),
}

/// Lookup used before move data is available.
struct UnloadedIndex;

impl LearnerLookup for UnloadedIndex {
    fn lookup(&self, move_name: &str) -> Result<ResolvedMove<'_>, LookupError> {
        Err(LookupError::DataNotLoaded(move_name.to_owned()))
    }
}

/// Answers move queries and suggestions for a single session.
///
/// Move data is loaded once, asynchronously, from a [`DataSource`]. Until loading completes, every
/// move is treated as unresolvable and no suggestions are made. If loading fails, the finder stays
/// in this state permanently.
///
/// Clones share the same move data.
#[derive(Clone)]
pub struct LearnsetFinder {
    index: Arc<OnceCell<Result<MoveIndex, String>>>,
    loading: Arc<AtomicBool>,
    options: FinderOptions,
}

impl LearnsetFinder {
    /// Creates a new finder with no move data.
    pub fn new(options: FinderOptions) -> Self {
        Self {
            index: Arc::new(OnceCell::new()),
            loading: Arc::new(AtomicBool::new(false)),
            options,
        }
    }

    /// Creates a new finder over move data that is already loaded.
    pub fn with_index(index: MoveIndex, options: FinderOptions) -> Self {
        Self {
            index: Arc::new(OnceCell::with_value(Ok(index))),
            loading: Arc::new(AtomicBool::new(true)),
            options,
        }
    }

    /// The state of loading move data.
    pub fn status(&self) -> LoadStatus {
        match self.index.get() {
            None => LoadStatus::Pending,
            Some(Ok(_)) => LoadStatus::Loaded,
            Some(Err(reason)) => LoadStatus::Failed(reason.clone()),
        }
    }

    /// The move index, if move data is loaded.
    pub fn index(&self) -> Option<&MoveIndex> {
        self.index.get().and_then(|index| index.as_ref().ok())
    }

    async fn fetch(source: &dyn DataSource) -> Result<MoveIndex> {
        let (move_list, moves) = tokio::try_join!(
            async { source.move_list().await.context("failed to load move list") },
            async { source.move_data().await.context("failed to load move data") },
        )?;
        Ok(MoveIndex::new(move_list, moves))
    }

    fn publish(&self, index: Result<MoveIndex, String>) -> Result<()> {
        self.index
            .set(index)
            .map_err(|_| Error::msg("move data has already been loaded"))
    }

    /// Loads move data from the given source.
    ///
    /// Both feeds are fetched concurrently. If either fails, the finder records the failure in its
    /// [`LoadStatus`], the error is logged, and the error is returned.
    ///
    /// Move data can only be loaded once. Calls made while another load is in progress fail
    /// without fetching anything.
    pub async fn load(&self, source: &dyn DataSource) -> Result<()> {
        if self.index.get().is_some() {
            return Err(Error::msg("move data has already been loaded"));
        }
        if self.loading.swap(true, Ordering::AcqRel) {
            return Err(Error::msg("move data is already being loaded"));
        }
        info!("Loading move data");
        match Self::fetch(source).await {
            Ok(index) => {
                let (names, moves) = (index.move_list().len(), index.len());
                self.publish(Ok(index))?;
                info!("Loaded {names} move names and learner data for {moves} moves");
                Ok(())
            }
            Err(err) => {
                self.publish(Err(format!("{err:#}")))?;
                error!("Failed to load move data: {err:#}");
                Err(err)
            }
        }
    }

    /// Starts loading move data in the background.
    ///
    /// Failures are logged and recorded in the finder's [`LoadStatus`].
    pub fn spawn_load(&self, source: Arc<dyn DataSource>) -> JoinHandle<()> {
        let finder = self.clone();
        tokio::spawn(async move {
            if let Err(err) = finder.load(source.as_ref()).await {
                debug!("Background load of move data finished with error: {err}");
            }
        })
    }

    /// Suggests moves for a partially typed move name.
    ///
    /// See [`MoveIndex::suggest`]. Returns nothing while move data is unavailable.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        match self.index() {
            Some(index) => index.suggest(prefix).map(ToOwned::to_owned).collect(),
            None => {
                debug!("No suggestions for \"{prefix}\" because move data is not loaded");
                Vec::new()
            }
        }
    }

    /// The canonical name of a selected move.
    ///
    /// See [`MoveIndex::canonical_name`].
    pub fn canonical_name(&self, input: &str) -> Option<String> {
        self.index()?.canonical_name(input).map(ToOwned::to_owned)
    }

    /// Finds all Mons that can learn every move in `moves`.
    ///
    /// See [`find_common`]. While move data is unavailable, every move is reported as
    /// [`LookupError::DataNotLoaded`].
    pub fn find_common<S>(&self, moves: &[S]) -> FindOutcome
    where
        S: AsRef<str>,
    {
        match self.index() {
            Some(index) => find_common(index, moves, &self.options),
            None => find_common(&UnloadedIndex, moves, &self.options),
        }
    }

    /// Finds all Mons that can learn every move in a validated query.
    pub fn query(&self, query: &MoveQuery) -> FindOutcome {
        self.find_common(query.moves())
    }
}
