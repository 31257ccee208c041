use std::path::PathBuf;

use anyhow::{
    Context,
    Error,
    Result,
};
use async_trait::async_trait;
use indexmap::IndexMap;
use log::{
    debug,
    warn,
};

use crate::{
    DataSource,
    MoveTable,
    parse_learnset_text,
};

/// An implementation of [`DataSource`] that reads learnset text reports from disk.
///
/// The root directory contains a move names file, which maps the report key of each move (the
/// report file name, without extension) to its display name, and a directory of reports. Reports
/// are parsed with [`parse_learnset_text`].
#[derive(Debug)]
pub struct ReportDataSource {
    root: PathBuf,
}

impl ReportDataSource {
    /// Move names file name.
    pub const MOVE_NAMES_FILE: &str = "movenames.json";
    /// Reports directory name.
    pub const REPORTS_DIR: &str = "move_data";
    /// Report file extension.
    pub const REPORT_EXTENSION: &str = "txt";

    /// Creates a new instance of [`ReportDataSource`] that reads from the given root directory.
    pub fn new<P>(root: P) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "Root directory for ReportDataSource ({}) does not exist",
                root.display(),
            )));
        }
        Ok(Self { root })
    }

    async fn move_names(&self) -> Result<IndexMap<String, String>> {
        let path = self.root.join(Self::MOVE_NAMES_FILE);
        let bytes = tokio::fs::read(&path)
            .await
            .context(format!("failed to read {}", path.display()))?;
        serde_json::from_slice(&bytes).context(format!("failed to parse {}", path.display()))
    }
}

#[async_trait]
impl DataSource for ReportDataSource {
    async fn move_list(&self) -> Result<Vec<String>> {
        Ok(self.move_names().await?.into_values().collect())
    }

    async fn move_data(&self) -> Result<MoveTable> {
        let reports = self.root.join(Self::REPORTS_DIR);
        let mut moves = MoveTable::default();
        for (key, name) in self.move_names().await? {
            let path = reports.join(format!("{key}.{}", Self::REPORT_EXTENSION));
            let exists = tokio::fs::try_exists(&path)
                .await
                .context(format!("failed to check {}", path.display()))?;
            if !exists {
                warn!("No learnset report for {name} at {}", path.display());
                continue;
            }
            debug!("Reading learnset report {}", path.display());
            let text = tokio::fs::read_to_string(&path)
                .await
                .context(format!("failed to read {}", path.display()))?;
            let learners = parse_learnset_text(&text)
                .context(format!("failed to parse learnset report for {name}"))?;
            moves.insert(name, learners);
        }
        Ok(moves)
    }
}
