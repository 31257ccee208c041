use std::{
    env,
    path::PathBuf,
};

use anyhow::{
    Context,
    Error,
    Result,
};
use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

use crate::{
    DataSource,
    MoveTable,
};

/// An implementation of [`DataSource`] that reads JSON feeds from a directory on disk.
#[derive(Debug)]
pub struct LocalDataSource {
    root: PathBuf,
    move_data_file: String,
}

impl LocalDataSource {
    /// Move list file name.
    pub const MOVE_LIST_FILE: &str = "movelist.json";
    /// Move data file name.
    pub const MOVE_DATA_FILE: &str = "move_data.json";
    /// Move data file name for data that only lists learner names.
    pub const NAMES_ONLY_MOVE_DATA_FILE: &str = "movedata_namesonly.json";

    /// Creates a new instance of [`LocalDataSource`] that reads from the given root directory.
    ///
    /// Fails if the path does not exist or does not point to a directory. Files are not read until
    /// data is requested.
    pub fn new<P>(root: P) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "Root directory for LocalDataSource ({}) does not exist",
                root.display(),
            )));
        }
        Ok(Self {
            root,
            move_data_file: Self::MOVE_DATA_FILE.to_owned(),
        })
    }

    /// Creates a new instance of [`LocalDataSource`] that reads from the root directory at the
    /// given environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// Reads move data from the given file name instead of [`Self::MOVE_DATA_FILE`].
    pub fn with_move_data_file<S>(mut self, file: S) -> Self
    where
        S: Into<String>,
    {
        self.move_data_file = file.into();
        self
    }

    async fn read_json<T>(&self, file: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let path = self.root.join(file);
        debug!("Reading {}", path.display());
        let bytes = tokio::fs::read(&path)
            .await
            .context(format!("failed to read {}", path.display()))?;
        serde_json::from_slice(&bytes).context(format!("failed to parse {}", path.display()))
    }
}

#[async_trait]
impl DataSource for LocalDataSource {
    async fn move_list(&self) -> Result<Vec<String>> {
        self.read_json(Self::MOVE_LIST_FILE).await
    }

    async fn move_data(&self) -> Result<MoveTable> {
        self.read_json(&self.move_data_file).await
    }
}
