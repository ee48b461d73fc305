//! Isolated test environment with temp directory.

// Test utility; not every helper is used by every test binary
#![allow(dead_code)]

use super::FolioCommand;
use folio::domain::{Article, ArticleId};
use folio::search::LanguageProfile;
use folio::store::{ArticleStore, ChangeSet, SqliteStore, StoreLocation};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary database and config home.
///
/// Everything lives in a temp directory that is removed on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the temp directory root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the SQLite database.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("data").join("folio.db")
    }

    /// Opens the environment's store through the library API.
    pub fn open_store(&self) -> SqliteStore {
        SqliteStore::open(&StoreLocation::File(self.db_path())).expect("Failed to open store")
    }

    /// Saves an article with tags and its search document directly.
    pub fn add_article(
        &self,
        title: &str,
        body: &str,
        tags: &[&str],
        profile: LanguageProfile,
    ) -> ArticleId {
        let article = Article::new(title, body);
        let id = *article.id();
        let changes = ChangeSet::new().indexed(article, tags, profile);
        self.open_store()
            .save(&changes)
            .expect("Failed to save article");
        id
    }

    /// Writes `folio/config.toml` under the environment's config home.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.root.join("folio");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Creates a FolioCommand with this environment's database and config home.
    pub fn cmd(&self) -> FolioCommand {
        self.bare_cmd().database(&self.db_path())
    }

    /// Creates a FolioCommand without `--database`, so config decides.
    pub fn bare_cmd(&self) -> FolioCommand {
        FolioCommand::new().config_home(&self.root)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
