//! Test utilities for storage tests
//!
//! Provides RAII-based cleanup so test data is removed even if a test panics.

use anyhow::Result;
use tempfile::TempDir;

use super::connection::FileConnection;
use super::saved_record_repository::SavedRecordRepository;

/// Temporary data directory plus a connection to it, removed on drop
pub struct TestEnvironment {
    pub connection: FileConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    /// Create a new test environment with a temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = FileConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }

    /// Repository backed by this environment's directory
    pub fn repository(&self) -> SavedRecordRepository<FileConnection> {
        SavedRecordRepository::new(self.connection.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::traits::SavedRecordStorage;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_path.clone();
            assert!(base_path.exists());
            // Environment dropped here
        }
        assert!(!base_path.exists());
        Ok(())
    }

    #[test]
    fn test_repository_helper() -> Result<()> {
        let env = TestEnvironment::new()?;
        let repo = env.repository();
        repo.save_note(Some(5), "hello")?;
        assert_eq!(env.repository().load().notes.len(), 1);
        Ok(())
    }
}
