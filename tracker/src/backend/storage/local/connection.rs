use anyhow::Result;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::storage::traits::KeyValueStorage;

/// FileConnection keeps each key in its own JSON file inside a data directory
#[derive(Debug, Clone)]
pub struct FileConnection {
    base_directory: PathBuf,
}

impl FileConnection {
    /// Create a new file connection, creating the base directory if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// File that holds the value for `key`
    pub fn item_path(&self, key: &str) -> PathBuf {
        self.base_directory
            .join(format!("{}.json", Self::generate_safe_file_name(key)))
    }

    /// Map a storage key to a file name without path separators or odd characters
    pub fn generate_safe_file_name(key: &str) -> String {
        let name: String = key
            .chars()
            .map(|c| match c {
                c if c.is_ascii_alphanumeric() => c.to_ascii_lowercase(),
                '-' | '_' => c,
                _ => '_',
            })
            .collect();

        if name.is_empty() {
            "_".to_string()
        } else {
            name
        }
    }
}

impl KeyValueStorage for FileConnection {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key);
        if !path.exists() {
            debug!("No stored value for '{}' at {:?}", key, path);
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        debug!("Read '{}' from {:?}", key, path);
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)?;
        }

        let path = self.item_path(key);

        // Write to a temp file, then rename over the old value
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        debug!("Saved '{}' to {:?}", key, path);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.item_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
            debug!("Removed '{}' at {:?}", key, path);
        }
        Ok(())
    }
}
