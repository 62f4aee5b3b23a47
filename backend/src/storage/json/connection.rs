use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// JsonConnection manages the data directory holding the coupon store file
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new JSON connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a new JSON connection rooted at the process working directory
    pub fn new_default() -> Result<Self> {
        Self::new(std::env::current_dir()?)
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the file path of the coupon inventory
    pub fn coupons_file_path(&self) -> PathBuf {
        self.base_directory.join("coupons.json")
    }
}
