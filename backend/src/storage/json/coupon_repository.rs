//! # JSON Coupon Repository
//!
//! This module provides a file-based coupon inventory implementation
//! using a single JSON file `coupons.json` at the root of the data
//! directory.
//!
//! ## File Format
//!
//! ```json
//! [
//!   {
//!     "code": "RAICES10PLUS",
//!     "percent": 10,
//!     "remaining": 100000
//!   }
//! ]
//! ```
//!
//! ## Features
//!
//! - Single inventory file, one record per coupon code
//! - Records kept in stable order (sorted by code)
//! - Atomic file writes with temp files
//! - Falls back to the seeded default set when the file is missing or
//!   unreadable, persisting it immediately

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs;

use super::connection::JsonConnection;
use crate::domain::models::coupon::Coupon;
use crate::storage::traits::CouponStorage;

/// JSON-file-backed coupon repository
#[derive(Clone)]
pub struct JsonCouponRepository {
    connection: JsonConnection,
}

impl JsonCouponRepository {
    /// Create a new JSON coupon repository
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    /// Build the default inventory and persist it
    fn seed_defaults(&self) -> Result<HashMap<String, Coupon>> {
        let coupons: HashMap<String, Coupon> = Coupon::default_set()
            .into_iter()
            .map(|coupon| (coupon.code.clone(), coupon))
            .collect();
        self.write_inventory(&coupons)?;
        info!(
            "Seeded default coupon inventory at {:?}",
            self.connection.coupons_file_path()
        );
        Ok(coupons)
    }

    /// Save the full inventory to file
    fn write_inventory(&self, coupons: &HashMap<String, Coupon>) -> Result<()> {
        let file_path = self.connection.coupons_file_path();

        let mut records: Vec<&Coupon> = coupons.values().collect();
        records.sort_by(|a, b| a.code.cmp(&b.code));

        let json = serde_json::to_string_pretty(&records)
            .context("Failed to serialize coupon inventory")?;

        // Use atomic write pattern: write to temp file, then rename
        let temp_path = file_path.with_extension("tmp");
        fs::write(&temp_path, json)
            .with_context(|| format!("Failed to write coupon inventory to {:?}", temp_path))?;
        fs::rename(&temp_path, &file_path)
            .with_context(|| format!("Failed to move coupon inventory into {:?}", file_path))?;

        debug!("Saved {} coupons to {:?}", records.len(), file_path);
        Ok(())
    }
}

impl CouponStorage for JsonCouponRepository {
    fn load_or_seed(&self) -> Result<HashMap<String, Coupon>> {
        let file_path = self.connection.coupons_file_path();

        if !file_path.exists() {
            return self.seed_defaults();
        }

        let contents = match fs::read_to_string(&file_path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(
                    "Could not read coupon inventory {:?} ({}), reseeding defaults",
                    file_path, e
                );
                return self.seed_defaults();
            }
        };

        match serde_json::from_str::<Vec<Coupon>>(&contents) {
            Ok(records) => {
                debug!("Loaded {} coupons from {:?}", records.len(), file_path);
                Ok(records
                    .into_iter()
                    .map(|coupon| (coupon.code.clone(), coupon))
                    .collect())
            }
            Err(e) => {
                warn!(
                    "Coupon inventory {:?} is corrupt ({}), reseeding defaults",
                    file_path, e
                );
                self.seed_defaults()
            }
        }
    }

    fn save_all(&self, coupons: &HashMap<String, Coupon>) -> Result<()> {
        self.write_inventory(coupons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_repo() -> (JsonCouponRepository, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = JsonConnection::new(temp_dir.path()).expect("Failed to create connection");
        (JsonCouponRepository::new(connection), temp_dir)
    }

    #[test]
    fn test_load_on_missing_file_seeds_and_persists() {
        let (repo, temp_dir) = setup_test_repo();
        let file_path = temp_dir.path().join("coupons.json");
        assert!(!file_path.exists());

        let coupons = repo.load_or_seed().unwrap();

        assert_eq!(coupons.len(), 3);
        assert_eq!(coupons.get("RAICES10PLUS").unwrap().percent, 10);
        assert_eq!(coupons.get("ALQUILA20YA").unwrap().percent, 20);
        assert_eq!(coupons.get("MIHOGAR30").unwrap().percent, 30);
        // The seeded defaults must hit disk right away
        assert!(file_path.exists());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let (repo, _temp_dir) = setup_test_repo();

        let mut coupons = repo.load_or_seed().unwrap();
        coupons.get_mut("RAICES10PLUS").unwrap().remaining = 41;
        repo.save_all(&coupons).unwrap();

        let reloaded = repo.load_or_seed().unwrap();
        assert_eq!(reloaded.get("RAICES10PLUS").unwrap().remaining, 41);
        assert_eq!(reloaded.len(), 3);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let (repo, temp_dir) = setup_test_repo();
        let file_path = temp_dir.path().join("coupons.json");
        fs::write(&file_path, "not json at all {{{").unwrap();

        let coupons = repo.load_or_seed().unwrap();

        assert_eq!(coupons.len(), 3);
        assert_eq!(coupons.get("MIHOGAR30").unwrap().remaining, 100_000);

        // The corrupt file was replaced by a parseable inventory
        let contents = fs::read_to_string(&file_path).unwrap();
        let records: Vec<Coupon> = serde_json::from_str(&contents).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_records_are_sorted_by_code() {
        let (repo, temp_dir) = setup_test_repo();
        repo.load_or_seed().unwrap();

        let contents = fs::read_to_string(temp_dir.path().join("coupons.json")).unwrap();
        let records: Vec<Coupon> = serde_json::from_str(&contents).unwrap();
        let codes: Vec<&str> = records.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["ALQUILA20YA", "MIHOGAR30", "RAICES10PLUS"]);
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let (repo, temp_dir) = setup_test_repo();
        repo.load_or_seed().unwrap();
        assert!(!temp_dir.path().join("coupons.tmp").exists());
    }
}
