//! Storage doubles shared by service tests.

use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::models::coupon::Coupon;
use crate::storage::traits::CouponStorage;

struct MemoryState {
    seed: Vec<Coupon>,
    saved: Mutex<Option<HashMap<String, Coupon>>>,
    save_calls: AtomicUsize,
    fail_saves: AtomicBool,
}

/// In-memory coupon storage with controllable save behavior.
#[derive(Clone)]
pub struct MemoryCouponStorage {
    state: Arc<MemoryState>,
}

impl MemoryCouponStorage {
    pub fn with_seed(seed: Vec<Coupon>) -> Self {
        Self {
            state: Arc::new(MemoryState {
                seed,
                saved: Mutex::new(None),
                save_calls: AtomicUsize::new(0),
                fail_saves: AtomicBool::new(false),
            }),
        }
    }

    /// Make every subsequent save fail.
    pub fn fail_saves(&self) {
        self.state.fail_saves.store(true, Ordering::SeqCst);
    }

    /// Number of save calls observed so far.
    pub fn save_calls(&self) -> usize {
        self.state.save_calls.load(Ordering::SeqCst)
    }

    /// Remaining count of a code in the last successfully saved snapshot.
    pub fn saved_remaining(&self, code: &str) -> Option<u32> {
        self.state
            .saved
            .lock()
            .unwrap()
            .as_ref()
            .and_then(|coupons| coupons.get(code).map(|c| c.remaining))
    }
}

impl CouponStorage for MemoryCouponStorage {
    fn load_or_seed(&self) -> Result<HashMap<String, Coupon>> {
        Ok(self
            .state
            .seed
            .iter()
            .cloned()
            .map(|coupon| (coupon.code.clone(), coupon))
            .collect())
    }

    fn save_all(&self, coupons: &HashMap<String, Coupon>) -> Result<()> {
        self.state.save_calls.fetch_add(1, Ordering::SeqCst);
        if self.state.fail_saves.load(Ordering::SeqCst) {
            return Err(anyhow!("simulated save failure"));
        }
        *self.state.saved.lock().unwrap() = Some(coupons.clone());
        Ok(())
    }
}
