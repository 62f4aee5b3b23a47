//! Storage layer: the coupon inventory abstraction and its JSON-file
//! implementation.

pub mod json;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use json::{JsonConnection, JsonCouponRepository};
pub use traits::CouponStorage;
