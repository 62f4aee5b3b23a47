//! # JSON Storage Module
//!
//! This module provides a JSON-file-based implementation of the coupon
//! inventory. It keeps the redemption logic storage-agnostic by living
//! behind the same `CouponStorage` trait a database implementation would
//! use.

pub mod connection;
pub mod coupon_repository;

pub use connection::JsonConnection;
pub use coupon_repository::JsonCouponRepository;
