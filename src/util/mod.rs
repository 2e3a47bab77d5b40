//! Shared utilities.

pub mod timing;
