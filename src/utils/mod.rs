//! Shared helpers.

pub mod hash;
