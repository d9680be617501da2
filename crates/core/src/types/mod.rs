//! Core types for the album viewer.
//!
//! This module provides type-safe wrappers for the catalog concepts the cart
//! depends on.

pub mod album;
pub mod id;
pub mod price;

pub use album::Album;
pub use id::*;
pub use price::Price;
