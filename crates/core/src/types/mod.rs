//! Core types for the Prickly Pear catalog.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;

pub use cart::CartLineRequest;
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use product::{CatalogError, Color, Product, ProductShape, Size, Variant};
