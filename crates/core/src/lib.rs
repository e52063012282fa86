//! Prickly Pear Core - Catalog domain types.
//!
//! This crate provides the catalog types shared by every Prickly Pear
//! surface that sells or edits a product:
//! - the storefront product page
//! - the quick "add to cart" modal
//! - the admin product editor
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no database
//! access, no HTTP clients. Products arrive here already fetched from the
//! catalog service; cart lines leave here for the cart service. Everything
//! in between is plain data.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, prices, the product/variant model, and the
//!   cart line payload

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
