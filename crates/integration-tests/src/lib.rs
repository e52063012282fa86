//! Integration tests for Prickly Pear.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p prickly-pear-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_flow` - product page flows from load to "add to cart"
//! - `availability_properties` - brute-force checks of the availability rules
//! - `quantity_and_ordering` - quantity stepper and order gate behavior
//! - `catalog_wire` - catalog JSON documents through validation into the engine

pub mod fixtures;
