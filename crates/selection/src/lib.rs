//! Variant selection engine for Prickly Pear.
//!
//! Implements the picker logic shared by the storefront product page, the
//! quick "add to cart" modal, and the admin product editor: which sizes
//! and colors are worth offering, which variant the shopper's picks
//! resolve to, and whether that variant can be ordered right now.
//!
//! # Architecture
//!
//! The engine is pure. It borrows a validated
//! [`Product`](prickly_pear_core::Product) and a [`Selection`] and answers
//! questions about them; it performs no I/O and never errors. Impossible
//! states come back as empty sets and `None`s, so callers render them
//! instead of handling failures.
//!
//! # Modules
//!
//! - [`index`]: per-product lookup structures over variants
//! - [`availability`]: which option values can still be bought
//! - [`selection`]: the shopper's picks and quantity
//! - [`resolver`]: selection completeness and variant resolution
//! - [`order`]: price, orderability, cart lines, and page snapshots

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod availability;
pub mod index;
pub mod order;
pub mod resolver;
pub mod selection;

pub use availability::{available_color_ids, available_size_ids};
pub use index::VariantIndex;
pub use order::{PurchaseView, can_order, cart_line, current_price, units_available};
pub use resolver::{is_selection_complete, resolve_variant};
pub use selection::Selection;
