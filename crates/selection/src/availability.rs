//! Which option values can still lead to an in-stock variant.
//!
//! A value is offered only when picking it can end in a purchase. Pickers
//! render anything outside the returned sets as disabled, so a shopper can
//! never navigate into a dead combination.

use std::collections::HashSet;

use prickly_pear_core::{ColorId, SizeId, Variant};

use crate::index::VariantIndex;

/// Size ids covered by at least one in-stock variant, optionally
/// restricted to variants of one color.
///
/// `selected_color: None` means no color filter (the union across all
/// colors), not "variants without a color".
#[must_use]
pub fn available_size_ids(
    index: &VariantIndex<'_>,
    selected_color: Option<ColorId>,
) -> HashSet<SizeId> {
    index
        .in_stock()
        .filter(|v| selected_color.is_none() || v.color_id() == selected_color)
        .filter_map(Variant::size_id)
        .collect()
}

/// Color ids covered by at least one in-stock variant, optionally
/// restricted to variants of one size.
///
/// Mirror of [`available_size_ids`]; `selected_size: None` is the union
/// across all sizes.
#[must_use]
pub fn available_color_ids(
    index: &VariantIndex<'_>,
    selected_size: Option<SizeId>,
) -> HashSet<ColorId> {
    index
        .in_stock()
        .filter(|v| selected_size.is_none() || v.size_id() == selected_size)
        .filter_map(Variant::color_id)
        .collect()
}
