//! Selection completeness and variant resolution.

use prickly_pear_core::{Product, ProductShape, Variant};

use crate::selection::Selection;

/// Whether the shopper has picked a value for every dimension the product
/// declares.
///
/// Only declared dimensions count: a stale color pick on a sizes-only
/// product neither helps nor hurts completeness.
#[must_use]
pub fn is_selection_complete(product: &Product, selection: &Selection) -> bool {
    match product.shape() {
        ProductShape::Neither => true,
        ProductShape::SizesOnly => selection.size_id().is_some(),
        ProductShape::ColorsOnly => selection.color_id().is_some(),
        ProductShape::Both => selection.size_id().is_some() && selection.color_id().is_some(),
    }
}

/// The variant a complete selection points at, in or out of stock.
///
/// Returns `None` while the selection is incomplete, or when the picked
/// combination is not in the catalog at all. A resolved variant with zero
/// stock is a meaningful answer: the page shows it as sold out.
#[must_use]
pub fn resolve_variant<'p>(product: &'p Product, selection: &Selection) -> Option<&'p Variant> {
    if !is_selection_complete(product, selection) {
        return None;
    }
    match product.shape() {
        ProductShape::Neither => product.variants.first(),
        ProductShape::SizesOnly => product
            .variants
            .iter()
            .find(|v| v.size_id() == selection.size_id()),
        ProductShape::ColorsOnly => product
            .variants
            .iter()
            .find(|v| v.color_id() == selection.color_id()),
        ProductShape::Both => product
            .variants
            .iter()
            .find(|v| v.size_id() == selection.size_id() && v.color_id() == selection.color_id()),
    }
}
