//! Per-product lookup index over variants.

use std::collections::HashMap;

use prickly_pear_core::{ColorId, Product, SizeId, Variant};

/// Pre-computed lookup structures for one product's variants.
///
/// Built fresh per evaluation from a validated
/// [`Product`](prickly_pear_core::Product); it borrows the product's
/// variants rather than cloning them. Two views matter downstream:
/// the in-stock subset drives availability, while the full combination
/// map answers existence questions regardless of stock.
#[derive(Debug)]
pub struct VariantIndex<'a> {
    /// Variants with at least one unit on hand, in catalog order.
    in_stock: Vec<&'a Variant>,
    /// Every variant keyed by its size/color combination.
    by_key: HashMap<(Option<SizeId>, Option<ColorId>), &'a Variant>,
}

impl<'a> VariantIndex<'a> {
    /// Index a product's variants.
    ///
    /// On a product that skipped [`validate`](prickly_pear_core::Product::validate)
    /// the first variant claiming a combination wins; later claimants are
    /// unreachable through the index.
    #[must_use]
    pub fn build(product: &'a Product) -> Self {
        let mut in_stock = Vec::new();
        let mut by_key = HashMap::with_capacity(product.variants.len());
        for variant in &product.variants {
            if variant.is_in_stock() {
                in_stock.push(variant);
            }
            by_key.entry(variant.key()).or_insert(variant);
        }
        Self { in_stock, by_key }
    }

    /// Variants with stock, in catalog order.
    pub fn in_stock(&self) -> impl Iterator<Item = &'a Variant> + '_ {
        self.in_stock.iter().copied()
    }

    /// The variant covering a size/color combination, if any.
    #[must_use]
    pub fn get(&self, size_id: Option<SizeId>, color_id: Option<ColorId>) -> Option<&'a Variant> {
        self.by_key.get(&(size_id, color_id)).copied()
    }

    /// Whether any variant covers the combination, in stock or not.
    #[must_use]
    pub fn variant_exists(&self, size_id: Option<SizeId>, color_id: Option<ColorId>) -> bool {
        self.by_key.contains_key(&(size_id, color_id))
    }

    /// Whether an in-stock variant covers the combination.
    #[must_use]
    pub fn in_stock_exists(&self, size_id: Option<SizeId>, color_id: Option<ColorId>) -> bool {
        self.get(size_id, color_id).is_some_and(Variant::is_in_stock)
    }

    /// True when the product has no variants at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
