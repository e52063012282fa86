//! The order gate: what a selection costs and whether it can be bought.

use std::collections::HashSet;

use serde::Serialize;

use prickly_pear_core::{CartLineRequest, ColorId, Price, Product, ProductShape, SizeId, Variant};

use crate::availability::{available_color_ids, available_size_ids};
use crate::index::VariantIndex;
use crate::resolver::resolve_variant;
use crate::selection::Selection;

/// The price to show for the current selection.
///
/// A resolved variant with a price of its own wins; otherwise the
/// product's base price applies, including while nothing is resolved.
#[must_use]
pub fn current_price(product: &Product, resolved: Option<&Variant>) -> Price {
    resolved
        .and_then(|v| v.price)
        .unwrap_or(product.base_price)
}

/// Whether the selection resolves to a variant that is in stock.
///
/// This is the single gate in front of "add to cart": completeness,
/// existence, and stock all have to hold at once.
#[must_use]
pub fn can_order(product: &Product, selection: &Selection) -> bool {
    resolve_variant(product, selection).is_some_and(Variant::is_in_stock)
}

/// How many units the resolved variant can supply.
///
/// `None` while nothing is resolved; `Some(0)` for a resolved variant
/// that is sold out. Pages use this for "only N left" notices.
#[must_use]
pub fn units_available(resolved: Option<&Variant>) -> Option<u32> {
    resolved.map(|v| v.stock)
}

/// The cart line for the current selection, if it can be ordered.
///
/// Returns `None` under exactly the conditions [`can_order`] is false,
/// so callers can hand the result straight to the cart backend.
#[must_use]
pub fn cart_line(product: &Product, selection: &Selection) -> Option<CartLineRequest> {
    let variant = resolve_variant(product, selection)?;
    if !variant.is_in_stock() {
        return None;
    }
    Some(CartLineRequest {
        product_id: product.id,
        variant_id: variant.id,
        quantity: selection.quantity(),
    })
}

/// Everything a product page needs to render its purchase controls.
///
/// An owned snapshot of one product/selection pair, assembled by
/// [`PurchaseView::evaluate`]. Templates and the quick "add to cart"
/// modal consume this instead of querying the engine piecemeal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseView {
    /// Sizes worth offering, cross-filtered by the picked color.
    pub available_size_ids: HashSet<SizeId>,
    /// Colors worth offering, cross-filtered by the picked size.
    pub available_color_ids: HashSet<ColorId>,
    /// The variant the picks point at, stocked or not.
    pub resolved: Option<Variant>,
    /// Price for the current state of the page.
    pub current_price: Price,
    /// Whether "add to cart" should be enabled.
    pub can_order: bool,
    /// Stock of the resolved variant, for "only N left" notices.
    pub units_available: Option<u32>,
}

impl PurchaseView {
    /// Evaluate the whole purchase state for one product and selection.
    ///
    /// Option values outside the declared dimensions come back as empty
    /// sets; on two-dimension products each picker is filtered by the
    /// other dimension's pick.
    #[must_use]
    pub fn evaluate(product: &Product, selection: &Selection) -> Self {
        let index = VariantIndex::build(product);
        let (size_ids, color_ids) = match product.shape() {
            ProductShape::Neither => (HashSet::new(), HashSet::new()),
            ProductShape::SizesOnly => (available_size_ids(&index, None), HashSet::new()),
            ProductShape::ColorsOnly => (HashSet::new(), available_color_ids(&index, None)),
            ProductShape::Both => (
                available_size_ids(&index, selection.color_id()),
                available_color_ids(&index, selection.size_id()),
            ),
        };
        let resolved = resolve_variant(product, selection);
        Self {
            available_size_ids: size_ids,
            available_color_ids: color_ids,
            current_price: current_price(product, resolved),
            can_order: resolved.is_some_and(Variant::is_in_stock),
            units_available: units_available(resolved),
            resolved: resolved.cloned(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use prickly_pear_core::{Color, CurrencyCode, ProductId, Size, VariantId};

    use super::*;

    fn size(id: i64) -> Size {
        Size {
            id: SizeId::new(id),
            code: format!("s{id}"),
            label: format!("Size {id}"),
        }
    }

    fn color(id: i64) -> Color {
        Color {
            id: ColorId::new(id),
            code: format!("c{id}"),
            label: format!("Color {id}"),
            hex: None,
        }
    }

    fn variant(id: i64, size_id: i64, color_id: i64, stock: u32) -> Variant {
        Variant {
            id: VariantId::new(id),
            size: Some(size(size_id)),
            color: Some(color(color_id)),
            stock,
            price: None,
        }
    }

    // Sizes 1 (S) and 2 (M), colors 1 (red) and 2 (blue).
    // In stock: (S, red) at the base price and (S, blue) at a premium.
    // Sold out: (M, red). No (M, blue).
    fn shirt() -> Product {
        Product {
            id: ProductId::new(1),
            base_price: Price::from_cents(2500, CurrencyCode::USD),
            sizes: vec![size(1), size(2)],
            colors: vec![color(1), color(2)],
            variants: vec![
                variant(1, 1, 1, 5),
                variant(2, 2, 1, 0),
                Variant {
                    price: Some(Price::from_cents(2750, CurrencyCode::USD)),
                    ..variant(3, 1, 2, 3)
                },
            ],
        }
    }

    fn pick(size_id: Option<i64>, color_id: Option<i64>, index: &VariantIndex<'_>) -> Selection {
        let mut selection = Selection::new();
        if let Some(id) = size_id {
            selection.toggle_size(SizeId::new(id), index);
        }
        if let Some(id) = color_id {
            selection.toggle_color(ColorId::new(id), index);
        }
        selection
    }

    #[test]
    fn test_price_falls_back_to_base() {
        let p = shirt();
        assert_eq!(current_price(&p, None), p.base_price);

        // Variant without its own price also falls back.
        assert_eq!(current_price(&p, Some(&p.variants[0])), p.base_price);
    }

    #[test]
    fn test_variant_price_overrides_base() {
        let p = shirt();
        let premium = current_price(&p, Some(&p.variants[2]));
        assert_eq!(premium, Price::from_cents(2750, CurrencyCode::USD));
    }

    #[test]
    fn test_can_order_requires_resolved_stock() {
        let p = shirt();
        let index = VariantIndex::build(&p);

        assert!(!can_order(&p, &pick(None, None, &index)));
        assert!(!can_order(&p, &pick(Some(1), None, &index)));
        assert!(!can_order(&p, &pick(Some(2), Some(1), &index))); // sold out
        assert!(can_order(&p, &pick(Some(1), Some(1), &index)));
    }

    #[test]
    fn test_units_available_distinguishes_unresolved_from_sold_out() {
        let p = shirt();
        assert_eq!(units_available(None), None);
        assert_eq!(units_available(Some(&p.variants[1])), Some(0));
        assert_eq!(units_available(Some(&p.variants[0])), Some(5));
    }

    #[test]
    fn test_cart_line_matches_the_order_gate() {
        let p = shirt();
        let index = VariantIndex::build(&p);

        assert!(cart_line(&p, &pick(Some(1), None, &index)).is_none());
        assert!(cart_line(&p, &pick(Some(2), Some(1), &index)).is_none());

        let mut selection = pick(Some(1), Some(2), &index);
        selection.increment_quantity(Some(&p.variants[2]));
        let line = cart_line(&p, &selection).unwrap();
        assert_eq!(line.product_id, ProductId::new(1));
        assert_eq!(line.variant_id, VariantId::new(3));
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_evaluate_mid_selection() {
        let p = shirt();
        let index = VariantIndex::build(&p);
        let view = PurchaseView::evaluate(&p, &pick(None, Some(1), &index));

        // Red narrows the sizes; the color picker reflects no size pick.
        assert_eq!(view.available_size_ids, HashSet::from([SizeId::new(1)]));
        assert_eq!(
            view.available_color_ids,
            HashSet::from([ColorId::new(1), ColorId::new(2)])
        );
        assert!(view.resolved.is_none());
        assert_eq!(view.current_price, p.base_price);
        assert!(!view.can_order);
        assert_eq!(view.units_available, None);
    }

    #[test]
    fn test_evaluate_complete_selection() {
        let p = shirt();
        let index = VariantIndex::build(&p);
        let view = PurchaseView::evaluate(&p, &pick(Some(1), Some(2), &index));

        assert_eq!(view.resolved.as_ref().map(|v| v.id), Some(VariantId::new(3)));
        assert_eq!(
            view.current_price,
            Price::from_cents(2750, CurrencyCode::USD)
        );
        assert!(view.can_order);
        assert_eq!(view.units_available, Some(3));
    }

    #[test]
    fn test_evaluate_no_option_product() {
        let p = Product {
            id: ProductId::new(2),
            base_price: Price::from_cents(800, CurrencyCode::USD),
            sizes: vec![],
            colors: vec![],
            variants: vec![Variant {
                id: VariantId::new(7),
                size: None,
                color: None,
                stock: 1,
                price: None,
            }],
        };
        let view = PurchaseView::evaluate(&p, &Selection::new());

        assert!(view.available_size_ids.is_empty());
        assert!(view.available_color_ids.is_empty());
        assert_eq!(view.resolved.as_ref().map(|v| v.id), Some(VariantId::new(7)));
        assert!(view.can_order);
        assert_eq!(view.units_available, Some(1));
    }
}
