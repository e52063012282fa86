//! The shopper's picks and quantity for one product page.

use prickly_pear_core::{ColorId, SizeId, Variant};
use serde::{Deserialize, Serialize};

use crate::index::VariantIndex;

const fn first_unit() -> u32 {
    1
}

fn de_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = u32::deserialize(deserializer)?;
    Ok(raw.max(1))
}

/// The shopper's current picks on a product page.
///
/// Fields are private so every mutation flows through the toggle and
/// quantity methods, which keep the cross-dimension rules intact. A
/// selection starts empty with a quantity of one and is independent of
/// any particular product; pass the product's [`VariantIndex`] to the
/// toggles so they can check what exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Picked size, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size_id: Option<SizeId>,
    /// Picked color, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color_id: Option<ColorId>,
    /// Units the shopper wants, never below 1.
    #[serde(default = "first_unit", deserialize_with = "de_quantity")]
    quantity: u32,
}

impl Selection {
    /// A fresh selection: nothing picked, one unit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            size_id: None,
            color_id: None,
            quantity: 1,
        }
    }

    /// The picked size, if any.
    #[must_use]
    pub const fn size_id(&self) -> Option<SizeId> {
        self.size_id
    }

    /// The picked color, if any.
    #[must_use]
    pub const fn color_id(&self) -> Option<ColorId> {
        self.color_id
    }

    /// Units the shopper wants, at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Pick a size, or clear the size when it is already picked.
    ///
    /// Picking a new size resets the quantity to one unit. If a color is
    /// picked and no variant at all covers the new combination, the color
    /// is cleared as well. A combination that exists but lacks stock keeps
    /// the color, so the page can present it as sold out.
    pub fn toggle_size(&mut self, size_id: SizeId, index: &VariantIndex<'_>) {
        if self.size_id == Some(size_id) {
            self.size_id = None;
            return;
        }
        self.size_id = Some(size_id);
        self.quantity = 1;
        if let Some(color_id) = self.color_id
            && !index.variant_exists(Some(size_id), Some(color_id))
        {
            tracing::debug!(
                size_id = %size_id,
                color_id = %color_id,
                "cleared color with no variant for the new size"
            );
            self.color_id = None;
        }
    }

    /// Pick a color, or clear the color when it is already picked.
    ///
    /// Mirror of [`toggle_size`](Self::toggle_size): picking a new color
    /// resets the quantity and clears a picked size that no variant
    /// combines with the new color. The storefront page also rewinds its
    /// image gallery on color picks; that belongs to the caller, not here.
    pub fn toggle_color(&mut self, color_id: ColorId, index: &VariantIndex<'_>) {
        if self.color_id == Some(color_id) {
            self.color_id = None;
            return;
        }
        self.color_id = Some(color_id);
        self.quantity = 1;
        if let Some(size_id) = self.size_id
            && !index.variant_exists(Some(size_id), Some(color_id))
        {
            tracing::debug!(
                size_id = %size_id,
                color_id = %color_id,
                "cleared size with no variant for the new color"
            );
            self.size_id = None;
        }
    }

    /// Ask for one more unit, capped at the resolved variant's stock.
    ///
    /// Without a resolved variant there is no cap to check against, so
    /// the request is ignored.
    pub fn increment_quantity(&mut self, resolved: Option<&Variant>) {
        if let Some(variant) = resolved
            && self.quantity < variant.stock
        {
            self.quantity += 1;
        }
    }

    /// Ask for one less unit, never going below one.
    pub fn decrement_quantity(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    /// Set the quantity outright, clamped to what the resolved variant can
    /// supply (and never below one). Ignored while no variant is resolved.
    pub fn set_quantity(&mut self, requested: u32, resolved: Option<&Variant>) {
        if let Some(variant) = resolved {
            self.quantity = requested.clamp(1, variant.stock.max(1));
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}
