//! Catalog product model: sizes, colors, and sellable variants.
//!
//! A [`Product`] declares the size and color dimensions it is sold in and
//! carries one [`Variant`] per concrete combination. Catalog documents are
//! validated once at the boundary with [`Product::validate`]; everything
//! downstream (the selection engine, cart building) assumes a product that
//! has already passed validation.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::id::{ColorId, ProductId, SizeId, VariantId};
use crate::types::price::Price;

/// Errors that can occur when validating a [`Product`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CatalogError {
    /// A variant references a size the product does not declare.
    #[error("variant {variant_id} references size {size_id} not declared on the product")]
    UnknownSize {
        /// The offending variant.
        variant_id: VariantId,
        /// The undeclared size.
        size_id: SizeId,
    },
    /// A variant references a color the product does not declare.
    #[error("variant {variant_id} references color {color_id} not declared on the product")]
    UnknownColor {
        /// The offending variant.
        variant_id: VariantId,
        /// The undeclared color.
        color_id: ColorId,
    },
    /// The product declares sizes but a variant carries none.
    #[error("variant {variant_id} has no size but the product declares sizes")]
    MissingSize {
        /// The offending variant.
        variant_id: VariantId,
    },
    /// The product declares colors but a variant carries none.
    #[error("variant {variant_id} has no color but the product declares colors")]
    MissingColor {
        /// The offending variant.
        variant_id: VariantId,
    },
    /// The same size id appears twice in the product's size list.
    #[error("size {size_id} is declared more than once")]
    DuplicateSize {
        /// The repeated size.
        size_id: SizeId,
    },
    /// The same color id appears twice in the product's color list.
    #[error("color {color_id} is declared more than once")]
    DuplicateColor {
        /// The repeated color.
        color_id: ColorId,
    },
    /// Two variants cover the same size/color combination.
    #[error("variants {first} and {second} cover the same size/color combination")]
    DuplicateVariant {
        /// The variant that claimed the combination first.
        first: VariantId,
        /// The variant that collided with it.
        second: VariantId,
    },
}

/// A size option a product is sold in (e.g. "S", "M", "38").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    /// Catalog-wide size identifier.
    pub id: SizeId,
    /// Short machine-friendly code (e.g. "m").
    pub code: String,
    /// Human-readable label shown in pickers (e.g. "Medium").
    pub label: String,
}

/// A color option a product is sold in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Catalog-wide color identifier.
    pub id: ColorId,
    /// Short machine-friendly code (e.g. "navy").
    pub code: String,
    /// Human-readable label shown in pickers (e.g. "Navy Blue").
    pub label: String,
    /// Optional CSS hex value for rendering a swatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

/// A concrete sellable combination of a product's options.
///
/// Variants are denormalized: each embeds the full [`Size`] and [`Color`]
/// it covers (when the product has those dimensions) so a variant can be
/// rendered without a lookup back into the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Catalog-wide variant identifier.
    pub id: VariantId,
    /// The size this variant covers, if the product is sold in sizes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    /// The color this variant covers, if the product is sold in colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Units currently on hand. Zero means sold out, not absent.
    pub stock: u32,
    /// Variant-specific price. `None` means the product's base price applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
}

impl Variant {
    /// The id of this variant's size, if it has one.
    #[must_use]
    pub fn size_id(&self) -> Option<SizeId> {
        self.size.as_ref().map(|s| s.id)
    }

    /// The id of this variant's color, if it has one.
    #[must_use]
    pub fn color_id(&self) -> Option<ColorId> {
        self.color.as_ref().map(|c| c.id)
    }

    /// The size/color combination this variant covers.
    ///
    /// Within a valid product this key is unique across variants.
    #[must_use]
    pub fn key(&self) -> (Option<SizeId>, Option<ColorId>) {
        (self.size_id(), self.color_id())
    }

    /// Whether at least one unit is on hand.
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// How a product's option dimensions are declared.
///
/// Derived from which of the size and color lists are non-empty; it decides
/// how many picks a shopper must make before a variant can be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductShape {
    /// No option dimensions; the product has a single variant.
    Neither,
    /// Sold in sizes only.
    SizesOnly,
    /// Sold in colors only.
    ColorsOnly,
    /// Sold in both sizes and colors.
    Both,
}

/// A catalog product with its declared options and sellable variants.
///
/// ## Invariants (after [`Product::validate`])
///
/// - Every variant's size and color are drawn from the declared lists.
/// - A variant carries a size exactly when the product declares sizes,
///   and a color exactly when the product declares colors.
/// - No two variants cover the same size/color combination.
///
/// ## Examples
///
/// ```
/// use prickly_pear_core::{CurrencyCode, Price, Product, ProductId, ProductShape};
/// use rust_decimal::Decimal;
///
/// let product = Product {
///     id: ProductId::new(1),
///     base_price: Price::new(Decimal::new(1999, 2), CurrencyCode::USD),
///     sizes: vec![],
///     colors: vec![],
///     variants: vec![],
/// };
/// assert_eq!(product.shape(), ProductShape::Neither);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-wide product identifier.
    pub id: ProductId,
    /// Price that applies when a variant has no price of its own.
    pub base_price: Price,
    /// Size options this product is sold in. Empty means not sized.
    #[serde(default)]
    pub sizes: Vec<Size>,
    /// Color options this product is sold in. Empty means not colored.
    #[serde(default)]
    pub colors: Vec<Color>,
    /// One variant per sellable size/color combination.
    pub variants: Vec<Variant>,
}

impl Product {
    /// Classify which option dimensions this product declares.
    #[must_use]
    pub fn shape(&self) -> ProductShape {
        match (self.sizes.is_empty(), self.colors.is_empty()) {
            (true, true) => ProductShape::Neither,
            (false, true) => ProductShape::SizesOnly,
            (true, false) => ProductShape::ColorsOnly,
            (false, false) => ProductShape::Both,
        }
    }

    /// Check the catalog invariants listed on [`Product`].
    ///
    /// Call this once when a product document enters the system; the
    /// selection engine does not re-validate.
    ///
    /// # Errors
    ///
    /// Returns the first violation found:
    /// - [`CatalogError::DuplicateSize`] / [`CatalogError::DuplicateColor`]
    ///   if a declared option id repeats
    /// - [`CatalogError::UnknownSize`] / [`CatalogError::UnknownColor`]
    ///   if a variant references an undeclared option
    /// - [`CatalogError::MissingSize`] / [`CatalogError::MissingColor`]
    ///   if a variant omits a declared dimension
    /// - [`CatalogError::DuplicateVariant`] if two variants cover the same
    ///   combination
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut size_ids = HashSet::with_capacity(self.sizes.len());
        for size in &self.sizes {
            if !size_ids.insert(size.id) {
                return Err(CatalogError::DuplicateSize { size_id: size.id });
            }
        }

        let mut color_ids = HashSet::with_capacity(self.colors.len());
        for color in &self.colors {
            if !color_ids.insert(color.id) {
                return Err(CatalogError::DuplicateColor { color_id: color.id });
            }
        }

        let mut claimed: HashMap<(Option<SizeId>, Option<ColorId>), VariantId> =
            HashMap::with_capacity(self.variants.len());
        for variant in &self.variants {
            if let Some(size) = &variant.size {
                if !size_ids.contains(&size.id) {
                    return Err(CatalogError::UnknownSize {
                        variant_id: variant.id,
                        size_id: size.id,
                    });
                }
            } else if !self.sizes.is_empty() {
                return Err(CatalogError::MissingSize {
                    variant_id: variant.id,
                });
            }

            if let Some(color) = &variant.color {
                if !color_ids.contains(&color.id) {
                    return Err(CatalogError::UnknownColor {
                        variant_id: variant.id,
                        color_id: color.id,
                    });
                }
            } else if !self.colors.is_empty() {
                return Err(CatalogError::MissingColor {
                    variant_id: variant.id,
                });
            }

            if let Some(first) = claimed.insert(variant.key(), variant.id) {
                return Err(CatalogError::DuplicateVariant {
                    first,
                    second: variant.id,
                });
            }
        }

        Ok(())
    }
}
