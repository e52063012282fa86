//! Cart intents produced once a selection is ready to order.

use serde::{Deserialize, Serialize};

use crate::types::id::{ProductId, VariantId};

/// A request to add one product variant to a cart.
///
/// Produced by the order gate after a shopper's selection has resolved to
/// an in-stock variant; consumed by whatever cart backend the caller talks
/// to. Carrying the variant id (not the option picks) keeps the cart layer
/// ignorant of sizes and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineRequest {
    /// The product the line belongs to.
    pub product_id: ProductId,
    /// The exact variant to add.
    pub variant_id: VariantId,
    /// Units requested, at least 1.
    pub quantity: u32,
}
