//! Shared catalog fixtures.
//!
//! Every builder returns a product that passes
//! [`Product::validate`](prickly_pear_core::Product::validate); tests that
//! need a malformed document build it inline.

use prickly_pear_core::{
    Color, ColorId, CurrencyCode, Price, Product, ProductId, Size, SizeId, Variant, VariantId,
};

/// Size "S" on the `shirt` and `socks` fixtures.
pub const SIZE_S: SizeId = SizeId::new(1);
/// Size "M" on the `shirt` and `socks` fixtures.
pub const SIZE_M: SizeId = SizeId::new(2);
/// Color "red" on the `shirt` and `poster` fixtures.
pub const COLOR_RED: ColorId = ColorId::new(1);
/// Color "blue" on the `shirt` and `poster` fixtures.
pub const COLOR_BLUE: ColorId = ColorId::new(2);

/// A size option with a derived label.
#[must_use]
pub fn size(id: SizeId, code: &str, label: &str) -> Size {
    Size {
        id,
        code: code.to_owned(),
        label: label.to_owned(),
    }
}

/// A color option without a swatch hex.
#[must_use]
pub fn color(id: ColorId, code: &str, label: &str) -> Color {
    Color {
        id,
        code: code.to_owned(),
        label: label.to_owned(),
        hex: None,
    }
}

/// A variant at the product's base price.
#[must_use]
pub fn variant(id: i64, size: Option<Size>, color: Option<Color>, stock: u32) -> Variant {
    Variant {
        id: VariantId::new(id),
        size,
        color,
        stock,
        price: None,
    }
}

/// A USD price from cents.
#[must_use]
pub fn usd(cents: i64) -> Price {
    Price::from_cents(cents, CurrencyCode::USD)
}

/// Two sizes (S, M) by two colors (red, blue), base price $25.00.
///
/// In stock: (S, red) at the base price and (S, blue) at $27.50.
/// Sold out: (M, red). The (M, blue) combination does not exist.
#[must_use]
pub fn shirt() -> Product {
    let s = || size(SIZE_S, "s", "Small");
    let m = || size(SIZE_M, "m", "Medium");
    let red = || color(COLOR_RED, "red", "Red");
    let blue = || color(COLOR_BLUE, "blue", "Blue");
    Product {
        id: ProductId::new(100),
        base_price: usd(2500),
        sizes: vec![s(), m()],
        colors: vec![red(), blue()],
        variants: vec![
            variant(1, Some(s()), Some(red()), 5),
            variant(2, Some(m()), Some(red()), 0),
            Variant {
                price: Some(usd(2750)),
                ..variant(3, Some(s()), Some(blue()), 3)
            },
        ],
    }
}

/// Colors only (red, blue), base price $12.00.
///
/// Red has 2 units; blue is sold out.
#[must_use]
pub fn poster() -> Product {
    let red = || color(COLOR_RED, "red", "Red");
    let blue = || color(COLOR_BLUE, "blue", "Blue");
    Product {
        id: ProductId::new(200),
        base_price: usd(1200),
        sizes: vec![],
        colors: vec![red(), blue()],
        variants: vec![
            variant(1, None, Some(red()), 2),
            variant(2, None, Some(blue()), 0),
        ],
    }
}

/// Sizes only (S, M), base price $9.00.
///
/// S is sold out; M has 8 units.
#[must_use]
pub fn socks() -> Product {
    let s = || size(SIZE_S, "s", "Small");
    let m = || size(SIZE_M, "m", "Medium");
    Product {
        id: ProductId::new(300),
        base_price: usd(900),
        sizes: vec![s(), m()],
        colors: vec![],
        variants: vec![
            variant(1, Some(s()), None, 0),
            variant(2, Some(m()), None, 8),
        ],
    }
}

/// No options at all: one variant with 12 units, base price $14.00.
#[must_use]
pub fn mug() -> Product {
    Product {
        id: ProductId::new(400),
        base_price: usd(1400),
        sizes: vec![],
        colors: vec![],
        variants: vec![variant(1, None, None, 12)],
    }
}
