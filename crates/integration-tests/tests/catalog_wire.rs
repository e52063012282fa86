//! Catalog JSON documents through validation and into the engine.
//!
//! Products reach the storefront as JSON. These tests parse realistic
//! documents, validate them at the boundary, and run the result through
//! a full page flow, plus the payloads the engine emits back out.

use prickly_pear_core::{CatalogError, ColorId, Product, SizeId};
use prickly_pear_selection::{PurchaseView, Selection, VariantIndex, cart_line};

const SHIRT_DOC: &str = r##"{
    "id": 100,
    "base_price": { "amount": "25.00", "currency_code": "USD" },
    "sizes": [
        { "id": 1, "code": "s", "label": "Small" },
        { "id": 2, "code": "m", "label": "Medium" }
    ],
    "colors": [
        { "id": 1, "code": "red", "label": "Red", "hex": "#c0392b" },
        { "id": 2, "code": "blue", "label": "Blue" }
    ],
    "variants": [
        {
            "id": 1,
            "size": { "id": 1, "code": "s", "label": "Small" },
            "color": { "id": 1, "code": "red", "label": "Red", "hex": "#c0392b" },
            "stock": 5
        },
        {
            "id": 2,
            "size": { "id": 2, "code": "m", "label": "Medium" },
            "color": { "id": 1, "code": "red", "label": "Red", "hex": "#c0392b" },
            "stock": 0
        },
        {
            "id": 3,
            "size": { "id": 1, "code": "s", "label": "Small" },
            "color": { "id": 2, "code": "blue", "label": "Blue" },
            "stock": 3,
            "price": { "amount": "27.50", "currency_code": "USD" }
        }
    ]
}"##;

// =============================================================================
// Parsing and Validation
// =============================================================================

#[test]
fn test_catalog_document_parses_and_validates() {
    let product: Product = serde_json::from_str(SHIRT_DOC).expect("document should parse");
    assert!(product.validate().is_ok());
    assert_eq!(product.variants.len(), 3);

    let premium = product
        .variants
        .iter()
        .find(|v| v.price.is_some())
        .expect("one variant carries its own price");
    assert_eq!(
        premium.price.expect("just checked").to_string(),
        "$27.50"
    );
}

#[test]
fn test_omitted_dimension_defaults_to_empty() {
    // A colors-only document simply leaves the sizes key out.
    let doc = r#"{
        "id": 200,
        "base_price": { "amount": "12.00", "currency_code": "USD" },
        "colors": [
            { "id": 1, "code": "red", "label": "Red" }
        ],
        "variants": [
            { "id": 1, "color": { "id": 1, "code": "red", "label": "Red" }, "stock": 2 }
        ]
    }"#;

    let product: Product = serde_json::from_str(doc).expect("document should parse");
    assert!(product.sizes.is_empty());
    assert!(product.validate().is_ok());
    assert!(PurchaseView::evaluate(&product, &Selection::new())
        .available_size_ids
        .is_empty());
}

#[test]
fn test_rejects_document_with_colliding_variants() {
    let doc = r#"{
        "id": 300,
        "base_price": { "amount": "9.00", "currency_code": "USD" },
        "sizes": [ { "id": 1, "code": "s", "label": "Small" } ],
        "variants": [
            { "id": 1, "size": { "id": 1, "code": "s", "label": "Small" }, "stock": 1 },
            { "id": 2, "size": { "id": 1, "code": "s", "label": "Small" }, "stock": 4 }
        ]
    }"#;

    let product: Product = serde_json::from_str(doc).expect("document should parse");
    assert!(matches!(
        product.validate(),
        Err(CatalogError::DuplicateVariant { .. })
    ));
}

#[test]
fn test_rejects_document_with_undeclared_size() {
    let doc = r#"{
        "id": 301,
        "base_price": { "amount": "9.00", "currency_code": "USD" },
        "sizes": [ { "id": 1, "code": "s", "label": "Small" } ],
        "variants": [
            { "id": 1, "size": { "id": 99, "code": "xl", "label": "XL" }, "stock": 1 }
        ]
    }"#;

    let product: Product = serde_json::from_str(doc).expect("document should parse");
    let err = product.validate().expect_err("validation should fail");
    assert!(matches!(err, CatalogError::UnknownSize { .. }));
    assert_eq!(
        err.to_string(),
        "variant 1 references size 99 not declared on the product"
    );
}

// =============================================================================
// A Parsed Document Through the Engine
// =============================================================================

#[test]
fn test_parsed_document_drives_a_full_page_flow() {
    let product: Product = serde_json::from_str(SHIRT_DOC).expect("document should parse");
    assert!(product.validate().is_ok());

    let index = VariantIndex::build(&product);
    let mut selection: Selection =
        serde_json::from_str(r#"{"quantity":0}"#).expect("client state should parse");
    assert_eq!(selection.quantity(), 1, "wire quantity is floored");

    selection.toggle_size(SizeId::new(1), &index);
    selection.toggle_color(ColorId::new(2), &index);

    let view = PurchaseView::evaluate(&product, &selection);
    assert!(view.can_order);
    assert_eq!(view.current_price.to_string(), "$27.50");

    let line = cart_line(&product, &selection).expect("S/blue is in stock");
    let payload = serde_json::to_string(&line).expect("line should serialize");
    assert_eq!(
        payload,
        r#"{"product_id":100,"variant_id":3,"quantity":1}"#
    );
}

#[test]
fn test_purchase_view_serializes_for_the_modal() {
    let product: Product = serde_json::from_str(SHIRT_DOC).expect("document should parse");
    let index = VariantIndex::build(&product);
    let mut selection = Selection::new();
    selection.toggle_color(ColorId::new(1), &index);

    let view = PurchaseView::evaluate(&product, &selection);
    let json = serde_json::to_value(&view).expect("view should serialize");

    assert_eq!(
        json.pointer("/available_size_ids"),
        Some(&serde_json::json!([1]))
    );
    assert_eq!(json.pointer("/can_order"), Some(&serde_json::json!(false)));
    assert_eq!(json.pointer("/resolved"), Some(&serde_json::Value::Null));
    assert_eq!(
        json.pointer("/units_available"),
        Some(&serde_json::Value::Null)
    );
    assert_eq!(
        json.pointer("/current_price/amount"),
        Some(&serde_json::json!("25.00"))
    );
}
