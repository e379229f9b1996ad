use std::fs;

use crate::extractor::{
    DimensionError, DomNode, ExtractionError, MarkupParser, ProductRecord, ScraperParser, Size,
    extract,
};

const IMAGE_SRC: &str = "https://images.example-cdn.com/store-item/1/art.png";

fn div(class: &str) -> DomNode {
    DomNode::element("div").with_attr("class", class)
}

fn test_id(id: &str) -> DomNode {
    DomNode::element("div").with_attr("data-testid", id)
}

fn preview(src: &str) -> DomNode {
    div("preview").with_child(
        div("artwork").with_child(DomNode::element("img").with_attr("src", src)),
    )
}

fn subheading(category: &str) -> DomNode {
    div("subheading").with_child(div("textContent").with_child(DomNode::text(category)))
}

fn buying_options(size: &str) -> DomNode {
    div("buyingOptions").with_child(
        test_id("StoreItemBuyingOptions").with_child(
            test_id("profileReorderProductSizeText").with_child(
                div("sizeHelpContainer").with_child(
                    DomNode::element("p")
                        .with_attr("class", "regular")
                        .with_child(DomNode::text(size)),
                ),
            ),
        ),
    )
}

fn right_column(category: &str, size: &str) -> DomNode {
    div("rightColumnContent")
        .with_child(subheading(category))
        .with_child(buying_options(size))
}

/// Wraps the hero `wrapper` div in the page chrome down to the hero section.
fn page(wrapper: DomNode) -> DomNode {
    let hero = DomNode::element("section")
        .with_attr("data-testid", "StoreItemProductPreviewHero")
        .with_child(wrapper);

    DomNode::document(vec![
        DomNode::Other,
        DomNode::element("html")
            .with_child(DomNode::element("head"))
            .with_child(
                DomNode::element("body").with_child(
                    DomNode::element("div").with_attr("id", "__next").with_child(
                        div("layout").with_child(
                            div("main").with_child(DomNode::element("main").with_child(hero)),
                        ),
                    ),
                ),
            ),
    ])
}

fn store_page(category: &str, size: &str) -> DomNode {
    page(
        div("wrapper")
            .with_child(preview(IMAGE_SRC))
            .with_child(right_column(category, size)),
    )
}

fn assert_mismatch(result: Result<ProductRecord, ExtractionError>, path: &str, step: usize) {
    match result {
        Err(ExtractionError::StructureMismatch {
            path: actual_path,
            step: actual_step,
            ..
        }) => {
            assert_eq!(actual_path, path);
            assert_eq!(actual_step, step);
        }
        other => panic!("expected structure mismatch in {path} at {step}, got {other:?}"),
    }
}

#[test]
fn test_extract_sticker_page() {
    let record = extract(&store_page("Sticker", "4 × 4 in")).unwrap();

    assert_eq!(
        record,
        ProductRecord {
            image_url: IMAGE_SRC.to_string(),
            size: Size {
                width: 4.0,
                height: 4.0
            },
        }
    );
}

#[test]
fn test_category_match_is_case_insensitive() {
    assert!(extract(&store_page("DIE CUT STICKERS", "2 × 3 in")).is_ok());
}

#[test]
fn test_magnet_is_rejected() {
    let err = extract(&store_page("Magnet", "4 × 4 in")).unwrap_err();
    match err {
        ExtractionError::NotASticker { category } => assert_eq!(category, "Magnet"),
        other => panic!("expected NotASticker, got {other:?}"),
    }
}

#[test]
fn test_rejection_wins_over_broken_image_and_size() {
    // No preview block and an unparsable size: the category decides first.
    let tree = page(div("wrapper").with_child(right_column("Button", "big")));
    assert!(matches!(
        extract(&tree),
        Err(ExtractionError::NotASticker { .. })
    ));
}

#[test]
fn test_missing_image_ancestors_name_the_step() {
    let without_preview = page(div("wrapper").with_child(right_column("Sticker", "1 × 1")));
    assert_mismatch(extract(&without_preview), "image", 1);

    let without_artwork = page(
        div("wrapper")
            .with_child(div("preview"))
            .with_child(right_column("Sticker", "1 × 1")),
    );
    assert_mismatch(extract(&without_artwork), "image", 2);

    let without_img = page(
        div("wrapper")
            .with_child(div("preview").with_child(div("artwork")))
            .with_child(right_column("Sticker", "1 × 1")),
    );
    assert_mismatch(extract(&without_img), "image", 3);
}

#[test]
fn test_image_without_src_is_a_mismatch() {
    let tree = page(
        div("wrapper")
            .with_child(div("preview").with_child(
                div("artwork").with_child(DomNode::element("img").with_attr("data-src", IMAGE_SRC)),
            ))
            .with_child(right_column("Sticker", "1 × 1")),
    );
    assert_mismatch(extract(&tree), "image", 4);
}

#[test]
fn test_missing_hero_section() {
    let tree = DomNode::document(vec![
        DomNode::element("html").with_child(
            DomNode::element("body").with_child(
                DomNode::element("div").with_attr("id", "__next").with_child(
                    div("layout").with_child(div("main").with_child(DomNode::element("main"))),
                ),
            ),
        ),
    ]);
    assert_mismatch(extract(&tree), "hero", 6);
}

#[test]
fn test_empty_document() {
    assert_mismatch(extract(&DomNode::document(vec![])), "hero", 0);
}

#[test]
fn test_missing_category_text() {
    let tree = page(
        div("wrapper").with_child(preview(IMAGE_SRC)).with_child(
            div("rightColumnContent")
                .with_child(div("subheading").with_child(div("textContent")))
                .with_child(buying_options("4 × 4 in")),
        ),
    );
    assert_mismatch(extract(&tree), "category", 4);
}

#[test]
fn test_missing_size_block() {
    let tree = page(
        div("wrapper")
            .with_child(preview(IMAGE_SRC))
            .with_child(div("rightColumnContent").with_child(subheading("Sticker"))),
    );
    assert_mismatch(extract(&tree), "size", 2);
}

#[test]
fn test_malformed_size_is_a_format_error() {
    let err = extract(&store_page("Sticker", "4 x 4 in")).unwrap_err();
    match err {
        ExtractionError::DimensionFormat(inner) => {
            assert!(matches!(inner, DimensionError::FieldCount { .. }));
            assert_eq!(inner.raw(), "4 x 4 in");
        }
        other => panic!("expected DimensionFormat, got {other:?}"),
    }
}

#[test]
fn test_extract_fixture_page() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/store_item.html")
        .expect("Failed to read test fixture");

    let root = ScraperParser.parse(&html).unwrap();
    let record = extract(&root).unwrap();

    assert_eq!(
        record.image_url,
        "https://images.example-cdn.com/store-item/14880828/retro-cat.png"
    );
    assert_eq!(
        record.size,
        Size {
            width: 3.0,
            height: 2.5
        }
    );
}

#[test]
fn test_fixture_page_with_other_category() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/store_item.html")
        .expect("Failed to read test fixture")
        .replace("Die cut stickers", "Rectangle magnets");

    let root = ScraperParser.parse(&html).unwrap();
    assert!(matches!(
        extract(&root),
        Err(ExtractionError::NotASticker { .. })
    ));
}

#[test]
fn test_fixture_page_after_layout_change() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/store_item.html")
        .expect("Failed to read test fixture")
        .replace("_artwork__", "_gallery__");

    let root = ScraperParser.parse(&html).unwrap();
    assert_mismatch(extract(&root), "image", 2);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            if let Ok(root) = ScraperParser.parse(&html) {
                let _ = extract(&root);
            }
        }

        #[test]
        fn test_non_sticker_categories_rejected(category in "[a-z ]{1,24}") {
            prop_assume!(!category.contains("sticker"));
            let result = extract(&store_page(&category, "1 × 1 in"));
            prop_assert!(
                matches!(result, Err(ExtractionError::NotASticker { .. })),
                "unexpected result: {:?}",
                result
            );
        }
    }
}
