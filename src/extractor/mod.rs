pub mod dimensions;
pub mod dom;
pub mod errors;
pub mod layout;
pub mod model;
pub mod parser;
pub mod traverse;

#[cfg(test)]
mod tests;

pub use dimensions::{DIMENSION_SEPARATOR, DimensionError, parse_dimension};
pub use dom::DomNode;
pub use errors::ExtractionError;
pub use layout::{PageLayout, STORE_ITEM_LAYOUT_V1};
pub use model::{ProductRecord, Size};
pub use parser::{MarkupParser, ScraperParser};

use layout::LayoutPath;

const STICKER_MARKER: &str = "sticker";

/// Extracts a product record using the current store-item layout.
pub fn extract(root: &DomNode) -> Result<ProductRecord, ExtractionError> {
    extract_with_layout(root, &STORE_ITEM_LAYOUT_V1)
}

/// Runs the pipeline against an explicit layout version. Fails at the first
/// missing node; a non-sticker category is reported before image or size are
/// required.
pub fn extract_with_layout(
    root: &DomNode,
    layout: &PageLayout,
) -> Result<ProductRecord, ExtractionError> {
    // 1. Locate the product preview section
    let hero = locate(root, &layout.hero)?;

    // 2. Reject non-sticker products before reading anything else
    let category = locate(hero, &layout.category)?
        .text_content()
        .ok_or_else(|| missing_value(&layout.category, "text"))?;
    if !category.to_lowercase().contains(STICKER_MARKER) {
        return Err(ExtractionError::NotASticker {
            category: category.trim().to_string(),
        });
    }

    // 3. Image URL
    let image_url = locate(hero, &layout.image)?
        .attribute("src")
        .ok_or_else(|| missing_value(&layout.image, "attribute `src`"))?;

    // 4. Size
    let size_text = locate(hero, &layout.size)?
        .text_content()
        .ok_or_else(|| missing_value(&layout.size, "text"))?;
    let size = parse_dimension(size_text)?;

    Ok(ProductRecord {
        image_url: image_url.to_string(),
        size,
    })
}

fn locate<'a>(from: &'a DomNode, path: &LayoutPath) -> Result<&'a DomNode, ExtractionError> {
    traverse::traverse(from, path.steps).map_err(|err| ExtractionError::StructureMismatch {
        path: path.name,
        step: err.step,
        expected: err.expected.to_string(),
    })
}

fn missing_value(path: &LayoutPath, what: &str) -> ExtractionError {
    ExtractionError::StructureMismatch {
        path: path.name,
        step: path.steps.len(),
        expected: what.to_string(),
    }
}
