//! Structural contract with the store-item page markup.
//!
//! Each path is resolved with [`traverse`](crate::extractor::traverse::traverse).
//! When the site changes its markup, add a new layout version here instead of
//! editing the pipeline.

use crate::extractor::traverse::PathStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPath {
    pub name: &'static str,
    pub steps: &'static [PathStep],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub version: &'static str,
    /// From the document root to the product preview section.
    pub hero: LayoutPath,
    // The paths below start at the hero section.
    pub category: LayoutPath,
    pub image: LayoutPath,
    pub size: LayoutPath,
}

pub const STORE_ITEM_LAYOUT_V1: PageLayout = PageLayout {
    version: "store-item/v1",
    hero: LayoutPath {
        name: "hero",
        steps: &[
            PathStep::any("html"),
            PathStep::any("body"),
            PathStep::with("div", "id", "__next"),
            PathStep::with("div", "class", "layout"),
            PathStep::with("div", "class", "main"),
            PathStep::any("main"),
            PathStep::with("section", "data-testid", "StoreItemProductPreviewHero"),
        ],
    },
    category: LayoutPath {
        name: "category",
        steps: &[
            PathStep::with("div", "class", "wrapper"),
            PathStep::with("div", "class", "rightColumnContent"),
            PathStep::with("div", "class", "subheading"),
            PathStep::with("div", "class", "textContent"),
        ],
    },
    image: LayoutPath {
        name: "image",
        steps: &[
            PathStep::with("div", "class", "wrapper"),
            PathStep::with("div", "class", "preview"),
            PathStep::with("div", "class", "artwork"),
            PathStep::any("img"),
        ],
    },
    size: LayoutPath {
        name: "size",
        steps: &[
            PathStep::with("div", "class", "wrapper"),
            PathStep::with("div", "class", "rightColumnContent"),
            PathStep::with("div", "class", "buyingOptions"),
            PathStep::with("div", "data-testid", "StoreItemBuyingOptions"),
            PathStep::with("div", "data-testid", "profileReorderProductSizeText"),
            PathStep::with("div", "class", "sizeHelpContainer"),
            PathStep::with("p", "class", "regular"),
        ],
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v1_path_depths() {
        let layout = STORE_ITEM_LAYOUT_V1;
        assert_eq!(layout.version, "store-item/v1");
        assert_eq!(layout.hero.steps.len(), 7);
        assert_eq!(layout.category.steps.len(), 4);
        assert_eq!(layout.image.steps.len(), 4);
        assert_eq!(layout.size.steps.len(), 7);
    }

    #[test]
    fn test_v1_leaves() {
        let layout = STORE_ITEM_LAYOUT_V1;
        assert_eq!(layout.image.steps.last(), Some(&PathStep::any("img")));
        assert_eq!(
            layout.size.steps.last(),
            Some(&PathStep::with("p", "class", "regular"))
        );
    }
}
