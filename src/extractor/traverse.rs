use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::extractor::dom::DomNode;

/// Attribute constraint of a [`PathStep`]: the attribute must exist and its
/// value must contain `contains` (case-sensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrFilter {
    pub name: &'static str,
    pub contains: &'static str,
}

/// One level of a traversal path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub tag: &'static str,
    pub attr: Option<AttrFilter>,
}

impl PathStep {
    /// Any element with this tag.
    pub const fn any(tag: &'static str) -> Self {
        Self { tag, attr: None }
    }

    pub const fn with(tag: &'static str, name: &'static str, contains: &'static str) -> Self {
        Self {
            tag,
            attr: Some(AttrFilter { name, contains }),
        }
    }

    pub fn matches(&self, node: &DomNode) -> bool {
        if node.tag() != Some(self.tag) {
            return false;
        }
        match self.attr {
            None => true,
            Some(filter) => node
                .attrs()
                .iter()
                .any(|(key, value)| key == filter.name && value.contains(filter.contains)),
        }
    }
}

impl Display for PathStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.attr {
            None => write!(f, "{}", self.tag),
            Some(filter) => write!(f, "{}[{}*={}]", self.tag, filter.name, filter.contains),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no child matching `{expected}` at step {step}")]
pub struct StepNotFound {
    pub step: usize,
    pub expected: PathStep,
}

/// First immediate child of `node` matching `step`, in document order.
/// Grandchildren are never considered.
pub fn search_children<'a>(node: &'a DomNode, step: &PathStep) -> Option<&'a DomNode> {
    node.children().iter().find(|child| step.matches(child))
}

/// Descends from `root` one step per level. Fails at the first step without a
/// match; there is no backtracking into sibling candidates.
pub fn traverse<'a>(root: &'a DomNode, steps: &[PathStep]) -> Result<&'a DomNode, StepNotFound> {
    steps.iter().enumerate().try_fold(root, |current, (step, expected)| {
        search_children(current, expected).ok_or(StepNotFound {
            step,
            expected: *expected,
        })
    })
}
