use ego_tree::{NodeRef, iter::Children};
use scraper::{Html, Node};

use crate::extractor::dom::DomNode;
use crate::fetcher::FetchError;

/// Turns markup into a read-only [`DomNode`] tree.
pub trait MarkupParser: Send + Sync {
    fn parse(&self, markup: &str) -> Result<DomNode, FetchError>;
}

/// html5ever-backed parser via `scraper`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperParser;

impl MarkupParser for ScraperParser {
    fn parse(&self, markup: &str) -> Result<DomNode, FetchError> {
        // html5ever synthesizes html/head/body for any input, so an empty
        // body would otherwise surface later as a confusing structure error.
        if markup.trim().is_empty() {
            return Err(FetchError::Parse("empty document".to_string()));
        }

        let document = Html::parse_document(markup);
        Ok(convert(document.tree.root()))
    }
}

/// Copies the arena tree into owned nodes. Depth is bounded only by the
/// input, so the walk keeps its own stack of open nodes.
fn convert(root: NodeRef<'_, Node>) -> DomNode {
    let mut open: Vec<(DomNode, Children<'_, Node>)> = vec![(shell(root), root.children())];

    loop {
        let Some((_, children)) = open.last_mut() else {
            return DomNode::Other;
        };

        match children.next() {
            Some(child) if child.has_children() => open.push((shell(child), child.children())),
            Some(child) => {
                if let Some((parent, _)) = open.last_mut() {
                    parent.push_child(shell(child));
                }
            }
            None => {
                let Some((done, _)) = open.pop() else {
                    return DomNode::Other;
                };
                match open.last_mut() {
                    Some((parent, _)) => parent.push_child(done),
                    None => return done,
                }
            }
        }
    }
}

/// The node itself, without children.
fn shell(node: NodeRef<'_, Node>) -> DomNode {
    match node.value() {
        Node::Document | Node::Fragment => DomNode::document(Vec::new()),
        Node::Element(element) => element
            .attrs()
            .fold(DomNode::element(element.name()), |node, (name, value)| {
                node.with_attr(name, value)
            }),
        Node::Text(text) => DomNode::text(&**text),
        _ => DomNode::Other,
    }
}
