//! HTML Walker: parse a document and stream its text segments.
//!
//! The document is parsed by `dom_query` (html5ever tree builder, so broken
//! markup is repaired the way browsers repair it) into an arena of nodes
//! addressed by id. The walker traverses that arena depth-first in document
//! order with an explicit worklist, emitting:
//!
//! - `VisibleText` for every non-blank text node that renders, and
//! - `AttributeText(kind)` for every whitelisted attribute value.
//!
//! ## Exclusion
//!
//! `<script>`, `<style>`, `<noscript>` and `<template>` subtrees never render.
//! Neither do elements carrying the `hidden` attribute or an inline
//! `display:none` / `visibility:hidden` style. Stylesheets are not consulted.
//! Comments are skipped. By default excluded subtrees are dropped entirely;
//! with `attributes_in_excluded` they are still walked for attribute text.
//!
//! Only an HTML `<title>` is the page title. A `<title>` inside `<svg>` or
//! `<math>` is walked like any other element.

use dom_query::{Document, NodeRef};
use tendril::StrTendril;
use tracing::trace;

use crate::options::AttributeRule;
use crate::patterns::HIDDEN_STYLE;
use crate::result::MetadataKind;
use crate::Options;

/// Elements whose content is never rendered.
pub const NON_RENDERING_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// `<meta>` attributes that name its content, in priority order.
///
/// `http-equiv` is left out: its content is a pragma value (`text/html;
/// charset=utf-8`, a refresh URL), not page text.
const META_KEY_ATTRIBUTES: &[&str] = &["name", "property", "itemprop"];

/// Roots of foreign (SVG, MathML) content, whose `<title>` is not the page title.
const FOREIGN_ROOTS: &[&str] = &["svg", "math"];

/// Origin of a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    /// Text rendered to the reader.
    VisibleText,

    /// Value of a whitelisted attribute or tag.
    AttributeText(MetadataKind),
}

/// One piece of document text, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: StrTendril,
}

impl Segment {
    fn visible(text: StrTendril) -> Self {
        Self {
            kind: SegmentKind::VisibleText,
            text,
        }
    }

    fn attribute(kind: MetadataKind, text: StrTendril) -> Self {
        Self {
            kind: SegmentKind::AttributeText(kind),
            text,
        }
    }
}

/// Traverses parsed HTML according to an attribute whitelist and exclusion policy.
#[derive(Debug, Clone, Copy)]
pub struct Walker<'o> {
    rules: &'o [AttributeRule],
    attributes_in_excluded: bool,
}

impl<'o> Walker<'o> {
    #[must_use]
    pub fn new(options: &'o Options) -> Self {
        Self {
            rules: &options.attribute_rules,
            attributes_in_excluded: options.attributes_in_excluded,
        }
    }

    /// Parse `html` and pass each segment to `visit`, in document order.
    ///
    /// Returns the number of segments produced.
    pub fn visit(&self, html: &str, mut visit: impl FnMut(Segment)) -> usize {
        let doc = Document::from(html);
        let mut produced = 0;
        let mut emit = |segment: Segment| {
            produced += 1;
            visit(segment);
        };

        // Worklist of (node, inside an excluded subtree, inside foreign
        // content). Children are pushed in reverse so they pop in document order.
        let mut stack: Vec<(NodeRef<'_>, bool, bool)> = vec![(doc.root(), false, false)];

        while let Some((node, excluded, foreign)) = stack.pop() {
            if node.is_text() {
                if !excluded {
                    let text = node.text();
                    if !text.trim().is_empty() {
                        emit(Segment::visible(text));
                    }
                }
                continue;
            }

            let mut excluded = excluded;
            let mut child_foreign = foreign;
            if node.is_element() {
                let Some(name) = node.node_name() else {
                    continue;
                };
                let tag = name.to_ascii_lowercase();

                if !excluded {
                    if let Some(reason) = exclusion_reason(&node, &tag) {
                        trace!(tag = %tag, reason, "excluding subtree");
                        excluded = true;
                    }
                }
                if excluded && !self.attributes_in_excluded {
                    continue;
                }

                self.collect_attributes(&node, &tag, &mut emit);

                // The document title is never rendered in the page body. SVG
                // and MathML titles are ordinary content.
                if tag == "title" && !foreign {
                    if !excluded && self.rules.contains(&AttributeRule::PageTitle) {
                        let text = node.text();
                        if !text.trim().is_empty() {
                            emit(Segment::attribute(MetadataKind::PageTitle, text));
                        }
                    }
                    continue;
                }

                if FOREIGN_ROOTS.contains(&tag.as_str()) {
                    child_foreign = true;
                } else if foreign && tag == "foreignobject" {
                    child_foreign = false;
                }
            }

            // Comments and doctypes have no children, so only the document
            // node and elements get this far with anything to push.
            stack.extend(
                node.children()
                    .into_iter()
                    .rev()
                    .map(|child| (child, excluded, child_foreign)),
            );
        }

        produced
    }

    /// Parse `html` and collect all segments.
    #[must_use]
    pub fn walk(&self, html: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        self.visit(html, |segment| segments.push(segment));
        segments
    }

    fn collect_attributes(&self, node: &NodeRef<'_>, tag: &str, emit: &mut impl FnMut(Segment)) {
        for rule in self.rules {
            match rule {
                AttributeRule::Attribute {
                    tag: wanted,
                    attribute,
                    kind,
                } => {
                    if wanted.as_deref().is_some_and(|wanted| wanted != tag) {
                        continue;
                    }
                    if let Some(value) = non_blank_attr(node, attribute) {
                        emit(Segment::attribute(kind.clone(), value));
                    }
                }
                AttributeRule::MetaContent => {
                    if tag != "meta" {
                        continue;
                    }
                    let key = META_KEY_ATTRIBUTES
                        .iter()
                        .find_map(|attr| non_blank_attr(node, attr));
                    if let (Some(key), Some(content)) = (key, non_blank_attr(node, "content")) {
                        let key = key.trim().to_ascii_lowercase();
                        emit(Segment::attribute(MetadataKind::Meta(key), content));
                    }
                }
                AttributeRule::PageTitle => {}
            }
        }
    }
}

/// Walk `html` with the whitelist and exclusion policy from `options`.
///
/// # Example
///
/// ```rust
/// use rs_cewlio::{walk, MetadataKind, Options, SegmentKind};
///
/// let segments = walk(r#"<p title="tip">Hello</p><script>var x;</script>"#, &Options::default());
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].kind, SegmentKind::AttributeText(MetadataKind::Title));
/// assert_eq!(&*segments[1].text, "Hello");
/// ```
#[must_use]
pub fn walk(html: &str, options: &Options) -> Vec<Segment> {
    Walker::new(options).walk(html)
}

/// Why `node` does not render, if it doesn't.
fn exclusion_reason(node: &NodeRef<'_>, tag: &str) -> Option<&'static str> {
    if NON_RENDERING_TAGS.contains(&tag) {
        return Some("non-rendering element");
    }
    if node.attr("hidden").is_some() {
        return Some("hidden attribute");
    }
    if node.attr("style").is_some_and(|style| HIDDEN_STYLE.is_match(&style)) {
        return Some("inline style");
    }
    None
}

fn non_blank_attr(node: &NodeRef<'_>, name: &str) -> Option<StrTendril> {
    node.attr(name).filter(|value| !value.trim().is_empty())
}
