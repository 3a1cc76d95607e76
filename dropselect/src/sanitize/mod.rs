//! Whitelist-based label sanitization.
//!
//! Sanitizing is a pure pass over a parsed [`Fragment`]:
//!
//! - allowed elements keep only whitelisted attributes and are sanitized
//!   recursively;
//! - any other element is replaced by a text node holding its text content.
//!
//! Parsing and serialization sit behind [`MarkupCodec`] so the pass can run
//! on trees from any source. The output of [`sanitize`] is stable: feeding it
//! back in yields the same string.

mod parse;
mod serialize;
mod tree;
mod whitelist;

use std::fmt;
use std::sync::Arc;

pub use parse::parse_fragment;
pub use serialize::{escape_attr, escape_text, to_html};
pub use tree::{Attribute, Element, Fragment, Node};
pub use whitelist::{GLOBAL, Whitelist};

/// Conversion between markup strings and trees.
pub trait MarkupCodec {
    fn parse(&self, input: &str) -> Fragment;
    fn serialize(&self, fragment: &Fragment) -> String;
}

/// The built-in lenient HTML fragment codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlCodec;

impl MarkupCodec for HtmlCodec {
    fn parse(&self, input: &str) -> Fragment {
        parse_fragment(input)
    }

    fn serialize(&self, fragment: &Fragment) -> String {
        to_html(fragment)
    }
}

/// Sanitize a parsed fragment against `whitelist`.
pub fn sanitize_fragment(fragment: Fragment, whitelist: &Whitelist) -> Fragment {
    Fragment::new(sanitize_children(fragment.nodes, whitelist))
}

fn sanitize_children(nodes: Vec<Node>, whitelist: &Whitelist) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Node::Element(element) if whitelist.allows_tag(&element.tag) => {
                out.push(Node::Element(sanitize_element(element, whitelist)));
            }
            Node::Element(element) => {
                log::trace!("sanitize: unwrapping <{}>", element.tag);
                tree::push_text(&mut out, &element.text_content());
            }
            Node::Text(text) => tree::push_text(&mut out, &text),
        }
    }
    out
}

fn sanitize_element(mut element: Element, whitelist: &Whitelist) -> Element {
    let tag = &element.tag;
    element
        .attrs
        .retain(|attr| whitelist.allows_attr(tag, &attr.name));
    element.children = sanitize_children(std::mem::take(&mut element.children), whitelist);
    element
}

/// Sanitize an HTML string with the built-in codec.
pub fn sanitize(html: &str, whitelist: &Whitelist) -> String {
    Sanitizer::new(whitelist.clone()).sanitize(html)
}

/// A codec and whitelist bundled for repeated use.
#[derive(Debug, Clone, Default)]
pub struct Sanitizer<C: MarkupCodec = HtmlCodec> {
    codec: C,
    whitelist: Whitelist,
}

impl Sanitizer {
    pub fn new(whitelist: Whitelist) -> Self {
        Self::with_codec(HtmlCodec, whitelist)
    }
}

impl<C: MarkupCodec> Sanitizer<C> {
    pub fn with_codec(codec: C, whitelist: Whitelist) -> Self {
        Self { codec, whitelist }
    }

    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    pub fn parse(&self, input: &str) -> Fragment {
        self.codec.parse(input)
    }

    /// Parse, sanitize and serialize `html`.
    pub fn sanitize(&self, html: &str) -> String {
        let fragment = sanitize_fragment(self.codec.parse(html), &self.whitelist);
        self.codec.serialize(&fragment)
    }

    /// Text content of `html` with all markup removed.
    pub fn plain_text(&self, html: &str) -> String {
        self.codec.parse(html).text_content()
    }
}

/// Host-supplied replacement for the built-in sanitizing pass.
///
/// Receives the parsed label and returns the markup to render.
#[derive(Clone)]
pub struct CustomSanitizer(Arc<dyn Fn(&Fragment) -> String + Send + Sync>);

impl CustomSanitizer {
    pub fn new(f: impl Fn(&Fragment) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, fragment: &Fragment) -> String {
        (self.0)(fragment)
    }
}

impl fmt::Debug for CustomSanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomSanitizer(..)")
    }
}
