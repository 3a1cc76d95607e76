//! HTML fragment parsing through html5ever.
//!
//! Input is parsed the way a browser parses `innerHTML` in a `<body>`
//! context, then the resulting DOM is converted once into a [`Fragment`].
//! Comments, doctypes and processing instructions are dropped.

use html5ever::tendril::TendrilSink;
use html5ever::{LocalName, Namespace, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use super::tree::{Attribute, Element, Fragment, Node, push_text};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Parse `input` into a fragment. Never fails.
pub fn parse_fragment(input: &str) -> Fragment {
    let context = QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from("body"));
    let dom = html5ever::parse_fragment(RcDom::default(), ParseOpts::default(), context, Vec::new())
        .one(input);

    // The fragment parser hangs its output off a synthetic <html> root.
    let mut nodes = Vec::new();
    for root in dom.document.children.borrow().iter() {
        convert_children(root, &mut nodes);
    }
    Fragment::new(nodes)
}

fn convert_children(handle: &Handle, out: &mut Vec<Node>) {
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => push_text(out, &contents.borrow()),
            NodeData::Element { name, attrs, .. } => {
                let mut element = Element::new(name.local.to_string());
                element.attrs = attrs
                    .borrow()
                    .iter()
                    .map(|attr| Attribute::new(attr.name.local.to_string(), attr.value.to_string()))
                    .collect();
                convert_children(child, &mut element.children);
                out.push(Node::Element(element));
            }
            NodeData::Document
            | NodeData::Doctype { .. }
            | NodeData::Comment { .. }
            | NodeData::ProcessingInstruction { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_only() {
        let fragment = parse_fragment("plain text");
        assert_eq!(fragment.nodes, vec![Node::Text("plain text".into())]);
    }

    #[test]
    fn test_nested_elements_and_attrs() {
        let fragment = parse_fragment(r#"<SPAN Class="x" data-a='1' hidden>a<b>b</b></SPAN>"#);
        let expected = Element::new("span")
            .attr("class", "x")
            .attr("data-a", "1")
            .attr("hidden", "")
            .child("a")
            .child(Element::new("b").child("b"));
        assert_eq!(fragment.nodes, vec![Node::Element(expected)]);
    }

    #[test]
    fn test_duplicate_attribute_keeps_first() {
        let fragment = parse_fragment(r#"<i id="a" id="b"></i>"#);
        assert_eq!(fragment.nodes, vec![Node::Element(Element::new("i").attr("id", "a"))]);
    }

    #[test]
    fn test_void_elements_take_no_children() {
        let fragment = parse_fragment("<br>after");
        assert_eq!(
            fragment.nodes,
            vec![Node::Element(Element::new("br")), Node::Text("after".into())]
        );
    }

    #[test]
    fn test_implied_end_tags() {
        let fragment = parse_fragment("<ul><li>one<li>two</ul>");
        let expected = Element::new("ul")
            .child(Element::new("li").child("one"))
            .child(Element::new("li").child("two"));
        assert_eq!(fragment.nodes, vec![Node::Element(expected)]);
    }

    #[test]
    fn test_block_closes_paragraph() {
        let fragment = parse_fragment("<p>a<div>b</div>c</p>");
        assert_eq!(
            fragment.nodes,
            vec![
                Element::new("p").child("a").into(),
                Element::new("div").child("b").into(),
                Node::Text("c".into()),
                Element::new("p").into(),
            ]
        );
    }

    #[test]
    fn test_stray_end_tag_is_ignored() {
        let fragment = parse_fragment("a</span>b");
        assert_eq!(fragment.nodes, vec![Node::Text("ab".into())]);
    }

    #[test]
    fn test_script_content_is_raw() {
        let fragment = parse_fragment("<script>if (a<b) {}</script>");
        let expected = Element::new("script").child("if (a<b) {}");
        assert_eq!(fragment.nodes, vec![Node::Element(expected)]);
    }

    #[test]
    fn test_comments_are_dropped() {
        let fragment = parse_fragment("a<!-- hidden -->b");
        assert_eq!(fragment.nodes, vec![Node::Text("ab".into())]);
    }

    #[test]
    fn test_lone_angle_bracket_is_text() {
        let fragment = parse_fragment("1 < 2");
        assert_eq!(fragment.nodes, vec![Node::Text("1 < 2".into())]);
    }

    #[test]
    fn test_unterminated_tag_is_dropped() {
        let fragment = parse_fragment("ok<span class=");
        assert_eq!(fragment.nodes, vec![Node::Text("ok".into())]);
    }

    #[test]
    fn test_entities_are_decoded() {
        let fragment = parse_fragment("a &amp; b &lt;c&gt; &#65;&#x42;");
        assert_eq!(fragment.nodes, vec![Node::Text("a & b <c> AB".into())]);
    }
}
