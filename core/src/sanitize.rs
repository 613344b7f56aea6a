//! Plain-text extraction from the registry's free-text fields.
//!
//! # Design
//! Descriptions arrive as arbitrary HTML, sometimes carrying scripts,
//! tracker images and inline styling. The input is parsed as a real
//! fragment in a non-executing context; subtrees of elements that run code
//! or load external resources are dropped outright, so their attributes
//! (event handlers, `src`, `srcset`, inline styles) never reach the output.
//! html5ever decodes entity references during parsing. Surviving text is
//! joined and whitespace runs — non-breaking spaces included — collapse to
//! single ASCII spaces.

use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Elements whose entire subtree is dropped.
const BLOCKED: [&str; 6] = ["script", "style", "img", "iframe", "object", "embed"];

/// Reduce possibly-HTML input to trimmed plain text. `None` and markup
/// that leaves no text both come out as the empty string.
pub fn sanitize(input: Option<&str>) -> String {
    let raw = match input {
        Some(s) if !s.is_empty() => s,
        _ => return String::new(),
    };

    let fragment = Html::parse_fragment(raw);
    let mut text = String::new();
    collect_text(fragment.tree.root(), &mut text);
    squash_whitespace(&text)
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Element(element) if BLOCKED.contains(&element.name()) => return,
        Node::Text(text) => out.push_str(&text),
        _ => {}
    }
    for child in node.children() {
        collect_text(child, out);
    }
}

/// Collapse whitespace runs (ASCII and U+00A0 alike) to single spaces.
fn squash_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Split a comma/pipe/semicolon/slash-separated registry field into
/// trimmed, non-empty parts. Several free-text fields (breed lists, color
/// lists) arrive in this loosely delimited form.
pub fn split_list_field(field: Option<&str>) -> Vec<String> {
    match field {
        Some(s) => s
            .split(|c| matches!(c, ',' | '|' | ';' | '/'))
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_subtree_is_dropped() {
        assert_eq!(sanitize(Some("<script>alert(1)</script>Hello")), "Hello");
    }

    #[test]
    fn style_image_and_frame_subtrees_are_dropped() {
        let input = r#"<style>p { color: red }</style><p onclick="track()">Good <b>dog</b></p><img src="pixel.gif"><iframe src="x"></iframe>"#;
        assert_eq!(sanitize(Some(input)), "Good dog");
    }

    #[test]
    fn object_and_embed_are_dropped() {
        let input = "<object data=\"a.swf\">fallback</object><embed src=\"b.swf\">Meet Rex";
        assert_eq!(sanitize(Some(input)), "Meet Rex");
    }

    #[test]
    fn entities_decode_to_plain_text() {
        assert_eq!(sanitize(Some("Fluffy &amp; Rex &gt; all")), "Fluffy & Rex > all");
    }

    #[test]
    fn nbsp_runs_collapse_and_trailing_space_trims() {
        assert_eq!(sanitize(Some("Line1\u{a0}\u{a0}Line2   ")), "Line1 Line2");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(sanitize(Some("already plain")), "already plain");
    }

    #[test]
    fn absent_and_empty_input_yield_empty_string() {
        assert_eq!(sanitize(None), "");
        assert_eq!(sanitize(Some("")), "");
        assert_eq!(sanitize(Some("<p></p>")), "");
    }

    #[test]
    fn list_fields_split_on_any_delimiter() {
        assert_eq!(
            split_list_field(Some("Terrier, Beagle|Hound;Lab/ Mix")),
            vec!["Terrier", "Beagle", "Hound", "Lab", "Mix"]
        );
    }

    #[test]
    fn blank_list_fields_are_empty() {
        assert!(split_list_field(None).is_empty());
        assert!(split_list_field(Some(" , ; ")).is_empty());
    }
}
