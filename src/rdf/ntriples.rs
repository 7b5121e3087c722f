//! Lenient N-Triples codec
//!
//! Fragments are parsed line by line. A statement is at least four
//! whitespace-separated tokens: subject, predicate, one or more object
//! tokens, and the terminating `.`. Anything shorter is dropped silently,
//! including blank lines. The object keeps its internal spacing so literal
//! sentences survive intact.

use super::namespace::{HYDRA_NEXT_PAGE, HYDRA_NS, VOID_NS};
use super::types::Triple;

/// Parse an `application/n-triples` body into triples, in document order.
pub fn parse_triples(text: &str) -> Vec<Triple> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Triple> {
    if line.split_whitespace().count() < 4 {
        return None;
    }

    let line = line.trim();
    let (subject, rest) = split_token(line)?;
    let (predicate, rest) = split_token(rest)?;

    // Drop the final token (normally the terminating ".")
    let (object, _) = rest.rsplit_once(char::is_whitespace)?;

    Some(Triple::new(subject, predicate, object.trim_end()))
}

fn split_token(s: &str) -> Option<(&str, &str)> {
    let (token, rest) = s.split_once(char::is_whitespace)?;
    Some((token, rest.trim_start()))
}

/// Decode a literal into plain display text.
///
/// `"Hi there"@en-US` becomes `Hi there`, `"5"^^<xsd:int>` becomes `5`.
/// Anything not starting with a quote (IRI references, already decoded
/// text) is returned unchanged, which makes decoding idempotent. A lone
/// opening quote with no closing one is also left as is.
pub fn decode_literal(term: &str) -> String {
    if !term.starts_with('"') {
        return term.to_string();
    }

    match term.rfind('"') {
        Some(last) if last > 0 => term[1..last].to_string(),
        _ => term.to_string(),
    }
}

/// Whether a triple describes hypermedia controls or dataset metadata
/// rather than domain data.
pub fn is_control_triple(triple: &Triple) -> bool {
    [HYDRA_NS, VOID_NS]
        .iter()
        .any(|ns| triple.predicate.contains(ns) || triple.object.contains(ns))
}

/// Whether a page advertises a following page.
pub fn has_next_page(triples: &[Triple]) -> bool {
    triples.iter().any(|t| t.predicate == HYDRA_NEXT_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_statement() {
        let triples = parse_triples(
            "<http://example.com/a/007> <http://example.com/o/name> \"Bond, James\"@en-UK .",
        );
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].subject, "<http://example.com/a/007>");
        assert_eq!(triples[0].predicate, "<http://example.com/o/name>");
        assert_eq!(triples[0].object, "\"Bond, James\"@en-UK");
    }

    #[test]
    fn test_blank_input() {
        assert!(parse_triples("").is_empty());
        assert!(parse_triples("\n").is_empty());
        assert!(parse_triples("\n\r\n   \n").is_empty());
    }

    #[test]
    fn test_short_lines_are_skipped() {
        let text = "<a> <b> \"c\"@en .\n<broken> <line> .\n<d> <e> <f> .\n";
        let triples = parse_triples(text);
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[0], Triple::new("<a>", "<b>", "\"c\"@en"));
        assert_eq!(triples[1], Triple::new("<d>", "<e>", "<f>"));
    }

    #[test]
    fn test_object_keeps_internal_spacing() {
        let triples = parse_triples("<a> <b> \"Hi  there, friend\"@en-US .\r\n");
        assert_eq!(triples[0].object, "\"Hi  there, friend\"@en-US");
    }

    #[test]
    fn test_decode_literal() {
        assert_eq!(decode_literal("\"Hello\""), "Hello");
        assert_eq!(decode_literal("\"Hello\"@en"), "Hello");
        assert_eq!(
            decode_literal("\"42\"^^<http://www.w3.org/2001/XMLSchema#int>"),
            "42"
        );
        assert_eq!(decode_literal("\"Bond, James\"@en-UK"), "Bond, James");
        assert_eq!(decode_literal("<http://x>"), "<http://x>");
        assert_eq!(decode_literal(""), "");
    }

    #[test]
    fn test_decode_is_idempotent() {
        for term in [
            "\"Hello\"@en",
            "<http://x>",
            "plain",
            "\"a \\\"b\\\" c\"",
            "",
            "\"",
            "\"\"\"",
            "\"unterminated",
        ] {
            let once = decode_literal(term);
            assert_eq!(decode_literal(&once), once);
        }
    }

    #[test]
    fn test_decode_unterminated_quote() {
        assert_eq!(decode_literal("\""), "\"");
        assert_eq!(decode_literal("\"\"\""), "\"");
        assert_eq!(decode_literal("\"unterminated"), "\"unterminated");
        assert_eq!(decode_literal("\"\""), "");
    }

    #[test]
    fn test_control_triples() {
        let next = Triple::new(
            "<http://x/tpf?page=1>",
            HYDRA_NEXT_PAGE,
            "<http://x/tpf?page=2>",
        );
        let count = Triple::new(
            "<http://x/tpf>",
            "<http://rdfs.org/ns/void#triples>",
            "\"12\"",
        );
        let typed = Triple::new(
            "<http://x/tpf>",
            "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>",
            "<http://www.w3.org/ns/hydra/core#Collection>",
        );
        let data = Triple::new("<http://x/a>", "<http://x/name>", "\"A\"");

        assert!(is_control_triple(&next));
        assert!(is_control_triple(&count));
        assert!(is_control_triple(&typed));
        assert!(!is_control_triple(&data));

        assert!(has_next_page(&[data.clone(), next]));
        assert!(!has_next_page(&[data, count]));
    }
}
