//! Entity references supported in text content.
//!
//! Only `&lt;`, `&gt;` and `&amp;` are recognized. Anything else starting
//! with `&` (numeric references, `&quot;`, a bare ampersand) is kept as is.

const ENTITIES: [(&str, char); 3] = [("&lt;", '<'), ("&gt;", '>'), ("&amp;", '&')];

/// Resolve entity references in a single left-to-right pass.
///
/// Characters produced by a replacement are never re-read, so `&amp;gt;`
/// becomes `&gt;`, not `>`.
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(idx) = rest.find('&') {
        let (before, tail) = rest.split_at(idx);
        out.push_str(before);

        let consumed = match ENTITIES.iter().find(|(entity, _)| tail.starts_with(entity)) {
            Some((entity, ch)) => {
                out.push(*ch);
                entity.len()
            }
            None => {
                out.push('&');
                1
            }
        };
        rest = tail.get(consumed..).unwrap_or_default();
    }

    out.push_str(rest);
    out
}

/// Inverse of [`unescape`] for text content
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_known_entities() {
        assert_eq!(unescape("TS &gt; JS"), "TS > JS");
        assert_eq!(unescape("TS&lt; JS"), "TS< JS");
        assert_eq!(unescape("a &amp; b"), "a & b");
    }

    #[test]
    fn test_unescape_is_single_pass() {
        assert_eq!(unescape("TS &amp;&gt; JS"), "TS &> JS");
        assert_eq!(unescape("&amp;gt;"), "&gt;");
        assert_eq!(unescape("&amp;amp;"), "&amp;");
    }

    #[test]
    fn test_unknown_references_pass_through() {
        assert_eq!(unescape("&quot;&apos;&#60;"), "&quot;&apos;&#60;");
        assert_eq!(unescape("fish & chips &"), "fish & chips &");
        assert_eq!(unescape("&lt"), "&lt");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(unescape(&escape("&lt; <tag> &")), "&lt; <tag> &");
    }
}
