//! Entity escaping and attribute quoting

/// Escape character data for element content
///
/// Replaces `&`, `<` and `>` with their entity references. Quote characters
/// pass through untouched; they only need escaping inside attribute values.
pub fn escape_text(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            ch => result.push(ch),
        }
    }
    result
}

/// Quote an attribute value, delimiters included
///
/// Escapes `&`, `<`, `>` and the whitespace control characters, then picks
/// the delimiter: a value containing `"` but no `'` is wrapped in single
/// quotes as-is, anything else is wrapped in double quotes with embedded `"`
/// written as `&quot;`.
pub fn quote_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#9;"),
            ch => escaped.push(ch),
        }
    }

    if escaped.contains('"') {
        if escaped.contains('\'') {
            format!("\"{}\"", escaped.replace('"', "&quot;"))
        } else {
            format!("'{escaped}'")
        }
    } else {
        format!("\"{escaped}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text_passthrough() {
        assert_eq!(escape_text("plain text"), "plain text");
        assert_eq!(escape_text(""), "");
    }

    #[test]
    fn test_escape_text_entities() {
        assert_eq!(escape_text("a < b && b > c"), "a &lt; b &amp;&amp; b &gt; c");
    }

    #[test]
    fn test_escape_text_keeps_quotes() {
        assert_eq!(escape_text("'x&z'"), "'x&amp;z'");
        assert_eq!(escape_text("say \"hi\""), "say \"hi\"");
    }

    #[test]
    fn test_quote_attribute_plain() {
        assert_eq!(quote_attribute("baz"), "\"baz\"");
    }

    #[test]
    fn test_quote_attribute_entities() {
        assert_eq!(quote_attribute("a<b&c>d"), "\"a&lt;b&amp;c&gt;d\"");
        assert_eq!(quote_attribute("line\nbreak"), "\"line&#10;break\"");
        assert_eq!(quote_attribute("tab\there"), "\"tab&#9;here\"");
    }

    #[test]
    fn test_quote_attribute_switches_delimiter() {
        // a double quote alone flips the delimiter to single quotes
        assert_eq!(quote_attribute("say \"hi\""), "'say \"hi\"'");
    }

    #[test]
    fn test_quote_attribute_both_quote_kinds() {
        assert_eq!(
            quote_attribute("it's \"quoted\""),
            "\"it's &quot;quoted&quot;\""
        );
    }

    #[test]
    fn test_quote_attribute_single_quote_only() {
        assert_eq!(quote_attribute("it's"), "\"it's\"");
    }
}
