//! Escaping for device-supplied text that ends up inside raw markup.

/// Replace the HTML-significant characters of `input` with entities.
///
/// Only needed where markup is injected verbatim (the notification modal);
/// regular rsx text nodes are already inserted as plain text.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unescape(input: &str) -> String {
        input
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#039;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn should_escape_script_tag() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn should_escape_every_special_character() {
        let escaped = escape(r#"a & b < c > d " e ' f"#);
        assert_eq!(
            escaped,
            "a &amp; b &lt; c &gt; d &quot; e &#039; f"
        );
        for raw in ['<', '>', '"', '\''] {
            assert!(!escaped.contains(raw), "{raw} left unescaped");
        }
    }

    #[test]
    fn should_not_leave_bare_ampersands() {
        let escaped = escape("&&amp;<");
        let bare = escaped
            .match_indices('&')
            .filter(|(i, _)| {
                let rest = &escaped[*i..];
                !["&amp;", "&lt;", "&gt;", "&quot;", "&#039;"]
                    .iter()
                    .any(|entity| rest.starts_with(entity))
            })
            .count();
        assert_eq!(bare, 0);
    }

    #[test]
    fn should_restore_original_text_when_unescaped() {
        for sample in [
            "plain",
            "<b>bold</b>",
            "Tom & Jerry's \"show\"",
            "&lt; already escaped",
            "",
            "héllo <wörld>",
        ] {
            assert_eq!(unescape(&escape(sample)), sample);
        }
    }
}
