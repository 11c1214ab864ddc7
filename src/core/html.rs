// src/core/html.rs
// Low-level HTML scanning helpers, deliberately naive but tolerant.
// Tag matching is case-insensitive on ASCII.

/// Fast ASCII-only lowercasing for tag matching.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Collect the inline `<script>` bodies of a document, in document order,
/// trimmed, with empty bodies dropped (include-only tags like
/// `<script src=…></script>` contribute nothing).
///
/// Script content is raw text: a `<` inside the body does not end the
/// element; only the closing tag does. An unterminated script tag ends the
/// scan rather than failing, like the rest of the scraper's best-effort
/// matching.
pub fn extract_script_blocks(doc: &str) -> Vec<String> {
    let lc = to_lower(doc);
    let mut scripts: Vec<String> = Vec::new();

    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find("<script") {
        let start = pos + rel;
        let after_name = start + "<script".len();

        // Reject lookalike tags (e.g. a hypothetical <scripted>)
        match lc.as_bytes().get(after_name) {
            Some(b'>') | Some(b'/') => {}
            Some(c) if c.is_ascii_whitespace() => {}
            _ => {
                pos = after_name;
                continue;
            }
        }

        // End of the opening tag
        let Some(open_end) = doc[start..].find('>').map(|p| start + p + 1) else {
            break;
        };

        // Everything up to the closing tag is the body
        let Some(close) = lc[open_end..].find("</script").map(|p| open_end + p) else {
            break;
        };

        let body = doc[open_end..close].trim();
        if !body.is_empty() {
            scripts.push(s!(body));
        }
        pos = close + "</script".len();
    }

    scripts
}
