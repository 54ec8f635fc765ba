//! Template normalization
//!
//! Applied once when a template is loaded. Whitespace carries no meaning in
//! template markup, so the result is collapsed to a single line.

use once_cell::sync::Lazy;
use regex::Regex;

static HTML_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.+?-->").expect("valid regex"));

static DOCBLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*\*.+?\*/").expect("valid regex"));

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("valid regex"));

/// Normalize raw template text.
///
/// Steps, in order:
/// 1. strip `<!-- ... -->` comments
/// 2. strip `/** ... */` docblocks
/// 3. drop `\n` and `\r`
/// 4. tabs become a single space
/// 5. runs of spaces collapse to one
/// 6. a space directly before `>` is removed
pub fn normalize(raw: &str) -> String {
    let text = HTML_COMMENT.replace_all(raw, "");
    let text = DOCBLOCK.replace_all(&text, "");
    let text: String = text
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r'))
        .map(|c| if c == '\t' { ' ' } else { c })
        .collect();
    let text = SPACE_RUN.replace_all(&text, " ");
    text.replace(" >", ">")
}
