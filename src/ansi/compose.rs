//! Combining directives with text into one styled span

use super::directive::Directive;
use super::palette::RESET;

/// Wrap `text` in the given directives, ignoring the capability gate.
///
/// Fragments are emitted style first, then foreground, then background,
/// followed by the text and one reset. When no non-empty directive is given
/// the text comes back untouched so no stray reset is produced.
pub fn compose(
    text: &str,
    fg: Option<&Directive>,
    bg: Option<&Directive>,
    style: Option<&Directive>,
) -> String {
    let fragments: Vec<&str> = [style, fg, bg]
        .into_iter()
        .flatten()
        .map(Directive::as_str)
        .filter(|code| !code.is_empty())
        .collect();

    if fragments.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + fragments.len() * 8 + RESET.as_str().len());
    for code in fragments {
        out.push_str(code);
    }
    out.push_str(text);
    out.push_str(RESET.as_str());
    out
}
