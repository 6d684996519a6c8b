use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

use crate::kernel::services::ports::LabelConfig;

/// Shortens `name` for display.
///
/// Names longer than `max_chars` graphemes keep their first `keep_chars`
/// graphemes followed by the ellipsis; shorter names are returned as-is.
pub fn display_label<'a>(name: &'a str, labels: &LabelConfig) -> Cow<'a, str> {
    let mut boundaries = name.grapheme_indices(true).map(|(idx, _)| idx);
    if boundaries.nth(labels.max_chars).is_none() {
        return Cow::Borrowed(name);
    }

    let cut = name
        .grapheme_indices(true)
        .nth(labels.keep_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(name.len());
    let mut out = String::with_capacity(cut + labels.ellipsis.len());
    out.push_str(&name[..cut]);
    out.push_str(&labels.ellipsis);
    Cow::Owned(out)
}

#[cfg(test)]
#[path = "../../tests/unit/views/label.rs"]
mod tests;
