use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Keep the end of a string within `max_cells` terminal cells, prefixing `…`
/// if anything was cut from the start.
pub fn truncate_start_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut start = s.len();
    for (idx, grapheme) in s.grapheme_indices(true).rev() {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        start = idx;
    }
    format!("\u{2026}{}", &s[start..])
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    match s[byte_offset..].grapheme_indices(true).nth(1) {
        Some((i, _)) => Some(byte_offset + i),
        None => Some(s.len()),
    }
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Start of the word left of `byte_offset` (whitespace-delimited), for
/// delete-word editing.
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[..byte_offset].grapheme_indices(true).collect();
    let is_space = |g: &str| g.chars().all(char::is_whitespace);

    let mut idx = graphemes.len();
    while idx > 0 && is_space(graphemes[idx - 1].1) {
        idx -= 1;
    }
    while idx > 0 && !is_space(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes.get(idx).map_or(byte_offset, |(i, _)| *i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_emoji_and_cjk() {
        assert_eq!(display_width("socks"), 5);
        assert_eq!(display_width("🎉"), 2);
        assert_eq!(display_width("你好"), 4);
    }

    #[test]
    fn truncate_fits_unchanged() {
        assert_eq!(truncate_to_width("Socks", 5), "Socks");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Sunscreen", 5), "Suns\u{2026}");
        assert_eq!(truncate_to_width("Sunscreen", 1), "\u{2026}");
        assert_eq!(truncate_to_width("Sunscreen", 0), "");
    }

    #[test]
    fn truncate_does_not_split_wide_chars() {
        // Each CJK char is 2 cells; budget of 3 fits one
        assert_eq!(truncate_to_width("你好世界", 4), "你\u{2026}");
    }

    #[test]
    fn truncate_start_keeps_tail() {
        assert_eq!(truncate_start_to_width("Sunscreen", 9), "Sunscreen");
        assert_eq!(truncate_start_to_width("Sunscreen", 5), "\u{2026}reen");
        assert_eq!(truncate_start_to_width("Sunscreen", 1), "\u{2026}");
        assert_eq!(truncate_start_to_width("你好世界", 4), "\u{2026}界");
    }

    #[test]
    fn grapheme_boundaries() {
        let s = "ae\u{0301}b"; // a, e + combining accent, b
        assert_eq!(next_grapheme_boundary(s, 0), Some(1));
        assert_eq!(next_grapheme_boundary(s, 1), Some(4));
        assert_eq!(next_grapheme_boundary(s, 5), None);
        assert_eq!(prev_grapheme_boundary(s, 4), Some(1));
        assert_eq!(prev_grapheme_boundary(s, 0), None);
    }

    #[test]
    fn word_boundary_skips_trailing_space() {
        let s = "wool socks  ";
        assert_eq!(word_boundary_left(s, s.len()), 5);
        assert_eq!(word_boundary_left(s, 4), 0);
        assert_eq!(word_boundary_left(s, 0), 0);
    }
}
