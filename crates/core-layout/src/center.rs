use core_text::Measurer;

/// Pad `text` with spaces so it sits in the middle of `width` columns.
///
/// Text at least as wide as `width` is returned unchanged. On odd padding the
/// right side receives the extra space.
pub fn center(text: &str, width: usize) -> String {
    center_with(&Measurer::unicode(), text, width)
}

pub fn center_with(measurer: &Measurer, text: &str, width: usize) -> String {
    let w = measurer.width(text);
    if w >= width {
        return text.to_string();
    }
    let pad = width - w;
    let left = pad / 2;
    let right = pad - left;
    let mut out = String::with_capacity(text.len() + pad);
    out.push_str(&" ".repeat(left));
    out.push_str(text);
    out.push_str(&" ".repeat(right));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_padding_is_symmetric() {
        assert_eq!(center("AB", 6), "  AB  ");
        assert_eq!(center("A", 5), "  A  ");
    }

    #[test]
    fn odd_padding_favors_right() {
        assert_eq!(center("AB", 5), " AB  ");
    }

    #[test]
    fn wide_text_uses_display_width() {
        // "日本" is 4 columns, leaving 2 spaces to distribute.
        assert_eq!(center("日本", 6), " 日本 ");
    }

    #[test]
    fn never_truncates() {
        assert_eq!(center("abcdef", 3), "abcdef");
        assert_eq!(center("abc", 3), "abc");
        assert_eq!(center("x", 0), "x");
    }

    #[test]
    fn empty_text_fills_with_spaces() {
        assert_eq!(center("", 3), "   ");
    }
}
