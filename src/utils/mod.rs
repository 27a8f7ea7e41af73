//! Shared helpers: HTML escaping, content types, log copy.

pub mod html;
pub mod mime;

/// Return "s" suffix for plural counts
///
/// - `plural_s(1)` -> `""` (1 file)
/// - `plural_s(5)` -> `"s"` (5 files)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(1, "error")` -> `"1 error"`
/// - `plural_count(5, "error")` -> `"5 errors"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural_s(0), "s");
        assert_eq!(plural_s(1), "");
        assert_eq!(plural_count(1, "redirect"), "1 redirect");
        assert_eq!(plural_count(3, "redirect"), "3 redirects");
    }
}
