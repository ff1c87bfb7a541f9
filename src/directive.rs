//! Line directive parsing
//!
//! ```text
//! <blank line>   skipped
//! # comment      skipped
//! !<content>     content, expected to fail
//! <content>      content, expected to succeed
//! ```

pub const COMMENT_MARKER: char = '#';
pub const EXPECT_FAIL_MARKER: char = '!';

/// One input line after marker handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    pub is_comment: bool,
    pub is_blank: bool,
    pub expect_fail: bool,
    /// Trimmed text with the expect-fail marker removed
    pub content: &'a str,
}

impl<'a> Directive<'a> {
    /// Parse one raw line
    pub fn parse(raw: &'a str) -> Self {
        let mut text = raw.trim();
        let mut expect_fail = false;

        if let Some(rest) = text.strip_prefix(EXPECT_FAIL_MARKER) {
            expect_fail = true;
            text = rest.trim();
        }

        Self {
            is_comment: text.starts_with(COMMENT_MARKER),
            is_blank: text.is_empty(),
            expect_fail,
            content: text,
        }
    }

    /// Content to dispatch, or `None` for lines that are skipped
    pub fn content(&self) -> Option<&'a str> {
        if self.is_blank || self.is_comment {
            None
        } else {
            Some(self.content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content() {
        let d = Directive::parse("  POINT(1 2)\n");
        assert!(!d.is_blank);
        assert!(!d.is_comment);
        assert!(!d.expect_fail);
        assert_eq!(d.content(), Some("POINT(1 2)"));
    }

    #[test]
    fn test_parse_blank() {
        for raw in ["", "   ", "\t\r\n"] {
            let d = Directive::parse(raw);
            assert!(d.is_blank);
            assert_eq!(d.content(), None);
        }
    }

    #[test]
    fn test_parse_comment() {
        let d = Directive::parse("  # a note");
        assert!(d.is_comment);
        assert!(!d.expect_fail);
        assert_eq!(d.content(), None);
    }

    #[test]
    fn test_parse_expect_fail() {
        let d = Directive::parse("!BAD");
        assert!(d.expect_fail);
        assert_eq!(d.content(), Some("BAD"));

        let d = Directive::parse("  ! POINT(1 2) ");
        assert!(d.expect_fail);
        assert_eq!(d.content(), Some("POINT(1 2)"));
    }

    #[test]
    fn test_parse_marker_only_is_skipped() {
        let d = Directive::parse("!");
        assert!(d.expect_fail);
        assert!(d.is_blank);
        assert_eq!(d.content(), None);
    }

    #[test]
    fn test_parse_marked_comment_is_skipped() {
        let d = Directive::parse("!# disabled case");
        assert!(d.is_comment);
        assert_eq!(d.content(), None);
    }

    #[test]
    fn test_comment_marker_only_at_start() {
        let d = Directive::parse("POINT(1 2) # trailing");
        assert_eq!(d.content(), Some("POINT(1 2) # trailing"));
    }
}
