//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Expressions in `graphcalc` do not carry source spans of their own. Spans attached to an
//! [`Error`] refer to whatever text the report is rendered against, usually the rendered form of
//! the expression that failed.

use ariadne::{Color, Report, Source};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source text that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source text that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Prints the report for this error to stderr, highlighting regions of `src`.
    pub fn report_to_stderr(&self, src_id: &str, src: &str) {
        // nothing useful can be done if stderr is closed
        let _ = self.build_report(src_id).eprint((src_id, Source::from(src)));
    }

    /// Renders the report for this error into a string, highlighting regions of `src`. The string
    /// contains ANSI color codes.
    ///
    /// The spans of the error must lie within `src`; labels outside of it are not shown.
    pub fn report_to_string(&self, src_id: &str, src: &str) -> String {
        let mut buf = Vec::new();
        if self.build_report(src_id).write((src_id, Source::from(src)), &mut buf).is_err() {
            return String::new();
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Returns the offset a report should start at, given the spans of an error.
///
/// Errors built from expressions that no longer contain the offending region have no spans; the
/// report then points at the start of the source.
pub fn report_offset(spans: &[Range<usize>]) -> usize {
    spans.first().map_or(0, |span| span.start)
}

#[cfg(test)]
mod tests {
    use ariadne::{Label, ReportKind};
    use super::*;

    #[derive(Debug)]
    struct WrongAnswer;

    impl ErrorKind for WrongAnswer {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, report_offset(spans))
                .with_message("the answer is wrong")
                .with_labels(spans.iter().map(|span| {
                    Label::new((src_id, span.clone()))
                        .with_message("this number")
                        .with_color(EXPR)
                }))
                .finish()
        }
    }

    fn render(err: &Error, src: &str) -> String {
        let raw = err.report_to_string("input", src);
        String::from_utf8(strip_ansi_escapes::strip(raw)).unwrap()
    }

    #[test]
    fn report_contains_message_and_labels() {
        let err = Error::new(vec![4..6], WrongAnswer);
        let report = render(&err, "1 + 41");
        assert!(report.contains("the answer is wrong"));
        assert!(report.contains("this number"));
        assert!(report.contains("1 + 41"));
    }

    #[test]
    fn report_without_spans() {
        assert_eq!(report_offset(&[]), 0);
        assert_eq!(report_offset(&[3..4, 1..2]), 3);

        let err = Error::new(Vec::new(), WrongAnswer);
        assert!(render(&err, "2").contains("the answer is wrong"));
    }
}
