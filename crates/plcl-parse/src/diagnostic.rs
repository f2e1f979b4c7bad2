//! Diagnostic rendering for parse errors.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use plcl_tokenizer::TokenKind;
use plcl_tree::AttributeType;

use crate::error::default_literal_for;
use crate::{ParseError, ParseErrorKind};

/// Spans are byte offsets into the source.
fn ariadne_config() -> Config {
    let config = Config::default().with_index_type(IndexType::Byte);
    if std::env::var("NO_COLOR").is_ok() {
        config.with_color(false)
    } else {
        config
    }
}

impl ParseError {
    /// Render this error with ariadne.
    ///
    /// Returns a string containing the formatted error message with source context.
    pub fn render(&self, filename: &str, source: &str) -> String {
        let mut output = Vec::new();
        self.write_report(filename, source, &mut output);
        String::from_utf8(output).unwrap_or_else(|_| format!("{}", self))
    }

    /// Write the error report to a writer.
    pub fn write_report<W: std::io::Write>(&self, filename: &str, source: &str, writer: W) {
        let report = self.build_report(filename);
        let _ = report
            .with_config(ariadne_config())
            .finish()
            .write((filename, Source::from(source)), writer);
    }

    fn build_report<'a>(&self, filename: &'a str) -> ariadne::ReportBuilder<'static, (&'a str, Range<usize>)> {
        let range: Range<usize> = self.span.into();
        let report = Report::build(ReportKind::Error, (filename, range.clone())).with_message(self.message());

        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                let label = match found {
                    TokenKind::EndOfFile => "input ends here".to_string(),
                    TokenKind::Unknown => "not a valid token".to_string(),
                    _ => format!("expected {expected} here"),
                };
                let report = report.with_label(Label::new((filename, range)).with_message(label).with_color(Color::Red));
                match found {
                    TokenKind::EndOfFile => report.with_help("every block must be closed by its matching `end` keyword"),
                    TokenKind::Unknown => {
                        report.with_help("strings must be closed with `\"` on the same line, and comments start with `;`")
                    }
                    _ => report,
                }
            }

            ParseErrorKind::DuplicateOptions { found } => report
                .with_label(
                    Label::new((filename, range))
                        .with_message(format!("second {found} block"))
                        .with_color(Color::Red),
                )
                .with_help("an element or list takes at most one options block; merge the options into the first one"),

            ParseErrorKind::DuplicateElement { found } => report
                .with_label(
                    Label::new((filename, range))
                        .with_message(format!("second {found} in the same list element"))
                        .with_color(Color::Red),
                )
                .with_help("each list element holds exactly one element; start a new list element for the next one"),

            ParseErrorKind::DefaultTypeMismatch { attribute, found } => report
                .with_label(
                    Label::new((filename, range))
                        .with_message(format!("{found} is not a valid {attribute} default"))
                        .with_color(Color::Red),
                )
                .with_help(format!(
                    "defaults of {attribute} attributes must be a {}",
                    default_literal_for(*attribute)
                )),

            ParseErrorKind::InvalidNumber { expected, .. } => report
                .with_label(
                    Label::new((filename, range))
                        .with_message(format!("not a valid {expected}"))
                        .with_color(Color::Red),
                )
                .with_help(match expected {
                    AttributeType::Integer => "integers are digits with an optional leading `-`, such as `42` or `-7`",
                    _ => "numbers are digits with an optional leading `-` and at most one `.`, such as `3.25`",
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{parse_config, parse_template};
    use facet_testhelpers::test;

    fn stripped(rendered: String) -> String {
        String::from_utf8(strip_ansi_escapes::strip(rendered.as_bytes())).unwrap()
    }

    #[test]
    fn test_unexpected_token_diagnostic() {
        let source = "ConfigName x\nConfigElement E\n    a 1\nendConfigElement\n";
        let err = parse_config(source).unwrap_err();
        let out = stripped(err.render("test.plcl", source));
        assert!(out.contains("expected \"=\" but found NumberLiteral"), "{out}");
        assert!(out.contains("test.plcl"), "{out}");
        assert!(out.contains("    a 1"), "{out}");
    }

    #[test]
    fn test_end_of_file_diagnostic() {
        let source = "ConfigName";
        let err = parse_config(source).unwrap_err();
        let out = stripped(err.render("test.plcl", source));
        assert!(out.contains("expected Name but found EndOfFile"), "{out}");
        assert!(out.contains("input ends here"), "{out}");
    }

    #[test]
    fn test_duplicate_options_diagnostic() {
        let source = "TemplateName t\nTemplateList L\nTemplateListOptions\nendTemplateListOptions\nTemplateListOptions\nendTemplateListOptions\nendTemplateList\n";
        let err = parse_template(source).unwrap_err();
        let out = stripped(err.render("test.plcl", source));
        assert!(out.contains("TemplateListOptions already set"), "{out}");
        assert!(out.contains("at most one options block"), "{out}");
    }

    #[test]
    fn test_default_mismatch_diagnostic() {
        let source = "TemplateName t\nTemplateElement E\nbool b default \"yes\"\nendTemplateElement\n";
        let err = parse_template(source).unwrap_err();
        let out = stripped(err.render("test.plcl", source));
        assert!(out.contains("StringLiteral is not a valid Boolean default"), "{out}");
        assert!(out.contains("must be a BooleanLiteral"), "{out}");
    }

    #[test]
    fn test_non_ascii_before_error() {
        let source = "; \u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\nConfigName x\nConfigElement E\n    a 1\nendConfigElement\n";
        let err = parse_config(source).unwrap_err();
        assert_eq!(err.line, 4);
        let out = stripped(err.render("test.plcl", source));
        assert!(out.contains("test.plcl:4:"), "{out}");
        assert!(out.contains("    a 1"), "{out}");
    }

    #[test]
    fn test_non_ascii_before_end_of_file() {
        let source = "; \u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\nConfigName";
        let err = parse_config(source).unwrap_err();
        let out = stripped(err.render("test.plcl", source));
        assert!(out.contains("ConfigName"), "{out}");
        assert!(out.contains("input ends here"), "{out}");
    }

    #[test]
    fn test_write_report_to_writer() {
        let source = "ConfigName x\nConfigElement E\n    a = -\nendConfigElement\n";
        let err = parse_config(source).unwrap_err();
        let mut buffer = Vec::new();
        err.write_report("test.plcl", source, &mut buffer);
        let out = stripped(String::from_utf8(buffer).unwrap());
        assert!(out.contains("invalid Integer literal `-`"), "{out}");
    }
}
