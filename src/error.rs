//! Diagnostics for the initializer engine.
//!
//! A C compiler typically reports a fatal message and aborts the moment an
//! initializer is malformed. This crate keeps the same taxonomy of
//! messages, but threads them through as a `Result` instead of aborting the
//! process, so a caller decides whether and how to abandon the compilation
//! unit.

use span::Span;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A fatal error raised while lowering an initializer.
///
/// Every variant here corresponds to one of the error classes in the
/// engine's error taxonomy; the `span` points at the token or expression
/// that triggered it.
#[derive(Clone, Debug, Error)]
pub enum Error {
  #[error("cannot initialize with void value")]
  VoidInitializer { span: Span },

  #[error("initializer must be computable at load time")]
  NotLoadTimeConstant { span: Span },

  #[error("{ty} has no member named {name}")]
  UnknownMember { ty: String, name: String, span: Span },

  #[error("array designator must have integer value")]
  NonIntegerIndex { span: Span },

  #[error("invalid initialization of flexible array member")]
  FlexibleArrayMember { span: Span },

  #[error("cannot zero-initialize object of type {ty}")]
  UnsupportedZeroInit { ty: String, span: Span },

  #[error("expected `{expected}`")]
  UnexpectedToken { expected: &'static str, span: Span },

  #[error("unexpected token")]
  UnexpectedPrimary { span: Span },

  #[error("invalid token")]
  InvalidToken { span: Span },
}

impl Error {
  pub fn span(&self) -> Span {
    match self {
      Error::VoidInitializer { span }
      | Error::NotLoadTimeConstant { span }
      | Error::UnknownMember { span, .. }
      | Error::NonIntegerIndex { span }
      | Error::FlexibleArrayMember { span }
      | Error::UnsupportedZeroInit { span, .. }
      | Error::UnexpectedToken { span, .. }
      | Error::UnexpectedPrimary { span }
      | Error::InvalidToken { span } => *span,
    }
  }

  /// Render this error as a one-shot source-annotated report, the same
  /// format a diagnostics sink would print before aborting.
  pub fn report(&self, source: impl Into<diag::Source<'_>>) -> String {
    diag::Report::error()
      .source(source)
      .message(self.to_string())
      .span(self.span())
      .color(false)
      .build()
      .emit_to_string()
      .unwrap_or_else(|_| self.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn report_renders_message_and_source_snippet() {
    let src = "int x = f();";
    let span: Span = (8..11).into(); // "f()"
    let err = Error::VoidInitializer { span };
    let rendered = err.report(src);
    assert!(rendered.contains("cannot initialize with void value"));
    assert!(rendered.contains("f()"));
  }

  #[test]
  fn report_interpolates_unknown_member_fields() {
    let src = "struct S s = { .missing = 1 };";
    let span: Span = (16..23).into(); // "missing"
    let err = Error::UnknownMember {
      ty: "struct S".into(),
      name: "missing".into(),
      span,
    };
    let rendered = err.report(src);
    assert!(rendered.contains("struct S has no member named missing"));
  }

  #[test]
  fn report_falls_back_to_display_when_span_is_out_of_bounds() {
    let src = "x";
    let span: Span = (10..20).into();
    let err = Error::NonIntegerIndex { span };
    assert_eq!(err.report(src), err.to_string());
  }
}
