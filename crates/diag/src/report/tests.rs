use super::{Report, Snippet};
use crate::report::{Level, Source};

#[test]
fn snippet_single_line() {
  let src = "lorem ipsum dolor sit amet consectetur adipiscing elit";

  assert_eq!(
    Snippet::new(src, 6..17),
    Snippet {
      s: "lorem ipsum dolor sit amet consectetur adipiscing elit".into(),
      line: 1,
      count: 1,
      span: (6..17).into(),
    }
  );
}

#[test]
fn snippet_multi_line() {
  struct Case {
    src: &'static str,
    src_span: std::ops::Range<usize>,
    snippet: Snippet<'static>,
  }

  let tests = vec![
    Case {
      src: "lorem ipsum\ndolor sit amet\nconsectetur adipiscing elit",
      src_span: 6..17,
      snippet: Snippet {
        s: "lorem ipsum\ndolor sit amet".into(),
        line: 1,
        count: 2,
        span: (6..17).into(),
      },
    },
    Case {
      src: "lorem ipsum\ndolor sit amet\nconsectetur adipiscing elit",
      src_span: 17..31,
      snippet: Snippet {
        s: "dolor sit amet\nconsectetur adipiscing elit".into(),
        line: 2,
        count: 2,
        span: (5..19).into(),
      },
    },
    Case {
      src: "x ",
      src_span: 0..2,
      snippet: Snippet {
        s: "x".into(),
        line: 1,
        count: 1,
        span: (0..1).into(),
      },
    },
  ];

  for (i, case) in tests.iter().enumerate() {
    let snippet = Snippet::new(case.src, case.src_span.clone());
    assert_eq!(snippet, case.snippet, "[Test #{i}] Snippets mismatch");
    assert_eq!(
      case.src[case.src_span.start..case.src_span.end]
        .trim_end_matches('\n')
        .trim_end_matches(' '),
      snippet.highlight(),
      "[Test #{i}] Highlighted slices mismatch"
    );
  }
}

#[test]
fn emit_report_single_line() {
  let report = Report {
    level: Level::Error,
    source: Source::file("test.c", "int x = 10\nint y = 20;"),
    message: "expected semicolon".into(),
    span: (10..11).into(),
    label: None,
    color: false,
  };
  let out = report.emit_to_string().unwrap();
  assert!(out.contains("error: expected semicolon"));
  assert!(out.contains("> test.c:1"));
}

#[test]
fn emit_report_with_label() {
  let report = Report {
    level: Level::Error,
    source: Source::file("test.c", "static int x = {\n  a(),\n  b(),\n};"),
    message: "Initializer must be computable at load time.".into(),
    span: (18..22).into(),
    label: Some("calls are not load-time constants".into()),
    color: false,
  };
  let out = report.emit_to_string().unwrap();
  assert!(out.contains("Initializer must be computable at load time."));
  assert!(out.contains("calls are not load-time constants"));
}

#[test]
fn emit_report_out_of_bounds_span_errors() {
  let report = Report {
    level: Level::Error,
    source: Source::file("test.c", "short"),
    message: "oops".into(),
    span: (0..100).into(),
    label: None,
    color: false,
  };
  assert!(report.emit_to_string().is_err());
}
