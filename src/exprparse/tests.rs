use super::*;
use crate::expr::ExprKind;

fn parse(src: &str, symbols: &SymbolTable) -> Expr {
  let mut lex = Lexer::new(src);
  assignment_expression(&mut lex, symbols).unwrap()
}

#[test]
fn parses_integer_literal() {
  let symbols = SymbolTable::new();
  let e = parse("42", &symbols);
  assert!(matches!(e.kind, ExprKind::Immediate(Immediate::Int(42))));
}

#[test]
fn parses_float_literal() {
  let symbols = SymbolTable::new();
  let e = parse("1.5", &symbols);
  assert!(matches!(e.kind, ExprKind::Immediate(Immediate::Float(v)) if v == 1.5));
}

#[test]
fn parses_string_literal_as_array_typed_direct_reference() {
  let symbols = SymbolTable::new();
  let e = parse(r#""hi""#, &symbols);
  assert!(matches!(&e.kind, ExprKind::Direct(sym) if matches!(sym.kind, SymbolKind::Literal)));
  assert!(crate::types::is_array(&e.ty));
}

#[test]
fn parses_address_of_declared_symbol() {
  let mut symbols = SymbolTable::new();
  symbols.declare(Symbol::object("g", Type::Int, Linkage::External));
  let e = parse("&g", &symbols);
  assert!(matches!(e.kind, ExprKind::Address(_)));
  assert!(crate::expr::is_loadtime_constant(&e));
}

#[test]
fn parses_call_with_arguments() {
  let mut symbols = SymbolTable::new();
  symbols.declare(Symbol::function("f", Type::Int, Linkage::External));
  let e = parse("f(1, 2)", &symbols);
  match e.kind {
    ExprKind::Call(_, args) => assert_eq!(args.len(), 2),
    _ => panic!("expected a call"),
  }
  assert!(!crate::expr::is_loadtime_constant(&e));
}

#[test]
fn constant_expression_accepts_integer_immediate() {
  let symbols = SymbolTable::new();
  let mut lex = Lexer::new("3");
  assert_eq!(constant_expression(&mut lex, &symbols).unwrap(), 3);
}

#[test]
fn constant_expression_rejects_non_integer() {
  let symbols = SymbolTable::new();
  let mut lex = Lexer::new("1.5");
  assert!(constant_expression(&mut lex, &symbols).is_err());
}

#[test]
fn parenthesized_expression_unwraps() {
  let symbols = SymbolTable::new();
  let e = parse("(7)", &symbols);
  assert!(matches!(e.kind, ExprKind::Immediate(Immediate::Int(7))));
}
