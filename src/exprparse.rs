//! A minimal recursive-descent reader for the handful of expression forms
//! the initializer engine needs to observe: literals, symbol references,
//! address-of, and calls. Full expression semantics (arithmetic, casts,
//! promotions) are out of scope.

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::expr::{Expr, Immediate};
use crate::lexer::{Lexer, TokenKind};
use crate::symbol::{Linkage, Symbol, SymbolKind, SymbolTable};
use crate::types::Type;

/// Reads one assignment-expression and returns it.
pub fn assignment_expression(lex: &mut Lexer, symbols: &SymbolTable) -> Result<Expr> {
  unary_expr(lex, symbols)
}

/// Reads one constant expression, used only for `[index]` designators.
/// Errors with [`Error::NonIntegerIndex`] unless the parsed expression is
/// an integer immediate.
pub fn constant_expression(lex: &mut Lexer, symbols: &SymbolTable) -> Result<i64> {
  let expr = unary_expr(lex, symbols)?;
  match expr.kind {
    crate::expr::ExprKind::Immediate(Immediate::Int(v)) if crate::types::is_integer(&expr.ty) => {
      Ok(v)
    }
    _ => Err(Error::NonIntegerIndex { span: expr.span }),
  }
}

fn unary_expr(lex: &mut Lexer, symbols: &SymbolTable) -> Result<Expr> {
  if lex.current().is(TokenKind::Op_Amp) {
    lex.bump();
    let start = lex.previous().span;
    let symbol = expect_symbol_ref(lex, symbols)?;
    let span = start.join(lex.previous().span);
    return Ok(Expr::address(span, symbol));
  }
  postfix_expr(lex, symbols)
}

fn postfix_expr(lex: &mut Lexer, symbols: &SymbolTable) -> Result<Expr> {
  let mut expr = primary_expr(lex, symbols)?;
  while lex.current().is(TokenKind::Brk_ParenL) {
    let args = call_args(lex, symbols)?;
    let ret = match &expr.kind {
      crate::expr::ExprKind::Direct(sym) => match &sym.kind {
        SymbolKind::Function { ret } => ret.clone(),
        _ => Type::Int,
      },
      _ => Type::Int,
    };
    let span = expr.span.join(lex.previous().span);
    expr = Expr::call(span, ret, expr, args);
  }
  Ok(expr)
}

fn call_args(lex: &mut Lexer, symbols: &SymbolTable) -> Result<Vec<Expr>> {
  expect(lex, TokenKind::Brk_ParenL)?;
  let mut args = vec![];
  if !lex.current().is(TokenKind::Brk_ParenR) {
    args.push(assignment_expression(lex, symbols)?);
    while bump_if(lex, TokenKind::Tok_Comma) {
      args.push(assignment_expression(lex, symbols)?);
    }
  }
  expect(lex, TokenKind::Brk_ParenR)?;
  Ok(args)
}

fn primary_expr(lex: &mut Lexer, symbols: &SymbolTable) -> Result<Expr> {
  if bump_if(lex, TokenKind::Lit_Int) {
    let token = lex.previous().clone();
    let text = lex.lexeme(&token);
    let value: i64 = text.parse().unwrap_or(0);
    return Ok(Expr::immediate(token.span, Type::Int, Immediate::Int(value)));
  }

  if bump_if(lex, TokenKind::Lit_Float) {
    let token = lex.previous().clone();
    let text = lex.lexeme(&token);
    let value: f64 = text.parse().unwrap_or(0.0);
    return Ok(Expr::immediate(
      token.span,
      Type::Double,
      Immediate::Float(value),
    ));
  }

  if bump_if(lex, TokenKind::Lit_Char) {
    let token = lex.previous().clone();
    let text = lex.lexeme(&token);
    let value = char_literal_value(text);
    return Ok(Expr::immediate(token.span, Type::Char, Immediate::Int(value)));
  }

  if bump_if(lex, TokenKind::Lit_String) {
    let token = lex.previous().clone();
    let text = lex.lexeme(&token);
    let contents = unescape_string(&text[1..text.len() - 1]);
    let ty = Type::array(Type::Char, Some(contents.len() + 1));
    let symbol = Symbol::literal(format!(".str.{}", token.span.start), ty);
    return Ok(Expr::direct(token.span, symbol));
  }

  if lex.current().is(TokenKind::Lit_Ident) {
    let symbol = expect_symbol_ref(lex, symbols)?;
    return Ok(Expr::direct(lex.previous().span, symbol));
  }

  if bump_if(lex, TokenKind::Brk_ParenL) {
    let expr = assignment_expression(lex, symbols)?;
    expect(lex, TokenKind::Brk_ParenR)?;
    return Ok(expr);
  }

  Err(Error::UnexpectedPrimary {
    span: lex.current().span,
  })
}

fn expect_symbol_ref(lex: &mut Lexer, symbols: &SymbolTable) -> Result<Rc<Symbol>> {
  expect(lex, TokenKind::Lit_Ident)?;
  let token = lex.previous().clone();
  let name = lex.lexeme(&token);
  match symbols.lookup(name) {
    Some(symbol) => Ok(symbol),
    // An undeclared identifier isn't in this engine's error taxonomy (name
    // resolution belongs to the rest of the compiler); treat it as a
    // zero-linkage placeholder object so the load-time-constant rule still
    // has something well-typed to reject.
    None => Ok(Symbol::object(name, Type::Int, Linkage::None)),
  }
}

fn char_literal_value(lexeme: &str) -> i64 {
  let inner = &lexeme[1..lexeme.len() - 1];
  let mut chars = inner.chars();
  match chars.next() {
    Some('\\') => match chars.next() {
      Some('n') => b'\n' as i64,
      Some('t') => b'\t' as i64,
      Some('0') => 0,
      Some(c) => c as i64,
      None => 0,
    },
    Some(c) => c as i64,
    None => 0,
  }
}

fn unescape_string(s: &str) -> Vec<u8> {
  let mut out = vec![];
  let mut chars = s.chars();
  while let Some(c) = chars.next() {
    if c == '\\' {
      match chars.next() {
        Some('n') => out.push(b'\n'),
        Some('t') => out.push(b'\t'),
        Some('0') => out.push(0),
        Some(other) => out.push(other as u8),
        None => {}
      }
    } else {
      out.push(c as u8);
    }
  }
  out
}

fn bump_if(lex: &mut Lexer, kind: TokenKind) -> bool {
  if lex.current().is(kind) {
    lex.bump();
    true
  } else {
    false
  }
}

fn expect(lex: &mut Lexer, kind: TokenKind) -> Result<()> {
  if bump_if(lex, kind) {
    Ok(())
  } else {
    Err(Error::UnexpectedToken {
      expected: kind.name(),
      span: lex.current().span,
    })
  }
}

#[cfg(test)]
mod tests;
