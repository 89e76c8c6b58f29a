use crate::error::Result;
use crate::lexer::TokenKind;

use super::state::CurrentObjectState;
use super::Ctx;

/// Decides whether a trailing comma begins another element of the
/// aggregate currently being walked, or closes it and hands control back
/// to an enclosing one. Consumes the comma when it does continue.
pub fn next_element(ctx: &mut Ctx, state: CurrentObjectState) -> bool {
  use CurrentObjectState::Current;
  use TokenKind::*;

  if !ctx.lex.current().is(Tok_Comma) {
    return false;
  }

  let ahead = ctx.lex.peekn(2);
  let continues = if ahead.is(Brk_CurlyR) {
    false
  } else if ahead.is(Op_Dot) {
    state == Current
  } else {
    true
  };

  if continues {
    ctx.lex.bump();
  }
  continues
}

/// Same decision as [`next_element`], but for array elements, where a
/// leading `[` designator can also continue the current object.
pub fn has_next_array_element(ctx: &Ctx, state: CurrentObjectState) -> (bool, bool) {
  use CurrentObjectState::Current;
  use TokenKind::*;

  if !ctx.lex.current().is(Tok_Comma) {
    return (false, false);
  }

  let ahead = ctx.lex.peekn(2);
  if ahead.is(Brk_CurlyR) || ahead.is(Op_Dot) {
    return (false, false);
  }
  if ahead.is(Brk_SquareL) {
    return (true, state == Current);
  }
  (true, false)
}

/// Reads a `[constant]` designator if one is present.
pub fn try_parse_index(ctx: &mut Ctx) -> Result<Option<usize>> {
  if !ctx.lex.current().is(TokenKind::Brk_SquareL) {
    return Ok(None);
  }
  ctx.lex.bump();
  let span = ctx.lex.current().span;
  let index = crate::exprparse::constant_expression(&mut ctx.lex, ctx.symbols)?;
  expect(ctx, TokenKind::Brk_SquareR)?;
  if index < 0 {
    return Err(crate::error::Error::NonIntegerIndex { span });
  }
  Ok(Some(index as usize))
}

pub fn expect(ctx: &mut Ctx, kind: TokenKind) -> Result<()> {
  if ctx.lex.current().is(kind) {
    ctx.lex.bump();
    Ok(())
  } else {
    Err(crate::error::Error::UnexpectedToken {
      expected: kind.name(),
      span: ctx.lex.current().span,
    })
  }
}

pub fn bump_if(ctx: &mut Ctx, kind: TokenKind) -> bool {
  if ctx.lex.current().is(kind) {
    ctx.lex.bump();
    true
  } else {
    false
  }
}

/// Consumes an identifier token and returns its text, for `.member` and
/// `[index]` designators.
pub fn read_ident(ctx: &mut Ctx) -> Result<String> {
  expect(ctx, TokenKind::Lit_Ident)?;
  let token = ctx.lex.previous().clone();
  Ok(ctx.lex.lexeme(&token).to_string())
}
