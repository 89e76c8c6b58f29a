use crate::error::{Error, Result};
use crate::ir::{eval_assign, Block, Target};
use crate::lexer::TokenKind;
use crate::types::{is_array, is_struct_or_union, size_of};

use super::array_init::initialize_array;
use super::designator::bump_if;
use super::reader::read_initializer_element;
use super::state::CurrentObjectState;
use super::struct_init::initialize_struct_or_union;
use super::Ctx;

/// Moves `block`'s pending expression into `values` as a write to
/// `target`, closing out a scalar member.
fn assign_initializer_element(ctx: &mut Ctx, block: &mut Block, values: &mut Block, target: Target) {
  let expr = block
    .take_pending()
    .expect("assign_initializer_element called with no pending expression");
  eval_assign(values, &mut ctx.temps, target, expr);
}

/// Initializes one member (or array element): reads its own brace pair if
/// one is present, otherwise falls through to brace elision, where the
/// member borrows tokens from the enclosing aggregate's list.
pub fn initialize_member(
  ctx: &mut Ctx,
  block: &mut Block,
  values: &mut Block,
  target: Target,
) -> Result<()> {
  log::trace!("initialize_member: offset={}", target.offset);
  if is_struct_or_union(&target.ty) {
    if !block.has_init_value() && ctx.lex.current().is(TokenKind::Brk_CurlyL) {
      ctx.lex.bump();
      if !ctx.lex.current().is(TokenKind::Brk_CurlyR) {
        initialize_struct_or_union(ctx, block, values, target, CurrentObjectState::Current)?;
        bump_if(ctx, TokenKind::Tok_Comma);
      }
      super::designator::expect(ctx, TokenKind::Brk_CurlyR)?;
    } else {
      initialize_struct_or_union(ctx, block, values, target, CurrentObjectState::Designator)?;
    }
  } else if is_array(&target.ty) {
    if size_of(&target.ty) == 0 {
      return Err(Error::FlexibleArrayMember {
        span: ctx.lex.current().span,
      });
    }
    if !block.has_init_value() && ctx.lex.current().is(TokenKind::Brk_CurlyL) {
      ctx.lex.bump();
      if !ctx.lex.current().is(TokenKind::Brk_CurlyR) {
        initialize_array(ctx, block, values, target, CurrentObjectState::Current)?;
        bump_if(ctx, TokenKind::Tok_Comma);
      }
      super::designator::expect(ctx, TokenKind::Brk_CurlyR)?;
    } else {
      initialize_array(ctx, block, values, target, CurrentObjectState::Designator)?;
    }
  } else {
    if !block.has_init_value() {
      if ctx.lex.current().is(TokenKind::Brk_CurlyL) {
        ctx.lex.bump();
        read_initializer_element(ctx, block, &target.symbol)?;
        super::designator::expect(ctx, TokenKind::Brk_CurlyR)?;
      } else {
        read_initializer_element(ctx, block, &target.symbol)?;
      }
    }
    assign_initializer_element(ctx, block, values, target);
  }

  Ok(())
}

/// Initializes the top-level object (or a scalar wrapped in a spurious
/// extra brace pair, which this engine permits the same way the rest of
/// the member walk does).
pub fn initialize_object(
  ctx: &mut Ctx,
  block: &mut Block,
  values: &mut Block,
  target: Target,
) -> Result<()> {
  log::trace!("initialize_object: offset={}", target.offset);
  if ctx.lex.current().is(TokenKind::Brk_CurlyL) {
    ctx.lex.bump();
    // An empty brace pair is equivalent to zero-initializing the whole
    // object: fall through without reading any elements.
    if !ctx.lex.current().is(TokenKind::Brk_CurlyR) {
      if is_struct_or_union(&target.ty) {
        initialize_struct_or_union(ctx, block, values, target, CurrentObjectState::Current)?;
      } else if is_array(&target.ty) {
        initialize_array(ctx, block, values, target, CurrentObjectState::Current)?;
      } else {
        initialize_object(ctx, block, values, target)?;
      }
      bump_if(ctx, TokenKind::Tok_Comma);
    }
    super::designator::expect(ctx, TokenKind::Brk_CurlyR)?;
  } else if is_array(&target.ty) {
    initialize_array(ctx, block, values, target, CurrentObjectState::Member)?;
  } else {
    read_initializer_element(ctx, block, &target.symbol)?;
    assign_initializer_element(ctx, block, values, target);
  }

  Ok(())
}

#[cfg(test)]
mod tests;
