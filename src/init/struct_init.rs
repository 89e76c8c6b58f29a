use crate::error::Result;
use crate::ir::{eval_assign, Block, Target};
use crate::lexer::TokenKind;
use crate::types::is_compatible_unqualified;

use super::common::{access_member, get_member, get_named_member};
use super::designator::{bump_if, next_element, read_ident};
use super::member::initialize_member;
use super::state::CurrentObjectState;
use super::union_init::initialize_union;
use super::Ctx;

/// Initializes members of a struct, positionally or via `.member`
/// designators. Members that share an offset with the one just
/// initialized (an anonymous union's fields) are skipped, so only the
/// first of them is ever written by the positional walk.
pub fn initialize_struct(
  ctx: &mut Ctx,
  block: &mut Block,
  values: &mut Block,
  target: Target,
  state: CurrentObjectState,
) -> Result<()> {
  debug_assert!(crate::types::is_struct(&target.ty));
  log::trace!("initialize_struct: offset={} state={:?}", target.offset, state);

  let filled = target.offset;
  let ty = target.ty.clone();
  let m = crate::types::nmembers(&ty);
  let mut i = 0usize;
  let mut prev: Option<(usize, u32)> = None;

  loop {
    if !block.has_init_value() && ctx.lex.current().is(TokenKind::Op_Dot) {
      ctx.lex.bump();
      let name = read_ident(ctx)?;
      let span = ctx.lex.previous().span;
      let (member, idx) = get_named_member(&ty, &name, span)?;
      let member_target = access_member(&target, member, filled);
      prev = Some((member.offset, member.field_offset));
      i = idx + 1;
      bump_if(ctx, TokenKind::Op_Equal);
      initialize_member(ctx, block, values, member_target)?;
    } else {
      let member = loop {
        let candidate = get_member(&ty, i);
        i += 1;
        match prev {
          Some((offset, field_offset))
            if candidate.offset == offset && candidate.field_offset == field_offset => {}
          _ => break candidate,
        }
      };
      prev = Some((member.offset, member.field_offset));
      let member_target = access_member(&target, member, filled);
      initialize_member(ctx, block, values, member_target)?;
      if i >= m {
        break;
      }
    }

    if !next_element(ctx, state) {
      break;
    }
  }

  Ok(())
}

/// Reads an initializer for a struct- or union-typed target. Tries to read
/// a single expression first, since a compatible aggregate value assigns
/// the whole object at once (`struct A a = some_a;`); otherwise falls
/// through to member-by-member initialization.
pub fn initialize_struct_or_union(
  ctx: &mut Ctx,
  block: &mut Block,
  values: &mut Block,
  target: Target,
  state: CurrentObjectState,
) -> Result<()> {
  debug_assert!(crate::types::is_struct_or_union(&target.ty));
  log::trace!(
    "initialize_struct_or_union: offset={} state={:?}",
    target.offset,
    state
  );

  if !block.has_init_value() {
    use TokenKind::*;
    let peek = ctx.lex.current().kind;
    if !matches!(peek, Op_Dot | Brk_CurlyL | Brk_SquareL) {
      super::reader::read_initializer_element(ctx, block, &target.symbol)?;
    }
  }

  if block.has_init_value()
    && is_compatible_unqualified(&target.ty, &block.expr.as_ref().unwrap().ty)
  {
    let expr = block.take_pending().unwrap();
    eval_assign(values, &mut ctx.temps, target, expr);
  } else if crate::types::is_union(&target.ty) {
    initialize_union(ctx, block, values, target, state)?;
  } else {
    initialize_struct(ctx, block, values, target, state)?;
  }

  Ok(())
}

#[cfg(test)]
mod tests;
