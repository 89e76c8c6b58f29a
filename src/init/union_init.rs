use crate::error::Result;
use crate::ir::{Block, Target};
use crate::lexer::TokenKind;

use super::common::{access_member, get_member, get_named_member};
use super::designator::{bump_if, next_element, read_ident};
use super::member::initialize_member;
use super::state::CurrentObjectState;
use super::Ctx;

/// Initializes the first union member, or the last one named by a
/// designator. Each candidate member is evaluated into its own scratch
/// block that gets cleared before the next one starts, so a later
/// designator discards whatever a previous member's initializer wrote —
/// only the last write actually reaches `values`.
pub fn initialize_union(
  ctx: &mut Ctx,
  block: &mut Block,
  values: &mut Block,
  target: Target,
  state: CurrentObjectState,
) -> Result<()> {
  debug_assert!(crate::types::is_union(&target.ty));
  log::trace!("initialize_union: offset={} state={:?}", target.offset, state);

  let filled = target.offset;
  let ty = target.ty.clone();
  let mut init = ctx.pool.acquire();
  let mut done = false;

  loop {
    let member_target;
    if ctx.lex.current().is(TokenKind::Op_Dot) {
      ctx.lex.bump();
      let name = read_ident(ctx)?;
      let span = ctx.lex.previous().span;
      let (member, _) = get_named_member(&ty, &name, span)?;
      member_target = access_member(&target, member, filled);
      bump_if(ctx, TokenKind::Op_Equal);
    } else if !done {
      let member = get_member(&ty, 0);
      member_target = access_member(&target, member, filled);
    } else {
      break;
    }

    init.code.clear();
    initialize_member(ctx, block, &mut init, member_target)?;
    done = true;

    if !next_element(ctx, state) {
      break;
    }
  }

  values.absorb(&mut init);
  ctx.pool.release(init);
  Ok(())
}

#[cfg(test)]
mod tests;
