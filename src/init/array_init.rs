use crate::error::Result;
use crate::expr::{is_identity, is_string_literal};
use crate::ir::{eval_assign, Block, Target};
use crate::lexer::TokenKind;
use crate::types::{is_array, is_char, size_of, type_array_len, type_next};

use super::designator::{bump_if, has_next_array_element, try_parse_index};
use super::member::initialize_member;
use super::state::CurrentObjectState;
use super::Ctx;

/// Initializes an array, either from a brace-enclosed element list or from
/// a string literal assigned to the whole object at once. A trailing
/// element count shorter than the array's declared length leaves the rest
/// to be zero-filled by post-processing; an array with no declared length
/// (`int a[] = ...`) has its length patched in from how many elements were
/// actually read.
pub fn initialize_array(
  ctx: &mut Ctx,
  block: &mut Block,
  values: &mut Block,
  mut target: Target,
  state: CurrentObjectState,
) -> Result<()> {
  debug_assert!(is_array(&target.ty));
  log::trace!("initialize_array: offset={} state={:?}", target.offset, state);

  let ty = target.ty.clone();
  let elem = type_next(&ty);
  let width = size_of(&elem);
  let initial = target.offset;
  let count = type_array_len(&ty);
  let mut c = 0usize;

  if !block.has_init_value() {
    use TokenKind::*;
    let peek = ctx.lex.current().kind;
    if !matches!(peek, Op_Dot | Brk_CurlyL | Brk_SquareL) {
      super::reader::read_initializer_element(ctx, block, &target.symbol)?;
    }
  }

  let string_shortcut = match &block.expr {
    Some(expr) => is_char(&elem) && is_identity(expr) && is_array(&expr.ty) && is_string_literal(expr),
    None => false,
  };

  if string_shortcut {
    let expr = block.take_pending().unwrap();
    // The literal may be shorter than the declared array; record the write
    // at the literal's own (narrower) type so post-processing zero-fills
    // whatever is left, rather than treating the whole array as covered.
    let mut write_target = target.clone();
    write_target.ty = expr.ty.clone();
    eval_assign(values, &mut ctx.temps, write_target, expr);
  } else {
    target.ty = elem;
    let mut i = 0usize;
    loop {
      if let Some(idx) = try_parse_index(ctx)? {
        i = idx;
        bump_if(ctx, TokenKind::Op_Equal);
      }
      target.offset = initial + i * width;
      initialize_member(ctx, block, values, target.clone())?;
      i += 1;
      c = c.max(i);

      let (has_next, is_designator) = has_next_array_element(ctx, state);
      if !has_next {
        break;
      }
      if !is_designator {
        if let Some(count) = count {
          if c >= count {
            break;
          }
        }
      }
      super::designator::expect(ctx, TokenKind::Tok_Comma)?;
    }
  }

  if size_of(&ty) == 0 {
    debug_assert!(is_array(&target.symbol.ty));
    crate::types::set_array_length(&target.symbol.ty, c);
  }

  Ok(())
}
