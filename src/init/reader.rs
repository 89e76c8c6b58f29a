use crate::error::{Error, Result};
use crate::expr::{is_identity, is_loadtime_constant};
use crate::ir::Block;
use crate::symbol::{Linkage, Symbol};
use crate::types::is_void;

use super::Ctx;

/// Reads one assignment-expression into `block`'s pending slot.
///
/// Initializer assignments can be reordered during post-processing, so a
/// call expression can't be left in place — it's hoisted into a temporary
/// up front, unless the target has linkage, in which case a call isn't
/// allowed at all (the whole point of linkage is that the value has to be
/// computable before the program runs).
pub fn read_initializer_element(
  ctx: &mut Ctx,
  block: &mut Block,
  sym: &Symbol,
) -> Result<()> {
  debug_assert!(!block.has_init_value());

  let expr = crate::exprparse::assignment_expression(&mut ctx.lex, ctx.symbols)?;
  if is_void(&expr.ty) {
    return Err(Error::VoidInitializer { span: expr.span });
  }

  let expr = if sym.linkage != Linkage::None {
    if !is_identity(&expr) || !is_loadtime_constant(&expr) {
      return Err(Error::NotLoadTimeConstant { span: expr.span });
    }
    expr
  } else if !is_identity(&expr) {
    let tmp = ctx.temps.create_var(expr.ty.clone());
    let target = crate::ir::Target::new(tmp.clone(), 0, expr.ty.clone());
    let span = expr.span;
    block.push(target, expr);
    crate::ir::var_direct(span, tmp)
  } else {
    expr
  };

  block.set_pending(expr);
  Ok(())
}
