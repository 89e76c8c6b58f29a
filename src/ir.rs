//! The lowered-initializer data model: a `Block` is the buffer each
//! component appends `Assignment`s into as it walks the initializer list;
//! `Target` names where a value lands.

use std::rc::Rc;

use span::Span;

use crate::expr::Expr;
use crate::symbol::Symbol;
use crate::types::Type;

/// Where an assignment's value is stored.
#[derive(Clone, Debug)]
pub struct Target {
  pub symbol: Rc<Symbol>,
  /// Byte offset from the start of `symbol`.
  pub offset: usize,
  pub ty: Type,
  /// Bit offset within the storage unit at `offset`, for bit-field writes.
  pub field_offset: u32,
  /// Width in bits; 0 means this is a plain (non-bit-field) write.
  pub field_width: u32,
}

impl Target {
  pub fn new(symbol: Rc<Symbol>, offset: usize, ty: Type) -> Target {
    Target {
      symbol,
      offset,
      ty,
      field_offset: 0,
      field_width: 0,
    }
  }

  pub fn is_bitfield(&self) -> bool {
    self.field_width != 0
  }

  /// A target shifted to point `delta` bytes further into the same object,
  /// at a possibly different type — used while walking into array elements
  /// and struct/union members.
  pub fn offset_by(&self, delta: usize, ty: Type) -> Target {
    Target {
      symbol: self.symbol.clone(),
      offset: self.offset + delta,
      ty,
      field_offset: 0,
      field_width: 0,
    }
  }

  pub fn with_bitfield(mut self, field_offset: u32, field_width: u32) -> Target {
    self.field_offset = field_offset;
    self.field_width = field_width;
    self
  }
}

/// One write into the object being initialized: `*target = expr`.
#[derive(Clone, Debug)]
pub struct Assignment {
  pub target: Target,
  pub expr: Expr,
}

/// The buffer a designator-driven walk accumulates writes into before they
/// are sorted, deduplicated and padded by post-processing. `expr`
/// mirrors a C compiler's `has_init_value` flag: `None` means no pending
/// pushed-back expression is sitting in front of the next designator.
#[derive(Clone, Debug, Default)]
pub struct Block {
  pub code: Vec<Assignment>,
  pub expr: Option<Expr>,
}

impl Block {
  pub fn new() -> Block {
    Block::default()
  }

  pub fn push(&mut self, target: Target, expr: Expr) {
    self.code.push(Assignment { target, expr });
  }

  pub fn has_init_value(&self) -> bool {
    self.expr.is_some()
  }

  pub fn set_pending(&mut self, expr: Expr) {
    self.expr = Some(expr);
  }

  pub fn take_pending(&mut self) -> Option<Expr> {
    self.expr.take()
  }

  /// Moves another block's assignments into this one, leaving `other`
  /// empty but still owned by the caller (so it can still be released to
  /// the pool afterward).
  pub fn absorb(&mut self, other: &mut Block) {
    self.code.append(&mut other.code);
  }
}

/// Hoists a non-identity expression (a call) for a
/// no-linkage symbol into a fresh temporary, since post-processing is free
/// to reorder assignments by offset and a call can't be moved across that
/// reordering. Identity expressions are pushed as-is.
pub fn eval_assign(
  block: &mut Block,
  temps: &mut crate::symbol::TempCounter,
  target: Target,
  expr: Expr,
) {
  if crate::expr::is_identity(&expr) {
    block.push(target, expr);
    return;
  }
  let tmp = temps.create_var(expr.ty.clone());
  let tmp_target = Target::new(tmp.clone(), 0, expr.ty.clone());
  let span = expr.span;
  block.push(tmp_target, expr);
  block.push(target, crate::expr::Expr::direct(span, tmp));
}

/// A direct (non-address) reference to `symbol`, the Rust counterpart of
/// `var_direct`.
pub fn var_direct(span: Span, symbol: Rc<Symbol>) -> Expr {
  crate::expr::Expr::direct(span, symbol)
}
