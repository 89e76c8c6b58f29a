//! The block pool: initializer components recurse into nested
//! elements and members, and each nesting level needs a scratch `Block` to
//! accumulate into before folding the result back into its caller. Rather
//! than allocating one per recursion level, they're checked out of and
//! returned to a free list.

use crate::ir::Block;

#[derive(Default)]
pub struct BlockPool {
  free: Vec<Block>,
}

impl BlockPool {
  pub fn new() -> BlockPool {
    BlockPool::default()
  }

  /// Hands out a scratch block, reusing a released one if the free list has
  /// one available.
  pub fn acquire(&mut self) -> Block {
    self.free.pop().unwrap_or_default()
  }

  /// Returns a block to the pool once its contents have been folded into
  /// the caller. The block must not still be carrying a pending expression
  /// (a pending `expr`) — that would mean a caller forgot to resolve it
  /// before releasing.
  pub fn release(&mut self, mut block: Block) {
    assert!(
      block.expr.is_none(),
      "released a block with an unresolved pending expression"
    );
    block.code.clear();
    self.free.push(block);
  }

  /// Drops every pooled block. Must be called between compilation units, or
  /// blocks from a previous one could leak pointers into stale symbols.
  pub fn finalize(&mut self) {
    self.free.clear();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::{Expr, Immediate};
  use crate::ir::Target;
  use crate::symbol::{Linkage, Symbol};
  use crate::types::Type;
  use span::Span;

  #[test]
  fn acquire_on_an_empty_pool_yields_an_empty_block() {
    let mut pool = BlockPool::new();
    let block = pool.acquire();
    assert!(block.code.is_empty());
  }

  #[test]
  fn released_blocks_are_reused_and_cleared() {
    let mut pool = BlockPool::new();
    let mut block = pool.acquire();
    let sym = Symbol::object("x", Type::Int, Linkage::External);
    block.push(
      Target::new(sym, 0, Type::Int),
      Expr::immediate((0..1).into(), Type::Int, Immediate::Int(1)),
    );
    pool.release(block);

    let reused = pool.acquire();
    assert!(reused.code.is_empty());
  }

  #[test]
  #[should_panic]
  fn release_panics_if_pending_expression_was_not_resolved() {
    let mut pool = BlockPool::new();
    let mut block = pool.acquire();
    block.set_pending(Expr::immediate(
      Span::from(0..1),
      Type::Int,
      Immediate::Int(1),
    ));
    pool.release(block);
  }

  #[test]
  fn finalize_drops_all_pooled_blocks() {
    let mut pool = BlockPool::new();
    pool.release(pool.acquire());
    pool.finalize();
    // acquiring after finalize still works, just yields a fresh block
    let block = pool.acquire();
    assert!(block.code.is_empty());
  }
}
