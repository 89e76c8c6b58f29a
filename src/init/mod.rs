//! The initializer engine: walks a brace-enclosed (or bare-scalar)
//! initializer list against a target's type, producing a flat sequence of
//! `Assignment`s with padding filled in. Each sub-module below corresponds
//! to one rule of that walk.

mod array_init;
mod common;
mod designator;
mod member;
mod post;
mod reader;
mod state;
mod struct_init;
mod union_init;
mod zero;

pub use state::CurrentObjectState;

use crate::ir::Block;
use crate::lexer::Lexer;
use crate::symbol::{SymbolTable, TempCounter};

/// Everything the walk needs threaded through it: the token stream, the
/// symbol table expressions resolve against, a source of fresh temporaries,
/// and the block pool used for scratch buffers at each nesting level.
pub struct Ctx<'src, 'sym> {
  pub lex: Lexer<'src>,
  pub symbols: &'sym SymbolTable,
  pub temps: TempCounter,
  pub pool: crate::pool::BlockPool,
}

impl<'src, 'sym> Ctx<'src, 'sym> {
  pub fn new(lex: Lexer<'src>, symbols: &'sym SymbolTable) -> Self {
    Ctx {
      lex,
      symbols,
      temps: TempCounter::new(),
      pool: crate::pool::BlockPool::new(),
    }
  }
}

/// Reads a full initializer for `sym` (braced or bare) off the front of
/// `ctx.lex` and returns the flat, padded assignment list for it. This is
/// the engine's single public entry point.
pub fn initializer(
  ctx: &mut Ctx,
  sym: std::rc::Rc<crate::symbol::Symbol>,
) -> crate::error::Result<Block> {
  use crate::lexer::TokenKind;
  use crate::types::is_array;

  let target = crate::ir::Target::new(sym.clone(), 0, sym.ty.clone());

  if ctx.lex.current().is(TokenKind::Brk_CurlyL) || is_array(&sym.ty) {
    let mut values = ctx.pool.acquire();
    let mut scratch = Block::new();
    member::initialize_object(ctx, &mut scratch, &mut values, target.clone())?;
    debug_assert!(!scratch.has_init_value());

    let padded = post::postprocess_object_initialization(ctx, values, target)?;
    // Any calls hoisted into temporaries while reading expressions must run
    // before the padded assignment list that consumes them.
    let mut result = scratch;
    result.code.extend(padded.code);
    Ok(result)
  } else {
    let mut block = Block::new();
    reader::read_initializer_element(ctx, &mut block, &sym)?;
    let expr = block.take_pending().expect("read_initializer_element always sets a pending expression");
    crate::ir::eval_assign(&mut block, &mut ctx.temps, target, expr);
    Ok(block)
  }
}
