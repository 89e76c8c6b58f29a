use super::*;
use crate::lexer::Lexer;
use crate::symbol::{Linkage, Symbol, SymbolTable};
use crate::types::Type;

#[test]
fn scalar_member_with_spurious_braces_is_accepted() {
  let symbols = SymbolTable::new();
  let mut ctx = Ctx::new(Lexer::new("{ 5 } }"), &symbols);
  let sym = Symbol::object("x", Type::Int, Linkage::None);
  let target = Target::new(sym, 0, Type::Int);
  let mut block = Block::new();
  let mut values = Block::new();
  initialize_member(&mut ctx, &mut block, &mut values, target).unwrap();
  assert_eq!(values.code.len(), 1);
}

#[test]
fn flexible_array_member_is_rejected() {
  let symbols = SymbolTable::new();
  let mut ctx = Ctx::new(Lexer::new("1 }"), &symbols);
  let ty = Type::array(Type::Int, None);
  let sym = Symbol::object("x", ty.clone(), Linkage::None);
  let target = Target::new(sym, 0, ty);
  let mut block = Block::new();
  let mut values = Block::new();
  assert!(initialize_member(&mut ctx, &mut block, &mut values, target).is_err());
}

#[test]
fn initialize_object_reads_scalar_without_braces() {
  let symbols = SymbolTable::new();
  let mut ctx = Ctx::new(Lexer::new("7"), &symbols);
  let sym = Symbol::object("x", Type::Int, Linkage::None);
  let target = Target::new(sym, 0, Type::Int);
  let mut block = Block::new();
  let mut values = Block::new();
  initialize_object(&mut ctx, &mut block, &mut values, target).unwrap();
  assert_eq!(values.code.len(), 1);
}
