use super::*;
use crate::lexer::Lexer;
use crate::symbol::{Linkage, Symbol, SymbolTable};
use crate::types::{Member, Type};

fn point_type() -> Type {
  let members = vec![
    Member {
      name: "x".into(),
      ty: Type::Int,
      offset: 0,
      field_offset: 0,
      field_width: 0,
    },
    Member {
      name: "y".into(),
      ty: Type::Int,
      offset: 4,
      field_offset: 0,
      field_width: 0,
    },
  ];
  Type::r#struct(Some("Point".into()), members, 8)
}

#[test]
fn initializes_members_positionally() {
  let symbols = SymbolTable::new();
  let mut ctx = Ctx::new(Lexer::new("1, 2 }"), &symbols);
  let sym = Symbol::object("p", point_type(), Linkage::None);
  let target = Target::new(sym, 0, point_type());
  let mut block = Block::new();
  let mut values = Block::new();
  initialize_struct(&mut ctx, &mut block, &mut values, target, CurrentObjectState::Current).unwrap();
  assert_eq!(values.code.len(), 2);
  assert_eq!(values.code[0].target.offset, 0);
  assert_eq!(values.code[1].target.offset, 4);
}

#[test]
fn designator_jumps_to_named_member_and_resumes_after() {
  let symbols = SymbolTable::new();
  let mut ctx = Ctx::new(Lexer::new(".y = 9 }"), &symbols);
  let sym = Symbol::object("p", point_type(), Linkage::None);
  let target = Target::new(sym, 0, point_type());
  let mut block = Block::new();
  let mut values = Block::new();
  initialize_struct(&mut ctx, &mut block, &mut values, target, CurrentObjectState::Current).unwrap();
  assert_eq!(values.code.len(), 1);
  assert_eq!(values.code[0].target.offset, 4);
}

fn struct_with_anonymous_union() -> Type {
  let members = vec![
    Member {
      name: "x".into(),
      ty: Type::Int,
      offset: 0,
      field_offset: 0,
      field_width: 0,
    },
    // An anonymous union's members: both share the union's offset, so only
    // the first one is ever reached by the positional walk.
    Member {
      name: "a".into(),
      ty: Type::Int,
      offset: 4,
      field_offset: 0,
      field_width: 0,
    },
    Member {
      name: "b".into(),
      ty: Type::Int,
      offset: 4,
      field_offset: 0,
      field_width: 0,
    },
    Member {
      name: "z".into(),
      ty: Type::Int,
      offset: 8,
      field_offset: 0,
      field_width: 0,
    },
  ];
  Type::r#struct(Some("WithUnion".into()), members, 12)
}

#[test]
fn positional_walk_skips_overlapping_anonymous_union_member() {
  let symbols = SymbolTable::new();
  let mut ctx = Ctx::new(Lexer::new("1, 2, 3 }"), &symbols);
  let ty = struct_with_anonymous_union();
  let sym = Symbol::object("w", ty.clone(), Linkage::None);
  let target = Target::new(sym, 0, ty);
  let mut block = Block::new();
  let mut values = Block::new();
  initialize_struct(&mut ctx, &mut block, &mut values, target, CurrentObjectState::Current).unwrap();

  // x, a and z are written; b is skipped because it shares a's offset.
  assert_eq!(values.code.len(), 3);
  let offsets: Vec<usize> = values.code.iter().map(|a| a.target.offset).collect();
  assert_eq!(offsets, vec![0, 4, 8]);
}

#[test]
fn whole_object_assignment_short_circuits_member_walk() {
  let pt = point_type();
  let mut symbols = SymbolTable::new();
  symbols.declare(Symbol::object("q", pt.clone(), Linkage::External));
  let mut ctx = Ctx::new(Lexer::new("q }"), &symbols);
  let sym = Symbol::object("p", pt.clone(), Linkage::None);
  let target = Target::new(sym, 0, pt);
  let mut block = Block::new();
  let mut values = Block::new();
  initialize_struct_or_union(
    &mut ctx,
    &mut block,
    &mut values,
    target,
    CurrentObjectState::Current,
  )
  .unwrap();
  assert_eq!(values.code.len(), 1);
  assert_eq!(values.code[0].target.offset, 0);
}
