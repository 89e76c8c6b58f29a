use super::*;
use crate::lexer::Lexer;
use crate::symbol::{Linkage, Symbol, SymbolTable};
use crate::types::{Member, Type};

fn union_type() -> Type {
  let members = vec![
    Member {
      name: "p".into(),
      ty: Type::Int,
      offset: 0,
      field_offset: 0,
      field_width: 0,
    },
    Member {
      name: "q".into(),
      ty: Type::Int,
      offset: 0,
      field_offset: 0,
      field_width: 0,
    },
  ];
  Type::union(None, members, 4)
}

#[test]
fn initializes_first_member_without_designator() {
  let symbols = SymbolTable::new();
  let mut ctx = Ctx::new(Lexer::new("1 }"), &symbols);
  let sym = Symbol::object("u", union_type(), Linkage::None);
  let target = Target::new(sym, 0, union_type());
  let mut block = Block::new();
  let mut values = Block::new();
  initialize_union(&mut ctx, &mut block, &mut values, target, CurrentObjectState::Current).unwrap();
  assert_eq!(values.code.len(), 1);
}

#[test]
fn later_designator_discards_earlier_members_writes() {
  let symbols = SymbolTable::new();
  let mut ctx = Ctx::new(Lexer::new("1, .q = 2 }"), &symbols);
  let sym = Symbol::object("u", union_type(), Linkage::None);
  let target = Target::new(sym, 0, union_type());
  let mut block = Block::new();
  let mut values = Block::new();
  initialize_union(&mut ctx, &mut block, &mut values, target, CurrentObjectState::Current).unwrap();
  // only the `.q = 2` assignment should survive
  assert_eq!(values.code.len(), 1);
  assert_eq!(values.code[0].target.offset, 0);
}
