use span::Span;

use crate::error::{Error, Result};
use crate::ir::Target;
use crate::types::{self, Member, Type};

/// Rebinds `target` onto `member`, found `offset` bytes into the enclosing
/// struct/union.
pub fn access_member(target: &Target, member: &Member, offset: usize) -> Target {
  let base = Target { offset, ..target.clone() };
  base
    .offset_by(member.offset, member.ty.clone())
    .with_bitfield(member.field_offset, member.field_width)
}

/// Looks up `name` on `ty`, raising [`Error::UnknownMember`] if absent.
/// Returns the member together with its index, so a struct walk resuming
/// after a designator can resync from there.
pub fn get_named_member<'a>(ty: &'a Type, name: &str, span: Span) -> Result<(&'a Member, usize)> {
  types::find_type_member(ty, name).ok_or_else(|| Error::UnknownMember {
    ty: ty.to_string(),
    name: name.to_string(),
    span,
  })
}

pub fn get_member(ty: &Type, i: usize) -> &Member {
  types::get_member(ty, i)
}
