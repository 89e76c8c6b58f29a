use span::Span;

use crate::error::{Error, Result};
use crate::expr::Expr;
use crate::ir::{eval_assign, Block, Target};
use crate::types::{self, Type};

use super::Ctx;

/// Zero-fills `target` using ordinary scalar assignments, recursing into
/// arrays, structs and unions member by member. Structs and unions are
/// reinterpreted as an array of `long` (or `char`, if their size isn't a
/// multiple of 8) so the same elementwise loop handles both.
pub fn zero_initialize(ctx: &mut Ctx, values: &mut Block, target: Target) -> Result<()> {
  let size = types::size_of(&target.ty);

  match &target.ty {
    Type::Struct(_) | Type::Union(_) => {
      debug_assert!(size > 0);
      let synthetic = if size % 8 != 0 {
        Type::array(Type::Char, Some(size))
      } else {
        Type::array(Type::Long, Some(size / 8))
      };
      zero_elementwise(ctx, values, target, synthetic)
    }
    Type::Array(_) => {
      let array_ty = target.ty.clone();
      zero_elementwise(ctx, values, target, array_ty)
    }
    Type::Bool
    | Type::Char
    | Type::Short
    | Type::Int
    | Type::Long
    | Type::Float
    | Type::Double
    | Type::LDouble
    | Type::Pointer(_) => {
      let span = Span::default();
      let expr = Expr::zero(span, target.ty.clone());
      eval_assign(values, &mut ctx.temps, target, expr);
      Ok(())
    }
    _ => Err(Error::UnsupportedZeroInit {
      ty: target.ty.to_string(),
      span: Span::default(),
    }),
  }
}

fn zero_elementwise(
  ctx: &mut Ctx,
  values: &mut Block,
  target: Target,
  array_ty: Type,
) -> Result<()> {
  let elem = types::type_next(&array_ty);
  let elem_size = types::size_of(&elem);
  let total = types::size_of(&array_ty);
  let n = if elem_size == 0 { 0 } else { total / elem_size };

  for i in 0..n {
    let element_target = target.offset_by(i * elem_size, elem.clone());
    zero_initialize(ctx, values, element_target)?;
  }
  Ok(())
}

/// Zero-fills `bytes` bytes starting at `target`, choosing the widest
/// aligned scalar type at each step (an 8-byte run becomes one `long`
/// write rather than eight `char` writes).
pub fn zero_initialize_bytes(
  ctx: &mut Ctx,
  values: &mut Block,
  mut target: Target,
  mut bytes: usize,
) -> Result<()> {
  target.field_offset = 0;
  target.field_width = 0;

  while bytes > 0 {
    let mut size = bytes % 8;
    if size == 0 {
      size = 8;
    }

    target.ty = match size {
      1 => Type::Char,
      2 => Type::Short,
      4 => Type::Int,
      8 => Type::Long,
      _ => {
        size = 1;
        Type::Char
      }
    };

    zero_initialize(ctx, values, target.clone())?;
    target.offset += types::size_of(&target.ty);
    bytes -= size;
  }

  Ok(())
}

/// Zero-fills the gap between `target`, the first not-yet-initialized
/// location, and `field`, the next assignment actually present in the
/// sorted list.
pub fn initialize_padding(
  ctx: &mut Ctx,
  block: &mut Block,
  mut target: Target,
  field: &Target,
) -> Result<()> {
  if target.offset < field.offset {
    if target.field_offset != 0 {
      let bits = types::size_of(&target.ty) * 8;
      target.field_width = bits - target.field_offset;
      zero_initialize(ctx, block, target.clone())?;
      target.offset += types::size_of(&target.ty);
      target.field_offset = 0;
      target.field_width = 0;
    }

    let padding = field.offset - target.offset;
    log::debug!("zero-fill padding: offset={} bytes={}", target.offset, padding);
    zero_initialize_bytes(ctx, block, target, padding)?;
  } else if target.field_offset < field.field_offset {
    target.field_width = field.field_offset - target.field_offset;
    zero_initialize(ctx, block, target)?;
  }

  Ok(())
}

/// Zero-fills from the last assignment's field up to the end of the
/// object, including the remaining bits of a trailing bit-field's storage
/// unit.
pub fn initialize_trailing_padding(
  ctx: &mut Ctx,
  block: &mut Block,
  mut target: Target,
  size: usize,
  bitfield_size: usize,
) -> Result<()> {
  debug_assert!(size >= target.offset);

  if target.field_offset != 0 {
    let (ty, bits) = match bitfield_size {
      1 => (Type::Char, 8),
      2 => (Type::Short, 16),
      4 => (Type::Int, 32),
      _ => {
        debug_assert_eq!(bitfield_size, 8);
        (Type::Long, 64)
      }
    };
    target.ty = ty;
    target.field_width = bits - target.field_offset;
    debug_assert!(target.field_width > 0);
    zero_initialize(ctx, block, target.clone())?;
    target.offset += types::size_of(&target.ty);
  }

  debug_assert!(size >= target.offset);
  if size > target.offset {
    log::debug!(
      "zero-fill trailing: offset={} bytes={}",
      target.offset,
      size - target.offset
    );
    zero_initialize_bytes(ctx, block, target, size - target.offset)?;
  }

  Ok(())
}
