use crate::error::Result;
use crate::ir::{Assignment, Block, Target};
use crate::types::size_of;

use super::zero::{initialize_padding, initialize_trailing_padding};
use super::Ctx;

/// Reorders assignments to increasing offset and drops duplicate writes to
/// the same element, keeping only the last of any repeats (a later
/// designator overriding an earlier one). Plain insertion sort: the list is
/// almost always already close to sorted, since most initializers are
/// written in source order.
fn sort_and_trim(code: &mut Vec<Assignment>) {
  for i in 1..code.len() {
    let mut j = i;
    while j > 0 && code[j - 1].target.offset > code[j].target.offset {
      code.swap(j - 1, j);
      j -= 1;
    }
  }

  let mut i = 1;
  while i < code.len() {
    let same = code[i - 1].target.offset == code[i].target.offset
      && code[i - 1].target.field_offset == code[i].target.field_offset;
    if same {
      debug_assert_eq!(
        code[i - 1].target.field_width,
        code[i].target.field_width,
        "two writes to the same offset must agree on field_width"
      );
      code.remove(i - 1);
    } else {
      i += 1;
    }
  }
}

/// Fills in every gap between consecutive assignments (and before the
/// first, and after the last) with zero-writes, producing a sequence that
/// covers the whole object with no holes.
pub fn postprocess_object_initialization(
  ctx: &mut Ctx,
  mut values: Block,
  target: Target,
) -> Result<Block> {
  debug_assert_eq!(target.offset, 0);

  sort_and_trim(&mut values.code);

  let mut block = ctx.pool.acquire();
  let total_size = size_of(&target.ty);
  let mut bitfield_size: usize = 0;
  let mut cursor = target;

  for (i, assignment) in values.code.drain(..).enumerate() {
    let field = assignment.target.clone();
    if i == 0 {
      cursor.ty = field.ty.clone();
    }

    initialize_padding(ctx, &mut block, cursor.clone(), &field)?;
    block.code.push(assignment);
    cursor.ty = field.ty.clone();
    cursor.offset = field.offset;

    if field.is_bitfield() {
      bitfield_size = bitfield_size.max(size_of(&field.ty));
      cursor.field_offset = field.field_offset + field.field_width;
      cursor.field_width = 0;
      if cursor.field_offset as usize == bitfield_size * 8 {
        cursor.field_offset = 0;
        cursor.offset += bitfield_size;
      }
    } else {
      cursor.field_offset = 0;
      cursor.field_width = 0;
      cursor.offset += size_of(&field.ty);
      bitfield_size = 0;
    }
  }

  initialize_trailing_padding(ctx, &mut block, cursor, total_size, bitfield_size)?;

  #[cfg(debug_assertions)]
  validate(&block);

  Ok(block)
}

/// Checks the invariant post-processing is supposed to uphold: the output
/// is a contiguous run of assignments with no gaps and no overlaps.
#[cfg(debug_assertions)]
fn validate(block: &Block) {
  let mut cursor = Target {
    symbol: match block.code.first() {
      Some(a) => a.target.symbol.clone(),
      None => return,
    },
    offset: 0,
    ty: crate::types::Type::Char,
    field_offset: 0,
    field_width: 0,
  };

  for assignment in &block.code {
    let field = &assignment.target;
    debug_assert!(cursor.offset <= field.offset);
    if cursor.offset < field.offset {
      debug_assert_eq!(field.offset - cursor.offset, size_of(&cursor.ty));
    } else {
      debug_assert_eq!(cursor.offset, field.offset);
      debug_assert_eq!(cursor.field_offset + cursor.field_width, field.field_offset);
    }
    cursor = field.clone();
  }
}
