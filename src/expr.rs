//! A minimal expression representation.
//!
//! Type-checking expressions beyond designator-vs-value and
//! string-literal-vs-scalar is out of scope here. What's modeled is
//! exactly enough to decide the load-time-constant rule, the
//! string-literal shortcut, and call-reordering: literals, references to
//! symbols (which may decay to an address), address-of, and calls.

use std::rc::Rc;

use span::Span;

use crate::symbol::{Linkage, Symbol, SymbolKind};
use crate::types::Type;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Immediate {
  Int(i64),
  Float(f64),
}

#[derive(Clone, Debug)]
pub enum ExprKind {
  Immediate(Immediate),
  /// A bare reference to a symbol. For arrays and functions this is an
  /// identity expression that decays to an address; for plain objects it
  /// is not, because reading them is not computable at load time.
  Direct(Rc<Symbol>),
  /// `&symbol`.
  Address(Rc<Symbol>),
  Call(Box<Expr>, Vec<Expr>),
}

#[derive(Clone, Debug)]
pub struct Expr {
  pub span: Span,
  pub ty: Type,
  pub kind: ExprKind,
}

impl Expr {
  pub fn immediate(span: Span, ty: Type, value: Immediate) -> Expr {
    Expr {
      span,
      ty,
      kind: ExprKind::Immediate(value),
    }
  }

  pub fn direct(span: Span, symbol: Rc<Symbol>) -> Expr {
    let ty = symbol.ty.clone();
    Expr {
      span,
      ty,
      kind: ExprKind::Direct(symbol),
    }
  }

  pub fn address(span: Span, symbol: Rc<Symbol>) -> Expr {
    let ty = Type::pointer(symbol.ty.clone());
    Expr {
      span,
      ty,
      kind: ExprKind::Address(symbol),
    }
  }

  pub fn call(span: Span, ty: Type, callee: Expr, args: Vec<Expr>) -> Expr {
    Expr {
      span,
      ty,
      kind: ExprKind::Call(Box::new(callee), args),
    }
  }

  /// A zero-valued immediate of `ty`, the Rust counterpart of the C
  /// engine's cached `var__immediate_zero` prototype. Unlike that prototype
  /// this doesn't need a finalizer: it's just a pure constructor, not
  /// shared mutable state.
  pub fn zero(span: Span, ty: Type) -> Expr {
    use crate::types::Type::*;
    let value = match ty {
      Float | Double | LDouble => Immediate::Float(0.0),
      _ => Immediate::Int(0),
    };
    Expr::immediate(span, ty, value)
  }
}

/// True if `expr` has no side effects of its own — i.e. it isn't a call.
pub fn is_identity(expr: &Expr) -> bool {
  !matches!(expr.kind, ExprKind::Call(..))
}

/// True if `expr` is a string literal: an identity reference to a literal
/// symbol of array type.
pub fn is_string_literal(expr: &Expr) -> bool {
  matches!(
    &expr.kind,
    ExprKind::Direct(sym) if matches!(sym.kind, SymbolKind::Literal) && crate::types::is_array(&sym.ty)
  )
}

/// The load-time-constant rule: an immediate, the address of a symbol
/// with linkage, or a direct reference to an array/function (which decays
/// to such an address).
pub fn is_loadtime_constant(expr: &Expr) -> bool {
  if !is_identity(expr) {
    return false;
  }
  match &expr.kind {
    ExprKind::Immediate(_) => true,
    ExprKind::Direct(sym) => {
      (crate::types::is_array(&sym.ty) || crate::types::is_function(&sym.ty))
        && sym.linkage != Linkage::None
    }
    ExprKind::Address(sym) => sym.linkage != Linkage::None,
    ExprKind::Call(..) => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::symbol::Symbol;

  fn span() -> Span {
    (0..1).into()
  }

  #[test]
  fn immediate_is_loadtime_constant() {
    let e = Expr::immediate(span(), Type::Int, Immediate::Int(1));
    assert!(is_loadtime_constant(&e));
  }

  #[test]
  fn direct_reference_to_plain_object_is_not_constant() {
    let sym = Symbol::object("x", Type::Int, Linkage::External);
    let e = Expr::direct(span(), sym);
    assert!(!is_loadtime_constant(&e));
  }

  #[test]
  fn address_of_linked_symbol_is_constant() {
    let sym = Symbol::object("x", Type::Int, Linkage::External);
    let e = Expr::address(span(), sym);
    assert!(is_loadtime_constant(&e));
  }

  #[test]
  fn address_of_no_linkage_symbol_is_not_constant() {
    let sym = Symbol::object("x", Type::Int, Linkage::None);
    let e = Expr::address(span(), sym);
    assert!(!is_loadtime_constant(&e));
  }

  #[test]
  fn call_is_never_constant() {
    let f = Symbol::function("f", Type::Int, Linkage::External);
    let callee = Expr::direct(span(), f);
    let e = Expr::call(span(), Type::Int, callee, vec![]);
    assert!(!is_loadtime_constant(&e));
  }
}
