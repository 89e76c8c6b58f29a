/// Which syntactic position a nested initializer list is being read from.
/// Determines whether a trailing `, [` / `, .` continues the current
/// aggregate (because we're inside its own brace pair) or belongs to an
/// enclosing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurrentObjectState {
  /// Reading directly inside this object's own `{ ... }`.
  Current,
  /// Reached via a `.member` or `[index]` designator.
  Designator,
  /// Reached via brace elision (no enclosing `{` of its own).
  Member,
}
