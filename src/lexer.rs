#![allow(non_camel_case_types)]

use std::mem::discriminant;
use std::ops::Range;

use logos::Logos;
use span::Span;

#[derive(Clone, Copy, Debug, Logos, PartialEq)]
pub enum TokenKind {
  #[token("{")]
  Brk_CurlyL,
  #[token("}")]
  Brk_CurlyR,
  #[token("(")]
  Brk_ParenL,
  #[token(")")]
  Brk_ParenR,
  #[token("[")]
  Brk_SquareL,
  #[token("]")]
  Brk_SquareR,

  #[token(".")]
  Op_Dot,
  #[token(",")]
  Tok_Comma,
  #[token("=")]
  Op_Equal,
  #[token("&")]
  Op_Amp,

  #[regex(r"[0-9]+")]
  Lit_Int,
  #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
  Lit_Float,
  #[regex(r#""([^"\\]|\\.)*""#)]
  Lit_String,
  #[regex(r"'([^'\\]|\\.)'")]
  Lit_Char,
  #[regex("[a-zA-Z_][a-zA-Z0-9_]*")]
  Lit_Ident,

  #[doc(hidden)]
  #[regex(r"[ \t\n\r]+")]
  _Tok_Whitespace,

  #[error]
  Tok_Error,
  Tok_Eof,
}

impl TokenKind {
  pub fn name(&self) -> &'static str {
    use TokenKind::*;
    match self {
      Brk_CurlyL => "{",
      Brk_CurlyR => "}",
      Brk_ParenL => "(",
      Brk_ParenR => ")",
      Brk_SquareL => "[",
      Brk_SquareR => "]",
      Op_Dot => ".",
      Tok_Comma => ",",
      Op_Equal => "=",
      Op_Amp => "&",
      Lit_Int => "integer literal",
      Lit_Float => "floating literal",
      Lit_String => "string literal",
      Lit_Char => "character literal",
      Lit_Ident => "identifier",
      _Tok_Whitespace => "whitespace",
      Tok_Error => "invalid token",
      Tok_Eof => "end of input",
    }
  }
}

#[derive(Clone, Debug)]
pub struct Token {
  pub kind: TokenKind,
  pub span: Span,
}

impl Token {
  pub fn is(&self, kind: TokenKind) -> bool {
    discriminant(&self.kind) == discriminant(&kind)
  }
}

#[derive(Clone)]
pub struct Lexer<'src> {
  src: &'src str,
  inner: logos::Lexer<'src, TokenKind>,
  previous: Token,
  current: Token,
  eof: Token,
}

impl<'src> Lexer<'src> {
  pub fn new(src: &'src str) -> Self {
    let end = src.len();
    let eof = Token {
      kind: TokenKind::Tok_Eof,
      span: (end..end).into(),
    };

    let mut lex = Self {
      src,
      inner: TokenKind::lexer(src),
      previous: eof.clone(),
      current: eof.clone(),
      eof,
    };
    lex.bump();
    lex
  }

  #[inline]
  pub fn previous(&self) -> &Token {
    &self.previous
  }

  #[inline]
  pub fn current(&self) -> &Token {
    &self.current
  }

  #[inline]
  pub fn lexeme(&self, token: &Token) -> &'src str {
    &self.src[Range::from(token.span)]
  }

  /// Looks two tokens ahead without consuming anything. Used to decide
  /// whether a trailing comma begins a new element or closes the
  /// aggregate.
  pub fn peekn(&self, n: usize) -> Token {
    debug_assert!(n >= 1);
    if n == 1 {
      return self.current.clone();
    }
    let mut inner = self.inner.clone();
    let mut last = self.current.clone();
    for _ in 1..n {
      last = Self::next_token_from(&mut inner).unwrap_or_else(|| self.eof.clone());
    }
    last
  }

  #[inline]
  pub fn bump(&mut self) -> &Token {
    std::mem::swap(&mut self.previous, &mut self.current);
    self.current = self.next_token().unwrap_or_else(|| self.eof.clone());
    &self.previous
  }

  fn next_token(&mut self) -> Option<Token> {
    Self::next_token_from(&mut self.inner)
  }

  fn next_token_from(lexer: &mut logos::Lexer<'src, TokenKind>) -> Option<Token> {
    while let Some(kind) = lexer.next() {
      let span = lexer.span().into();
      match kind {
        TokenKind::_Tok_Whitespace => continue,
        _ => return Some(Token { kind, span }),
      }
    }
    None
  }
}
