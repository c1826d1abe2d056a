//! Recursive-descent parser consuming the lexer's token stream.
//!
//! Grammar (low to high precedence):
//!
//! ```text
//! pattern     := alternation
//! alternation := concat ( '|' concat )*
//! concat      := repeat*
//! repeat      := atom ( '*' | '+' | '?' | Range )?
//! atom        := Char | Class | shorthand | '.' | '(' alternation ')'
//! ```
//!
//! Out of scope per spec.md §1 beyond the interface it presents to the
//! lexer: this parser exists to drive the token stream to completion,
//! clear `LITERAL_STRING` on the first metasyntactic token, and surface
//! structural errors (unbalanced groups, stray quantifiers/operators).

use rxlex_lex::{Lexer, RegexFlags, Token};
use rxlex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
use rxlex_util::Span;

use crate::ast::{Ast, RepeatKind, Shorthand};

/// Drives a [`Lexer`] to completion, building an [`Ast`].
pub struct Parser<'src, 'flags, 'handler> {
    lexer: Lexer<'src>,
    flags: &'flags mut RegexFlags,
    handler: &'handler Handler,
    current: Option<Token>,
    structural_error: Option<&'static str>,
}

impl<'src, 'flags, 'handler> Parser<'src, 'flags, 'handler> {
    pub fn new(mut lexer: Lexer<'src>, flags: &'flags mut RegexFlags, handler: &'handler Handler) -> Self {
        let current = lexer.next_token(flags);
        Self {
            lexer,
            flags,
            handler,
            current,
            structural_error: None,
        }
    }

    /// Parses the full token stream, returning the resulting AST.
    ///
    /// Always consumes every token the lexer is willing to produce: if the
    /// lexer stopped early because of a lexical error, this returns
    /// whatever partial AST was built so far and records no structural
    /// error of its own - the driver gives lexical errors priority.
    ///
    /// A leftover `RParen` here is a stray, unmatched `)`: `parse_concat`
    /// breaks its loop on `RParen`/`Pipe` without consuming either, so a
    /// `)` with no enclosing `(` surfaces here rather than in `parse_atom`
    /// (whose own `LParen` arm consumes the `)` that legitimately closes a
    /// group). It gets the same "unbalanced group" diagnostic a dangling
    /// `(` gets.
    pub fn parse(&mut self) -> Ast {
        let ast = self.parse_alternation();
        if let Some(tok) = self.current.clone() {
            if !self.lexer.has_error() {
                match tok {
                    Token::RParen => {
                        self.report_structural("unbalanced group", DiagnosticCode::E_PARSE_UNBALANCED_GROUP)
                    }
                    _ => self.report_structural("unexpected token", DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN),
                }
            }
        }
        ast
    }

    pub fn has_structural_error(&self) -> bool {
        self.structural_error.is_some()
    }

    pub fn structural_error(&self) -> Option<&'static str> {
        self.structural_error
    }

    /// Whether the underlying lexer stopped on a lexical error rather than
    /// running out of input. The driver checks this first: a lexical error
    /// always outranks a structural one.
    pub fn has_lex_error(&self) -> bool {
        self.lexer.has_error()
    }

    /// Takes the underlying lexer's first recorded error, if any.
    pub fn take_lex_error(&mut self) -> Option<rxlex_lex::LexError> {
        self.lexer.take_error()
    }

    fn bump(&mut self) -> Option<Token> {
        let current = self.current.take();
        if let Some(tok) = &current {
            if !matches!(tok, Token::Char(_)) {
                self.flags.clear(RegexFlags::LITERAL_STRING);
            }
        }
        self.current = self.lexer.next_token(self.flags);
        current
    }

    fn report_structural(&mut self, message: &'static str, code: DiagnosticCode) {
        if self.structural_error.is_some() {
            return;
        }
        self.structural_error = Some(message);
        DiagnosticBuilder::error(message).code(code).span(Span::DUMMY).emit(self.handler);
    }

    fn parse_alternation(&mut self) -> Ast {
        let mut branches = vec![self.parse_concat()];
        while matches!(self.current, Some(Token::Pipe)) {
            self.bump();
            branches.push(self.parse_concat());
        }
        if branches.len() == 1 {
            branches.pop().unwrap()
        } else {
            Ast::Alternate(branches)
        }
    }

    fn parse_concat(&mut self) -> Ast {
        let mut nodes = Vec::new();
        loop {
            match &self.current {
                None => break,
                Some(Token::Pipe) | Some(Token::RParen) => break,
                _ => nodes.push(self.parse_repeat()),
            }
        }
        match nodes.len() {
            0 => Ast::Empty,
            1 => nodes.pop().unwrap(),
            _ => Ast::Concat(nodes),
        }
    }

    fn parse_repeat(&mut self) -> Ast {
        let atom = self.parse_atom();
        match self.current {
            Some(Token::Star) => {
                self.bump();
                Ast::Repeat(Box::new(atom), RepeatKind::Star)
            }
            Some(Token::Plus) => {
                self.bump();
                Ast::Repeat(Box::new(atom), RepeatKind::Plus)
            }
            Some(Token::Question) => {
                self.bump();
                Ast::Repeat(Box::new(atom), RepeatKind::Question)
            }
            Some(Token::Range(lo, hi)) => {
                self.bump();
                Ast::Repeat(Box::new(atom), RepeatKind::Bounded(lo, hi))
            }
            _ => atom,
        }
    }

    fn parse_atom(&mut self) -> Ast {
        match self.current.clone() {
            Some(Token::Char(b)) => {
                self.bump();
                Ast::Literal(b)
            }
            Some(Token::Dot) => {
                self.bump();
                Ast::AnyByte
            }
            Some(Token::Class(bitmap)) => {
                self.bump();
                Ast::Class(bitmap)
            }
            Some(Token::WordChar) => {
                self.bump();
                Ast::Shorthand(Shorthand::WordChar)
            }
            Some(Token::NonWordChar) => {
                self.bump();
                Ast::Shorthand(Shorthand::NonWordChar)
            }
            Some(Token::Space) => {
                self.bump();
                Ast::Shorthand(Shorthand::Space)
            }
            Some(Token::NonSpace) => {
                self.bump();
                Ast::Shorthand(Shorthand::NonSpace)
            }
            Some(Token::Digit) => {
                self.bump();
                Ast::Shorthand(Shorthand::Digit)
            }
            Some(Token::NonDigit) => {
                self.bump();
                Ast::Shorthand(Shorthand::NonDigit)
            }
            Some(Token::LParen) => {
                self.bump();
                let inner = self.parse_alternation();
                if matches!(self.current, Some(Token::RParen)) {
                    self.bump();
                } else if !self.lexer.has_error() {
                    self.report_structural("unbalanced group", DiagnosticCode::E_PARSE_UNBALANCED_GROUP);
                }
                Ast::Group(Box::new(inner))
            }
            // `RParen` and `Pipe` never actually reach this match: `parse_concat`'s
            // loop (above) breaks on both without calling `parse_repeat`/`parse_atom`,
            // so a stray `)` is diagnosed in `parse()`'s leftover-token check and a
            // bare `|` branch is handled by `parse_alternation`. These two arms, plus
            // the quantifier-with-no-atom case, exist only so this match stays
            // exhaustive if that call graph ever changes.
            Some(Token::RParen)
            | Some(Token::Pipe)
            | Some(Token::Star)
            | Some(Token::Plus)
            | Some(Token::Question)
            | Some(Token::Range(_, _)) => {
                if !self.lexer.has_error() {
                    self.report_structural("unexpected token", DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN);
                }
                self.bump();
                Ast::Empty
            }
            None => Ast::Empty,
        }
    }
}
