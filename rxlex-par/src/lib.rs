//! A minimal recursive-descent parser for the regex sublanguage tokenized
//! by `rxlex-lex`.
//!
//! This crate is the external collaborator the lexer is designed around:
//! it owns no lexical knowledge of its own, pulls tokens one at a time
//! from a [`rxlex_lex::Lexer`], and is responsible for the two things the
//! lexer deliberately leaves to its caller - clearing `LITERAL_STRING` once
//! the pattern stops being a bare literal, and catching structural errors
//! (unbalanced groups, stray operators) that are above the lexer's level.

pub mod ast;
pub mod parser;

pub use ast::{Ast, RepeatKind, Shorthand};
pub use parser::Parser;
