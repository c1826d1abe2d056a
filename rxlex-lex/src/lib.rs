//! Context-sensitive tokenizer for a regex sublanguage.
//!
//! Two lexical states - DEFAULT and CHAR_CLASS - share one token
//! alphabet. The tokenizer consults the escape decoder and mutates the
//! lex environment (class bitmap under construction, first-wins error
//! slot) as it scans; anchor flags are written onto the caller-owned
//! [`RegexFlags`] value passed to every [`lexer::Lexer::next_token`] call.

pub mod bitmap;
pub mod cursor;
pub mod env;
pub mod escape;
pub mod flags;
pub mod lexer;
pub mod token;

pub use env::{LexEnvironment, LexError};
pub use flags::RegexFlags;
pub use lexer::{Lexer, State};
pub use token::Token;

#[cfg(test)]
mod edge_cases;
