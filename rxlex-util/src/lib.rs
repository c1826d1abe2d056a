//! Ambient support crate for the regex lexer: source spans, diagnostics,
//! and the error types shared by the lexing and driving crates.
//!
//! This crate carries no regex-specific semantics; it is infrastructure
//! that `rxlex-lex` and `rxlex-drv` build on.

pub mod diagnostic;
pub mod error;
pub mod span;

pub use error::{DiagnosticError, DiagnosticResult, SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};
