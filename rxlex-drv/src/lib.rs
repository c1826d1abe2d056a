//! Driver and entry point: wires the lexer, the external parser, and the
//! ambient diagnostic infrastructure into the single public function,
//! [`parse_regex`].
//!
//! Grounded in the teacher's `faxc-drv::Session`, reduced to the scope this
//! dialect actually needs: one in-memory pattern in, one owned result out,
//! no file I/O, no CLI, no multi-phase pipeline - `rxlex-lex` and
//! `rxlex-par` are the only two phases there are.

use rxlex_lex::{Lexer, RegexFlags};
use rxlex_par::{Ast, Parser};
use rxlex_util::diagnostic::Handler;
use rxlex_util::SourceMap;

const SOURCE_NAME: &str = "<regex>";

/// The outcome category of a [`parse_regex`] call, mirroring the four-way
/// taxonomy of lexical, structural, resource, and success outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    Ok,
    /// A lexical error: malformed escape, bad repeat interval, unterminated
    /// class, non-ASCII byte. Always takes priority over `Structural`.
    InvalidRegex,
    /// A structural error the external parser caught: unbalanced group, a
    /// trailing operator with no left operand.
    Structural,
    /// Reserved for interface parity with the taxonomy this dialect is
    /// drawn from. Rust's allocator aborts the process on exhaustion rather
    /// than returning control here, so this variant is never constructed by
    /// [`parse_regex`] - see DESIGN.md.
    Resource,
}

/// The result of compiling one regex pattern: flags discovered during
/// lexing, an error code, an optional rendered message, and (on success)
/// the parsed AST. Returned by value even on failure, so a caller always
/// has somewhere to read the message from.
#[derive(Debug)]
pub struct RegexObject {
    pub flags: RegexFlags,
    pub error_code: ErrorCode,
    pub error_message: Option<String>,
    pub ast: Option<Ast>,
}

impl RegexObject {
    fn ok(flags: RegexFlags, ast: Ast) -> Self {
        Self {
            flags,
            error_code: ErrorCode::Ok,
            error_message: None,
            ast: Some(ast),
        }
    }

    fn invalid(flags: RegexFlags, message: String) -> Self {
        Self {
            flags,
            error_code: ErrorCode::InvalidRegex,
            error_message: Some(message),
            ast: None,
        }
    }

    fn structural(flags: RegexFlags, message: String) -> Self {
        Self {
            flags,
            error_code: ErrorCode::Structural,
            error_message: Some(message),
            ast: None,
        }
    }
}

/// Compiles `source` into a [`RegexObject`].
///
/// `LITERAL_STRING` starts set and is cleared by the parser the moment it
/// consumes anything other than a bare literal byte. A lexical error always
/// wins over a structural one: if both would apply (for example, a
/// dangling open group whose body also contains a bad repeat interval),
/// the lexical message is the one the caller sees.
pub fn parse_regex(source: &[u8]) -> RegexObject {
    let mut flags = RegexFlags::empty();
    flags.set(RegexFlags::LITERAL_STRING);

    let handler = Handler::new();
    let mut source_map = SourceMap::new();
    let file_id = source_map.add_file(SOURCE_NAME, String::from_utf8_lossy(source).into_owned());

    let lexer = Lexer::new(source, &mut flags);
    let mut parser = Parser::new(lexer, &mut flags, &handler);
    let ast = parser.parse();

    if let Some(lex_error) = parser.take_lex_error() {
        let span = lex_error.span.with_file_id(file_id);
        let message = match source_map.format_span(span) {
            Some(rendered) => format!("{}\n{}", lex_error.message, rendered),
            None => lex_error.message.to_string(),
        };
        return RegexObject::invalid(flags, message);
    }

    if handler.has_errors() {
        let message = handler
            .diagnostics()
            .into_iter()
            .find(|d| d.code.is_some())
            .map(|d| d.message)
            .unwrap_or_else(|| "unexpected token".to_string());
        return RegexObject::structural(flags, message);
    }

    RegexObject::ok(flags, ast)
}

/// Renders a caret-annotated description of `object`'s error, if any, using
/// the same rendering the lexer's own span would produce. Library
/// consumers that want a human-readable message without re-running
/// [`parse_regex`] with their own `SourceMap` can use this instead.
pub fn describe(object: &RegexObject) -> Option<String> {
    object.error_message.clone()
}
