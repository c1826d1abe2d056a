//! Lexical environment threaded through every tokenizer call.
//!
//! The teacher's text lexer reached for thread-local "extra data" in a few
//! places; this lexer instead threads one explicit `LexEnvironment` value
//! through every call. It owns every piece of per-invocation scratch state:
//! the class bitmap under construction, the class-negation flag, the
//! position of the last `$` sighting, and the first-wins error slot.

use crate::bitmap::ClassBitmap;
use rxlex_util::Span;

/// A single captured lexical error: message and the span it occurred at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexError {
    pub message: &'static str,
    pub span: Span,
}

/// Per-invocation lexer state, destroyed when the invocation returns.
#[derive(Debug)]
pub struct LexEnvironment {
    class_bitmap: ClassBitmap,
    negated_class: bool,
    last_dollar_pos: Option<usize>,
    first_error: Option<LexError>,
}

impl LexEnvironment {
    pub fn new() -> Self {
        Self {
            class_bitmap: ClassBitmap::new(),
            negated_class: false,
            last_dollar_pos: None,
            first_error: None,
        }
    }

    /// Resets the in-progress class bitmap at the start of a new class.
    pub fn begin_class(&mut self, negated: bool) {
        self.class_bitmap.clear_all();
        self.negated_class = negated;
    }

    pub fn class_bitmap_mut(&mut self) -> &mut ClassBitmap {
        &mut self.class_bitmap
    }

    pub fn is_negated_class(&self) -> bool {
        self.negated_class
    }

    /// Finalizes and returns the accumulated class bitmap, complementing it
    /// first if the class was negated.
    pub fn finish_class(&mut self) -> ClassBitmap {
        let mut bitmap = self.class_bitmap;
        if self.negated_class {
            bitmap.complement_in_place();
        }
        bitmap
    }

    pub fn record_dollar(&mut self, position_after: usize) {
        self.last_dollar_pos = Some(position_after);
    }

    pub fn last_dollar_pos(&self) -> Option<usize> {
        self.last_dollar_pos
    }

    /// Records `message` at `span` unless an error has already been recorded.
    pub fn report_error(&mut self, message: &'static str, span: Span) {
        if self.first_error.is_none() {
            self.first_error = Some(LexError { message, span });
        }
    }

    pub fn has_error(&self) -> bool {
        self.first_error.is_some()
    }

    pub fn first_error(&self) -> Option<LexError> {
        self.first_error
    }

    pub fn take_first_error(&mut self) -> Option<LexError> {
        self.first_error.take()
    }
}

impl Default for LexEnvironment {
    fn default() -> Self {
        Self::new()
    }
}
