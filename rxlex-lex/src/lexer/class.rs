//! CHAR_CLASS-state tokenizer: ranges, shorthand unions, escapes, and
//! class closure.

use super::core::{Lexer, State, Step};
use crate::bitmap::{digit_class, space_class, word_class, ClassBitmap};
use crate::escape::decode_escape;
use crate::token::Token;

impl<'a> Lexer<'a> {
    pub(crate) fn step_class(&mut self) -> Step {
        let b = match self.cursor.current_byte() {
            Some(b) => b,
            None => {
                let span = self.span_at_current(0);
                self.env.report_error("missing terminating ] for character class", span);
                return Step::Error;
            }
        };

        match b {
            b']' => {
                self.cursor.advance();
                let bitmap = self.env.finish_class();
                self.state = State::Default;
                Step::Emit(Token::Class(bitmap))
            }
            b'\\' => self.step_class_escape(),
            other => {
                self.cursor.advance();
                self.consume_member(other)
            }
        }
    }

    fn step_class_escape(&mut self) -> Step {
        match self.cursor.peek_byte(1) {
            Some(b']') => {
                self.cursor.advance_n(2);
                self.env.class_bitmap_mut().set(b']');
                Step::Continue
            }
            Some(b'w') => {
                self.cursor.advance_n(2);
                self.union_shorthand(word_class());
                Step::Continue
            }
            Some(b'W') => {
                self.cursor.advance_n(2);
                self.union_shorthand(negate(word_class()));
                Step::Continue
            }
            Some(b's') => {
                self.cursor.advance_n(2);
                self.union_shorthand(space_class());
                Step::Continue
            }
            Some(b'S') => {
                self.cursor.advance_n(2);
                self.union_shorthand(negate(space_class()));
                Step::Continue
            }
            Some(b'd') => {
                self.cursor.advance_n(2);
                self.union_shorthand(digit_class());
                Step::Continue
            }
            Some(b'D') => {
                self.cursor.advance_n(2);
                self.union_shorthand(negate(digit_class()));
                Step::Continue
            }
            _ => {
                self.cursor.advance(); // consume backslash
                match decode_escape(&mut self.cursor) {
                    Ok(byte) => self.consume_member(byte),
                    Err(msg) => {
                        let span = self.span_at_current(0);
                        self.env.report_error(msg, span);
                        Step::Error
                    }
                }
            }
        }
    }

    fn union_shorthand(&mut self, bitmap: ClassBitmap) {
        self.env.class_bitmap_mut().union_with(&bitmap);
    }

    /// Consumes a class member already read as `first` (cursor positioned
    /// just past it). Checks for a trailing `-b` to form a range per the
    /// CHAR_CLASS range rule; this is the single path both a literally-read
    /// byte and an escape-decoded byte go through, so a range that begins
    /// with an escape's result (`[\x61-z]`) works the same as a literal one.
    pub(crate) fn consume_member(&mut self, first: u8) -> Step {
        if self.cursor.current_byte() == Some(b'-') {
            let after_dash = self.cursor.peek_byte(1);
            if after_dash.is_some() && after_dash != Some(b']') {
                self.cursor.advance(); // consume '-'
                let end_byte = if self.cursor.current_byte() == Some(b'\\') {
                    self.cursor.advance(); // consume backslash
                    match decode_escape(&mut self.cursor) {
                        Ok(b) => b,
                        Err(msg) => {
                            let span = self.span_at_current(0);
                            self.env.report_error(msg, span);
                            return Step::Error;
                        }
                    }
                } else {
                    let b = self.cursor.current_byte().unwrap();
                    self.cursor.advance();
                    b
                };

                if end_byte < first {
                    let span = self.span_at_current(0);
                    self.env.report_error("bad character range", span);
                    return Step::Error;
                }
                self.env.class_bitmap_mut().set_range(first, end_byte);
                return Step::Continue;
            }
        }
        self.env.class_bitmap_mut().set(first);
        Step::Continue
    }
}

fn negate(mut bitmap: ClassBitmap) -> ClassBitmap {
    bitmap.complement_in_place();
    bitmap
}
