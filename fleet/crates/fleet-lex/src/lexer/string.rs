//! String literal scanning.
//!
//! Fleet strings open with `"` or `'` and run to the matching quote. A `\`
//! escapes the next character, which is kept verbatim (this is how a quote
//! character gets into a string). The token text includes the quotes and the
//! unprocessed escapes; interpreting them is not the lexer's job.

use fleet_util::ParseError;

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes a string literal and returns its text, quotes included.
    ///
    /// Fails with [`ParseError::UnclosedString`] if the input ends before
    /// the matching quote, and [`ParseError::UnterminatedEscape`] if a `\`
    /// is the last character of the input.
    pub(super) fn take_string(&mut self) -> Result<String, ParseError> {
        let start = self.cursor.position();
        let quote = self.cursor.current_char();
        self.cursor.advance();

        let mut closed = false;
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if c == '\\' {
                self.take_escape()?;
            } else if c == quote {
                closed = true;
                self.cursor.advance();
                break;
            } else {
                self.cursor.advance();
            }
        }
        if !closed {
            return Err(ParseError::UnclosedString);
        }
        Ok(self.cursor.slice_from(start).to_string())
    }

    /// Consumes a backslash and the character it escapes.
    fn take_escape(&mut self) -> Result<(), ParseError> {
        self.cursor.advance();
        if self.cursor.is_at_end() {
            return Err(ParseError::UnterminatedEscape);
        }
        self.cursor.advance();
        Ok(())
    }
}
