//! Number literal scanning.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes a number literal and returns its text.
    ///
    /// A number is a digit run with at most one embedded `.`; a second `.`
    /// terminates the literal. The text is kept verbatim and parsed to a
    /// double later, by the evaluator.
    pub(super) fn take_number(&mut self) -> String {
        let start = self.cursor.position();
        let mut dot_found = false;
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if !dot_found && c == '.' {
                dot_found = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            self.cursor.advance();
        }
        self.cursor.slice_from(start).to_string()
    }
}
