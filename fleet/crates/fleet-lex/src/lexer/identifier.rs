//! Identifier scanning.

use crate::classes::is_identifier_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes an identifier and returns its text.
    ///
    /// The caller guarantees the current character can start an identifier;
    /// continuation characters are alphanumerics and `_`.
    pub(super) fn take_identifier(&mut self) -> String {
        let start = self.cursor.position();
        while !self.cursor.is_at_end() && is_identifier_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        self.cursor.slice_from(start).to_string()
    }
}
