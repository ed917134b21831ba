//! Comment scanning.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes a `#` comment through the end of the line and returns its
    /// text. The terminating newline is not part of the comment.
    pub(super) fn take_comment(&mut self) -> String {
        let start = self.cursor.position();
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
        self.cursor.slice_from(start).to_string()
    }
}
