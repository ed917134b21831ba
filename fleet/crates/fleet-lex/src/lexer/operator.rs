//! Operator and grouper scanning.

use crate::classes::is_operator_char;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes a single grouper character and returns it.
    pub(super) fn take_grouper(&mut self) -> String {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.slice_from(start).to_string()
    }

    /// Consumes a maximal run of operator characters and returns it.
    ///
    /// Operators are greedy: `+++` is one token, not three. Splitting an
    /// operator run is what whitespace is for.
    pub(super) fn take_operator(&mut self) -> String {
        let start = self.cursor.position();
        while !self.cursor.is_at_end() && is_operator_char(self.cursor.current_char()) {
            self.cursor.advance();
        }
        self.cursor.slice_from(start).to_string()
    }
}
