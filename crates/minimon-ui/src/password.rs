//! Password composition with a single-cursor character picker.
//!
//! The cursor walks an extended alphabet: the printable character set plus
//! two sentinel keys, Backspace and Confirm, at the end. Up/Down wrap the
//! cursor modulo `CHAR_SET.len() + 2`; Select applies the key under it.

extern crate alloc;

use alloc::string::String;

/// Printable characters selectable for a password, in cursor order.
pub const CHAR_SET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{};':\",./<>? `~";

/// Number of cursor positions: every character plus Backspace and Confirm.
pub const CURSOR_POSITIONS: usize = CHAR_SET.len() + 2;

/// The key currently under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKey {
    Char(char),
    Backspace,
    Confirm,
}

/// What a Select press did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordAction {
    Edited,
    Confirmed,
}

/// The in-progress password buffer and its character cursor.
#[derive(Debug, Default)]
pub struct PasswordEntry {
    buffer: String,
    cursor: usize,
}

impl PasswordEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Clear the buffer and park the cursor at the first character.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn key_at_cursor(&self) -> CursorKey {
        if self.cursor < CHAR_SET.len() {
            CursorKey::Char(CHAR_SET[self.cursor] as char)
        } else if self.cursor == CHAR_SET.len() {
            CursorKey::Backspace
        } else {
            CursorKey::Confirm
        }
    }

    pub fn cursor_prev(&mut self) {
        self.cursor = (self.cursor + CURSOR_POSITIONS - 1) % CURSOR_POSITIONS;
    }

    pub fn cursor_next(&mut self) {
        self.cursor = (self.cursor + 1) % CURSOR_POSITIONS;
    }

    /// Apply the key under the cursor to the buffer.
    pub fn select(&mut self) -> PasswordAction {
        match self.key_at_cursor() {
            CursorKey::Char(ch) => {
                self.buffer.push(ch);
                PasswordAction::Edited
            }
            CursorKey::Backspace => {
                self.buffer.pop();
                PasswordAction::Edited
            }
            CursorKey::Confirm => PasswordAction::Confirmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_set_matches_expected_size() {
        assert_eq!(CHAR_SET.len(), 93);
        assert_eq!(CURSOR_POSITIONS, 95);
    }

    #[test]
    fn cursor_wraps_backward_from_zero() {
        let mut entry = PasswordEntry::new();
        entry.cursor_prev();
        assert_eq!(entry.cursor(), CHAR_SET.len() + 1);
        assert_eq!(entry.key_at_cursor(), CursorKey::Confirm);
    }

    #[test]
    fn cursor_wraps_forward_from_confirm() {
        let mut entry = PasswordEntry::new();
        entry.cursor_prev();
        entry.cursor_next();
        assert_eq!(entry.cursor(), 0);
        assert_eq!(entry.key_at_cursor(), CursorKey::Char('a'));
    }

    #[test]
    fn sentinel_keys_follow_the_character_set() {
        let mut entry = PasswordEntry::new();
        for _ in 0..CHAR_SET.len() {
            entry.cursor_next();
        }
        assert_eq!(entry.key_at_cursor(), CursorKey::Backspace);
        entry.cursor_next();
        assert_eq!(entry.key_at_cursor(), CursorKey::Confirm);
    }

    #[test]
    fn select_appends_exactly_one_character() {
        let mut entry = PasswordEntry::new();
        assert_eq!(entry.select(), PasswordAction::Edited);
        entry.cursor_next();
        assert_eq!(entry.select(), PasswordAction::Edited);
        assert_eq!(entry.text(), "ab");
    }

    #[test]
    fn backspace_on_empty_buffer_is_a_noop() {
        let mut entry = PasswordEntry::new();
        for _ in 0..CHAR_SET.len() {
            entry.cursor_next();
        }
        assert_eq!(entry.select(), PasswordAction::Edited);
        assert_eq!(entry.text(), "");
    }

    #[test]
    fn confirm_never_mutates_the_buffer() {
        let mut entry = PasswordEntry::new();
        entry.select();
        entry.cursor_prev(); // wrap to Confirm
        assert_eq!(entry.key_at_cursor(), CursorKey::Confirm);
        assert_eq!(entry.select(), PasswordAction::Confirmed);
        assert_eq!(entry.text(), "a");
    }

    #[test]
    fn reset_clears_buffer_and_cursor() {
        let mut entry = PasswordEntry::new();
        entry.select();
        entry.cursor_next();
        entry.reset();
        assert_eq!(entry.text(), "");
        assert_eq!(entry.cursor(), 0);
    }
}
