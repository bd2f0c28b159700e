use crate::error::DigitError;

/// A read position inside the expression text.
///
/// The cursor only ever moves forward. It stores a byte offset, which is safe
/// to slice at because the scanner advances over ASCII bytes only, except for
/// [`Cursor::bump_char`], which advances by a whole UTF-8 sequence.
pub(super) struct Cursor<'a> {
    text: &'a str,
    pos:  usize,
}

impl<'a> Cursor<'a> {
    pub(super) const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub(super) const fn pos(&self) -> usize {
        self.pos
    }

    pub(super) const fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// The byte under the cursor, or `None` at the end of the text.
    pub(super) fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Consumes `byte` if it is the one under the cursor.
    pub(super) fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes and returns the next character, whatever it is.
    pub(super) fn bump_char(&mut self) -> Option<char> {
        let c = self.text.get(self.pos..)?.chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advances over consecutive spaces.
    ///
    /// The last character of the text is never skipped, so a trailing blank
    /// stays under the cursor.
    pub(super) fn skip_blanks(&mut self) {
        while self.pos + 1 < self.text.len() && self.eat(b' ') {}
    }

    /// Scans a run of ASCII digits.
    ///
    /// The value is accumulated in an `f64` as `value * 10 + digit`. There is no
    /// upper bound on the run; very long runs lose precision instead of
    /// failing. A run of more than 308 digits overflows to infinity.
    ///
    /// # Returns
    /// The accumulated value together with the number of digits consumed.
    ///
    /// # Errors
    /// `DigitError::DigitsMissing` if the cursor is at the end or not on a
    /// digit. Nothing is consumed in that case.
    pub(super) fn scan_integer(&mut self) -> Result<(f64, i32), DigitError> {
        let start = self.pos;
        let mut value = 0.0_f64;
        let mut digits = 0_i32;

        while let Some(byte) = self.peek()
              && byte.is_ascii_digit()
        {
            value = value.mul_add(10.0, f64::from(byte - b'0'));
            digits = digits.saturating_add(1);
            self.pos += 1;
        }

        if digits == 0 {
            return Err(DigitError::DigitsMissing { position: start });
        }
        tracing::trace!(position = start, value, digits, "scanned digit run");
        Ok((value, digits))
    }
}
