use std::ops::Range;

/// A read position within a borrowed input buffer.
///
/// The offset never exceeds `data.len()`, and no accessor reads at or past
/// the end of the buffer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at `pos`, or `None` if `pos` is past the end.
    pub(crate) fn new(data: &'a [u8], pos: usize) -> Option<Self> {
        (pos <= data.len()).then_some(Self { data, pos })
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Returns the position of the first `byte` in `[from, len)`.
    pub(crate) fn find(&self, from: usize, byte: u8) -> Option<usize> {
        self.data
            .get(from..)?
            .iter()
            .position(|&b| b == byte)
            .map(|i| from + i)
    }

    pub(crate) fn slice(&self, range: Range<usize>) -> Option<&'a [u8]> {
        self.data.get(range)
    }

    /// Moves the cursor forward to `pos`.
    ///
    /// Positions behind the cursor or past the end are ignored so the
    /// offset stays monotonic and in bounds.
    pub(crate) fn advance_to(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos && pos <= self.data.len());
        if pos >= self.pos && pos <= self.data.len() {
            self.pos = pos;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_offset_past_end() {
        assert!(Cursor::new(b"abc", 3).is_some());
        assert!(Cursor::new(b"abc", 4).is_none());
        assert!(Cursor::new(b"", 0).is_some());
    }

    #[test]
    fn test_peek_at_end() {
        let cursor = Cursor::new(b"ab", 2).unwrap();
        assert_eq!(cursor.pos(), cursor.len());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_find_searches_from_offset() {
        let cursor = Cursor::new(b"e1e2", 0).unwrap();
        assert_eq!(cursor.find(0, b'e'), Some(0));
        assert_eq!(cursor.find(1, b'e'), Some(2));
        assert_eq!(cursor.find(3, b'e'), None);
        assert_eq!(cursor.find(10, b'e'), None);
    }

    #[test]
    fn test_slice_out_of_range() {
        let cursor = Cursor::new(b"abc", 0).unwrap();
        assert_eq!(cursor.slice(1..3), Some(b"bc".as_slice()));
        assert_eq!(cursor.slice(1..4), None);
    }
}
