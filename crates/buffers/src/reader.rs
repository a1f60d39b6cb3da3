//! Binary buffer reader with cursor tracking and bounds checks.

/// A forward-only binary reader over a byte slice.
///
/// Every read checks that the requested width is still available. On
/// underflow it returns `None` and leaves the cursor where it was, so a
/// legitimately read zero can never be mistaken for missing input.
///
/// # Example
///
/// ```
/// use mpack_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.read_u8(), Some(0x01));
/// assert_eq!(reader.read_u16(), Some(0x0203));
/// assert_eq!(reader.read_u8(), None);
/// assert_eq!(reader.position(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    uint8: &'a [u8],
    /// Current cursor position.
    x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader positioned at the start of `uint8`.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Current byte offset from the start of the input.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Returns the number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.uint8.len() - self.x
    }

    /// Returns `true` once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Peeks at the current byte without advancing the cursor.
    pub fn peek(&self) -> Option<u8> {
        self.uint8.get(self.x).copied()
    }

    /// Returns the next `size` bytes and advances past them.
    ///
    /// Returns `None` without moving the cursor if fewer than `size` bytes
    /// remain.
    pub fn read(&mut self, size: usize) -> Option<&'a [u8]> {
        let end = self.x.checked_add(size)?;
        let bin = self.uint8.get(self.x..end)?;
        self.x = end;
        Some(bin)
    }

    #[inline]
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.read(N)?;
        bytes.try_into().ok()
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn read_u8(&mut self) -> Option<u8> {
        let val = self.peek()?;
        self.x += 1;
        Some(val)
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn read_i8(&mut self) -> Option<i8> {
        self.take().map(i8::from_be_bytes)
    }

    /// Reads an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn read_u16(&mut self) -> Option<u16> {
        self.take().map(u16::from_be_bytes)
    }

    /// Reads a signed 16-bit integer (big-endian).
    #[inline]
    pub fn read_i16(&mut self) -> Option<i16> {
        self.take().map(i16::from_be_bytes)
    }

    /// Reads an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_be_bytes)
    }

    /// Reads a signed 32-bit integer (big-endian).
    #[inline]
    pub fn read_i32(&mut self) -> Option<i32> {
        self.take().map(i32::from_be_bytes)
    }

    /// Reads an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_be_bytes)
    }

    /// Reads a signed 64-bit integer (big-endian).
    #[inline]
    pub fn read_i64(&mut self) -> Option<i64> {
        self.take().map(i64::from_be_bytes)
    }

    /// Reads a 32-bit floating point number (big-endian).
    #[inline]
    pub fn read_f32(&mut self) -> Option<f32> {
        self.take().map(f32::from_be_bytes)
    }

    /// Reads a 64-bit floating point number (big-endian).
    #[inline]
    pub fn read_f64(&mut self) -> Option<f64> {
        self.take().map(f64::from_be_bytes)
    }
}
