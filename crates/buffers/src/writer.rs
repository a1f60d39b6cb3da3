//! Binary buffer writer with explicit, capacity-doubling growth.

/// Initial capacity used by [`Writer::new`].
pub const DEFAULT_CAPACITY: usize = 1024;

/// An append-only binary buffer writer.
///
/// Unlike a `Vec<u8>`, the writer never grows on its own: every write must be
/// preceded by an [`ensure_capacity`](Writer::ensure_capacity) call that covers
/// it. This keeps reallocation at the call site, where the size of a whole
/// encoded unit is known, instead of once per primitive.
///
/// All multi-byte primitives are written in big-endian (network) order.
///
/// # Panics
///
/// Writing more bytes than were reserved panics.
///
/// # Example
///
/// ```
/// use mpack_buffers::Writer;
///
/// let mut writer = Writer::with_capacity(0);
/// writer.ensure_capacity(3);
/// writer.u8(0x01);
/// writer.u16(0x0203);
/// assert_eq!(writer.to_bytes(), [0x01, 0x02, 0x03]);
/// ```
#[derive(Debug, Clone)]
pub struct Writer {
    /// The allocated buffer; its length is the writer's capacity.
    uint8: Vec<u8>,
    /// Current cursor position, i.e. the number of bytes written.
    x: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with [`DEFAULT_CAPACITY`] bytes allocated.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new writer with `capacity` bytes allocated up front.
    ///
    /// A capacity of zero is allowed; the first reservation grows it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: vec![0u8; capacity],
            x: 0,
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.x
    }

    /// Returns `true` when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.x == 0
    }

    /// Number of bytes allocated.
    pub fn capacity(&self) -> usize {
        self.uint8.len()
    }

    /// Number of bytes that can still be written without growing.
    pub fn remaining(&self) -> usize {
        self.uint8.len() - self.x
    }

    /// Guarantees that at least `size` more bytes can be written.
    ///
    /// When the buffer is too small, its capacity (treated as at least 1) is
    /// doubled until it covers the bytes already written plus `size`, and the
    /// written prefix is copied into the new allocation.
    pub fn ensure_capacity(&mut self, size: usize) {
        if self.remaining() >= size {
            return;
        }
        let required = self.x.saturating_add(size);
        let mut capacity = self.uint8.len().max(1);
        while capacity < required {
            capacity = capacity.saturating_mul(2);
        }
        self.grow(capacity);
    }

    fn grow(&mut self, capacity: usize) {
        let mut uint8 = vec![0u8; capacity];
        uint8[..self.x].copy_from_slice(&self.uint8[..self.x]);
        self.uint8 = uint8;
    }

    /// Returns the written prefix of the buffer.
    pub fn to_bytes(&self) -> &[u8] {
        &self.uint8[..self.x]
    }

    /// Forgets everything written while keeping the allocation.
    pub fn clear(&mut self) {
        self.x = 0;
    }

    #[inline]
    fn put<const N: usize>(&mut self, bytes: [u8; N]) {
        let end = self.x + N;
        self.uint8[self.x..end].copy_from_slice(&bytes);
        self.x = end;
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.uint8[self.x] = val;
        self.x += 1;
    }

    /// Writes a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self, val: i8) {
        self.put(val.to_be_bytes());
    }

    /// Writes an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.put(val.to_be_bytes());
    }

    /// Writes a signed 16-bit integer (big-endian).
    #[inline]
    pub fn i16(&mut self, val: i16) {
        self.put(val.to_be_bytes());
    }

    /// Writes an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.put(val.to_be_bytes());
    }

    /// Writes a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.put(val.to_be_bytes());
    }

    /// Writes an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.put(val.to_be_bytes());
    }

    /// Writes a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.put(val.to_be_bytes());
    }

    /// Writes a 32-bit floating point number (big-endian).
    #[inline]
    pub fn f32(&mut self, val: f32) {
        self.put(val.to_be_bytes());
    }

    /// Writes a 64-bit floating point number (big-endian).
    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.put(val.to_be_bytes());
    }

    /// Writes a u8 followed by a u16 (big-endian).
    pub fn u8u16(&mut self, u8_val: u8, u16_val: u16) {
        self.u8(u8_val);
        self.u16(u16_val);
    }

    /// Writes a u8 followed by a u32 (big-endian).
    pub fn u8u32(&mut self, u8_val: u8, u32_val: u32) {
        self.u8(u8_val);
        self.u32(u32_val);
    }

    /// Writes a u8 followed by a u64 (big-endian).
    pub fn u8u64(&mut self, u8_val: u8, u64_val: u64) {
        self.u8(u8_val);
        self.u64(u64_val);
    }

    /// Writes a u8 followed by a f32 (big-endian).
    pub fn u8f32(&mut self, u8_val: u8, f32_val: f32) {
        self.u8(u8_val);
        self.f32(f32_val);
    }

    /// Writes a u8 followed by a f64 (big-endian).
    pub fn u8f64(&mut self, u8_val: u8, f64_val: f64) {
        self.u8(u8_val);
        self.f64(f64_val);
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, buf: &[u8]) {
        let end = self.x + buf.len();
        self.uint8[self.x..end].copy_from_slice(buf);
        self.x = end;
    }
}
