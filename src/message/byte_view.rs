//! Positioned byte view.
//!
//! A [`ByteView`] is shared bytes plus a read position. Reading through
//! [`bytes::Buf`] advances the position; [`ByteView::remaining_bytes`] peeks
//! without moving it.
//!
//! # Example
//!
//! ```
//! use bytes::Buf;
//! use rabbit_serdes::ByteView;
//!
//! let mut view = ByteView::from_static(b"\x00\x01rest");
//! assert_eq!(view.get_u16(), 1);
//! assert_eq!(&view.remaining_bytes()[..], b"rest");
//! assert_eq!(view.position(), 2);
//! ```

use bytes::{Buf, Bytes};

/// Readable window over shared bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteView {
    data: Bytes,
    position: usize,
}

impl ByteView {
    /// Create a view positioned at the start of `data`.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            position: 0,
        }
    }

    /// Create a view over static bytes.
    pub fn from_static(data: &'static [u8]) -> Self {
        Self::new(Bytes::from_static(data))
    }

    /// Current read position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the read position, clamped to the end of the data.
    pub fn set_position(&mut self, position: usize) {
        self.position = position.min(self.data.len());
    }

    /// Reset the read position to the start.
    #[inline]
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Total length of the underlying data.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the underlying data is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes from the read position to the end (zero-copy, position unchanged).
    #[inline]
    pub fn remaining_bytes(&self) -> Bytes {
        self.data.slice(self.position..)
    }

    /// The whole underlying data regardless of position.
    #[inline]
    pub fn as_bytes(&self) -> &Bytes {
        &self.data
    }
}

impl Buf for ByteView {
    fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    fn chunk(&self) -> &[u8] {
        &self.data[self.position..]
    }

    fn advance(&mut self, cnt: usize) {
        assert!(
            cnt <= self.remaining(),
            "cannot advance past end of view: {} > {}",
            cnt,
            self.remaining()
        );
        self.position += cnt;
    }
}

impl From<Bytes> for ByteView {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}

impl From<Vec<u8>> for ByteView {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}
