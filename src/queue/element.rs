use crate::queue::QueueError;
use std::fmt;

/// An element of a [`Queue`](crate::Queue): an owned, immutable string.
///
/// Elements order and compare by the bytes of their value.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element {
    value: Box<str>,
}

impl Element {
    /// Copies `value` into a new element.
    ///
    /// Fails with [`QueueError::Alloc`] if the copy cannot be allocated.
    pub fn new(value: &str) -> Result<Self, QueueError> {
        let mut owned = String::new();
        owned.try_reserve_exact(value.len())?;
        owned.push_str(value);
        Ok(Self {
            value: owned.into_boxed_str(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value.into_string()
    }

    /// Frees the element and its payload.
    pub fn release(self) {}

    /// Copies at most `buf.len() - 1` bytes of the value into `buf` and
    /// terminates them with a NUL byte. Returns the number of value bytes
    /// copied; an empty buffer receives nothing.
    ///
    /// The copy is bounded and may cut a multi-byte character.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Element;
    ///
    /// let element = Element::new("gerbil").unwrap();
    /// let mut buf = [0xff_u8; 4];
    /// assert_eq!(element.copy_to(&mut buf), 3);
    /// assert_eq!(&buf, b"ger\0");
    /// ```
    pub fn copy_to(&self, buf: &mut [u8]) -> usize {
        let room = match buf.len().checked_sub(1) {
            Some(room) => room,
            None => return 0,
        };
        let bytes = self.value.as_bytes();
        let copied = bytes.len().min(room);
        buf[..copied].copy_from_slice(&bytes[..copied]);
        buf[copied] = 0;
        copied
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

impl AsRef<str> for Element {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
