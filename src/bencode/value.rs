use bytes::Bytes;

/// A decoded bencode value.
///
/// Only the two scalar forms are represented: integers and byte strings.
/// A `Value` owns its payload; it never borrows from the buffer it was
/// decoded from.
///
/// # Examples
///
/// ```
/// use bdecode::bencode::{decode, Value};
///
/// // Creating values directly
/// let int = Value::Integer(42);
/// let string = Value::string("hello");
///
/// // Using From implementations
/// let int: Value = 42i64.into();
/// let string: Value = "hello".into();
///
/// // Accessing values
/// assert_eq!(int.as_integer(), Some(42));
/// assert_eq!(string.as_str(), Some("hello"));
///
/// // Decoded byte strings are copies of the input
/// let mut input = b"5:hello".to_vec();
/// let value = decode(&input).unwrap();
/// input.fill(0);
/// assert_eq!(value, string);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A byte string (may or may not be valid UTF-8).
    Bytes(Bytes),
}

/// What a call to [`Value::release`] freed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Released {
    /// Number of payload bytes handed back to the allocator.
    pub payload_len: usize,
}

impl Value {
    /// Creates a byte string value from a UTF-8 string.
    ///
    /// # Examples
    ///
    /// ```
    /// use bdecode::bencode::Value;
    ///
    /// let value = Value::string("hello");
    /// assert_eq!(value.as_str(), Some("hello"));
    /// ```
    pub fn string(s: &str) -> Self {
        Value::Bytes(Bytes::copy_from_slice(s.as_bytes()))
    }

    /// Returns the value as an integer, if it is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bdecode::bencode::Value;
    ///
    /// let int = Value::Integer(42);
    /// assert_eq!(int.as_integer(), Some(42));
    ///
    /// let string = Value::string("hello");
    /// assert_eq!(string.as_integer(), None);
    /// ```
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Bytes(_) => None,
        }
    }

    /// Returns the value as a byte string, if it is one.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            Value::Integer(_) => None,
        }
    }

    /// Returns the value as a UTF-8 string, if it is a valid UTF-8 byte string.
    ///
    /// Returns `None` if the value is not a byte string or if the bytes are not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bytes(b) => std::str::from_utf8(b).ok(),
            Value::Integer(_) => None,
        }
    }

    /// Consumes the value and returns the byte string, if it is one.
    pub fn into_bytes(self) -> Option<Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            Value::Integer(_) => None,
        }
    }

    /// Borrows this value as a [`ValueRef`].
    pub fn as_value_ref(&self) -> ValueRef<'_> {
        match self {
            Value::Integer(i) => ValueRef::Integer(*i),
            Value::Bytes(b) => ValueRef::Bytes(&b[..]),
        }
    }

    /// Frees the storage owned by this value.
    ///
    /// The value is consumed, so releasing it a second time is a compile
    /// error:
    ///
    /// ```compile_fail
    /// use bdecode::bencode::decode;
    ///
    /// let value = decode(b"3:abc").unwrap();
    /// value.release();
    /// value.release();
    /// ```
    pub fn release(self) -> Released {
        let payload_len = match self {
            Value::Integer(_) => 0,
            Value::Bytes(b) => {
                let len = b.len();
                drop(b);
                len
            }
        };
        tracing::trace!(payload_len, "released bencode value");
        Released { payload_len }
    }
}

/// A decoded bencode value that borrows its payload from the input.
///
/// Returned by the zero-copy entry points such as
/// [`decode_ref`](super::decode_ref); the lifetime keeps the value from
/// outliving the buffer it points into.
///
/// # Examples
///
/// ```
/// use bdecode::bencode::{decode_ref, ValueRef};
///
/// let input = b"4:spam";
/// let value = decode_ref(input).unwrap();
/// assert_eq!(value, ValueRef::Bytes(b"spam"));
/// assert_eq!(value.to_value().as_str(), Some("spam"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueRef<'a> {
    Integer(i64),
    Bytes(&'a [u8]),
}

impl<'a> ValueRef<'a> {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ValueRef::Integer(i) => Some(*i),
            ValueRef::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self {
            ValueRef::Bytes(b) => Some(b),
            ValueRef::Integer(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Copies the payload out into an owned [`Value`].
    pub fn to_value(&self) -> Value {
        match self {
            ValueRef::Integer(i) => Value::Integer(*i),
            ValueRef::Bytes(b) => Value::Bytes(Bytes::copy_from_slice(b)),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(Bytes::from(v))
    }
}

impl<'a> From<ValueRef<'a>> for Value {
    fn from(v: ValueRef<'a>) -> Self {
        v.to_value()
    }
}
