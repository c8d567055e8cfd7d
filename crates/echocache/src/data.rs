//! Storable scalar values and their renderings

use std::fmt;

/// The closed set of scalar values the cache accepts.
///
/// Two renderings exist side by side:
/// - [`encode`](Data::encode): the store's native byte encoding, used
///   for the stored value itself (numbers become decimal ASCII)
/// - [`Display`]: a human-readable form used when recording call
///   arguments (text quoted, bytes as `b"..."`, numbers bare)
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    /// UTF-8 text
    Text(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Signed integer
    Int(i64),
    /// Floating-point number
    Float(f64),
}

impl Data {
    /// Encode into the store's native byte representation
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Data::Text(s) => s.clone().into_bytes(),
            Data::Bytes(b) => b.clone(),
            Data::Int(n) => n.to_string().into_bytes(),
            Data::Float(x) => x.to_string().into_bytes(),
        }
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Data::Text(s) => write!(f, "{:?}", s),
            Data::Bytes(b) => write!(f, "b\"{}\"", b.escape_ascii()),
            Data::Int(n) => write!(f, "{}", n),
            Data::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for Data {
    fn from(s: &str) -> Self {
        Data::Text(s.to_string())
    }
}

impl From<String> for Data {
    fn from(s: String) -> Self {
        Data::Text(s)
    }
}

impl From<Vec<u8>> for Data {
    fn from(b: Vec<u8>) -> Self {
        Data::Bytes(b)
    }
}

impl From<&[u8]> for Data {
    fn from(b: &[u8]) -> Self {
        Data::Bytes(b.to_vec())
    }
}

impl From<i64> for Data {
    fn from(n: i64) -> Self {
        Data::Int(n)
    }
}

impl From<f64> for Data {
    fn from(x: f64) -> Self {
        Data::Float(x)
    }
}

/// Render a positional-argument tuple, e.g. `(1,)` or `("a", 2)`.
///
/// Deterministic, so recorded inputs compare stably across runs. The
/// single-element form keeps the trailing comma.
pub(crate) fn render_tuple(args: &[Data]) -> String {
    match args {
        [one] => format!("({},)", one),
        _ => {
            let parts: Vec<String> = args.iter().map(|a| a.to_string()).collect();
            format!("({})", parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_native() {
        assert_eq!(Data::from("abc").encode(), b"abc".to_vec());
        assert_eq!(Data::from(b"\x00\xff".as_slice()).encode(), vec![0x00, 0xff]);
        assert_eq!(Data::from(42i64).encode(), b"42".to_vec());
        assert_eq!(Data::from(3.5f64).encode(), b"3.5".to_vec());
    }

    #[test]
    fn test_display_rendering() {
        assert_eq!(Data::from("abc").to_string(), "\"abc\"");
        assert_eq!(Data::from(b"hi".as_slice()).to_string(), "b\"hi\"");
        assert_eq!(Data::from(7i64).to_string(), "7");
    }

    #[test]
    fn test_render_tuple() {
        assert_eq!(render_tuple(&[Data::Int(1)]), "(1,)");
        assert_eq!(
            render_tuple(&[Data::from("a"), Data::Int(2)]),
            "(\"a\", 2)"
        );
        assert_eq!(render_tuple(&[]), "()");
    }
}
