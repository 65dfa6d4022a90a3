//! Tagged value codec for persisted contract state.
//!
//! Every value the host stores is persisted as a one-character type tag
//! followed by the encoded payload: `"sworld"` is the string `"world"`,
//! `"i1000"` is the integer `1000`, `"n"` is nil. The tagged form is a
//! persisted format and must stay byte-exact across versions; storage cost
//! is measured on it directly, tag included.

/// Type tag for string values.
const TAG_STR: char = 's';

/// Type tag for 64-bit signed integer values.
const TAG_INT: char = 'i';

/// Type tag for the nil marker.
const TAG_NIL: char = 'n';

/// A storable contract value.
///
/// The set of variants is closed: a tagged string either decodes into one
/// of these or fails with [`DecodeError`]. `decode(encode(v)) == v` holds
/// for every value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// UTF-8 string scalar (tag `s`).
    Str(String),
    /// 64-bit signed integer (tag `i`), decimal payload.
    Int(i64),
    /// Explicit absence marker (tag `n`), empty payload.
    Nil,
}

/// Failure to interpret a stored tagged string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The stored string was empty — not even a tag.
    #[error("empty tagged value")]
    Empty,

    /// The leading tag character is not part of the codec.
    #[error("unknown value tag '{0}'")]
    UnknownTag(char),

    /// The tag was recognized but the payload does not parse.
    #[error("malformed payload for tag '{tag}': {payload:?}")]
    Malformed { tag: char, payload: String },

    /// The value decoded, but not into the type the caller requires.
    #[error("expected {expected} value, found tag '{found}'")]
    WrongType {
        expected: &'static str,
        found: char,
    },
}

impl Value {
    /// Encode into the persisted tagged-string form.
    pub fn encode(&self) -> String {
        match self {
            Self::Str(s) => format!("{TAG_STR}{s}"),
            Self::Int(n) => format!("{TAG_INT}{n}"),
            Self::Nil => TAG_NIL.to_string(),
        }
    }

    /// Decode a persisted tagged string.
    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        let tag = raw.chars().next().ok_or(DecodeError::Empty)?;
        let payload = &raw[tag.len_utf8()..];
        match tag {
            TAG_STR => Ok(Self::Str(payload.to_string())),
            TAG_INT => payload
                .parse::<i64>()
                .map(Self::Int)
                .map_err(|_| DecodeError::Malformed {
                    tag,
                    payload: payload.to_string(),
                }),
            TAG_NIL if payload.is_empty() => Ok(Self::Nil),
            TAG_NIL => Err(DecodeError::Malformed {
                tag,
                payload: payload.to_string(),
            }),
            _ => Err(DecodeError::UnknownTag(tag)),
        }
    }

    /// The tag character this value encodes under.
    pub fn tag(&self) -> char {
        match self {
            Self::Str(_) => TAG_STR,
            Self::Int(_) => TAG_INT,
            Self::Nil => TAG_NIL,
        }
    }

    /// The integer payload, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

/// Byte length of a tagged representation, tag included.
///
/// This is the unit storage cost is charged in.
pub fn encoded_len(tagged: &str) -> i64 {
    tagged.len() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_string() {
        assert_eq!(Value::from("world").encode(), "sworld");
        assert_eq!(Value::from("").encode(), "s");
    }

    #[test]
    fn test_encode_int() {
        assert_eq!(Value::Int(1000).encode(), "i1000");
        assert_eq!(Value::Int(-3).encode(), "i-3");
        assert_eq!(Value::Int(0).encode(), "i0");
    }

    #[test]
    fn test_encode_nil() {
        assert_eq!(Value::Nil.encode(), "n");
    }

    #[test]
    fn test_roundtrip() {
        let values = [
            Value::from("world"),
            Value::from(""),
            Value::from("with@reserved-chars"),
            Value::Int(i64::MAX),
            Value::Int(i64::MIN),
            Value::Int(0),
            Value::Nil,
        ];
        for v in values {
            assert_eq!(Value::decode(&v.encode()).unwrap(), v);
        }
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(Value::decode("").unwrap_err(), DecodeError::Empty);
    }

    #[test]
    fn test_decode_unknown_tag() {
        assert_eq!(
            Value::decode("xabc").unwrap_err(),
            DecodeError::UnknownTag('x')
        );
    }

    #[test]
    fn test_decode_malformed_int() {
        let err = Value::decode("iabc").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { tag: 'i', .. }));
    }

    #[test]
    fn test_decode_nil_with_payload() {
        let err = Value::decode("nope").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { tag: 'n', .. }));
    }

    #[test]
    fn test_encoded_len_counts_tag() {
        assert_eq!(encoded_len("sworld"), 6);
        assert_eq!(encoded_len("sa"), 2);
        assert_eq!(encoded_len("n"), 1);
        assert_eq!(encoded_len(&Value::Int(1000).encode()), 5);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::from("x").as_int(), None);
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::Nil.as_str(), None);
        assert_eq!(Value::Nil.tag(), 'n');
    }
}
