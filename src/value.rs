use std::{borrow::Cow, fmt};

/// A value that can be substituted into a template.
///
/// The only thing ever done with a value is turning it into text, so any
/// scalar converts into one with [`From`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Char(char),
}

impl Value {
    /// The textual form of this value, borrowed when it already is text.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => fmt::Display::fmt(b, f),
            Self::Int(i) => fmt::Display::fmt(i, f),
            Self::UInt(u) => fmt::Display::fmt(u, f),
            Self::Float(x) => fmt::Display::fmt(x, f),
            Self::Str(s) => f.write_str(s),
            Self::Char(c) => fmt::Display::fmt(c, f),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident($inner:ty): $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::$variant(<$inner>::from(value))
                }
            }
        )*
    };
}

impl_from!(Int(i64): i8, i16, i32, i64);
impl_from!(UInt(u64): u8, u16, u32, u64);
impl_from!(Float(f64): f32, f64);
impl_from!(Bool(bool): bool);
impl_from!(Char(char): char);
impl_from!(Str(String): String, &str, Box<str>, &String);

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target.
        Self::Int(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Str(value.into_owned())
    }
}

#[cfg(test)]
mod test {
    use super::Value;

    #[test]
    fn display() {
        assert_eq!(Value::from("Apple").to_string(), "Apple");
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(-7i8).to_string(), "-7");
        assert_eq!(Value::from(10_000usize).to_string(), "10000");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from('x').to_string(), "x");
    }

    #[test]
    fn text_is_borrowed_for_strings() {
        let value = Value::from(String::from("${text}"));
        assert!(matches!(value.as_text(), std::borrow::Cow::Borrowed("${text}")));
        assert_eq!(Value::from(3u8).as_text(), "3");
    }

    #[test]
    fn integer_widths_normalise() {
        assert_eq!(Value::from(5i16), Value::Int(5));
        assert_eq!(Value::from(5u32), Value::UInt(5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_untagged() {
        let values: Vec<Value> = serde_json::from_str(r#"["a", 1, -1, 2.5, false, 18446744073709551615]"#).unwrap();
        assert_eq!(
            values,
            [
                Value::from("a"),
                Value::Int(1),
                Value::Int(-1),
                Value::Float(2.5),
                Value::Bool(false),
                Value::UInt(u64::MAX),
            ]
        );
    }
}
