use serde::{Deserialize, Serialize};
use std::fmt;

/// A single literal on the right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

/// Plain textual form, without any quoting.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::String(v) => f.write_str(v),
        }
    }
}

/// Either a single literal or an ordered list of literals (for `IN`/`NIN`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    List(Vec<Scalar>),
    Scalar(Scalar),
}

impl Value {
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident $(as $cast:ty)?),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(v: $ty) -> Self {
                    Scalar::$variant(v $(as $cast)?)
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Scalar(Scalar::from(v))
                }
            }

            impl From<Vec<$ty>> for Value {
                fn from(v: Vec<$ty>) -> Self {
                    Value::list(v)
                }
            }
        )*
    };
}

scalar_from! {
    bool => Bool,
    i32 => Int as i64,
    i64 => Int,
    u32 => Int as i64,
    f32 => Float as f64,
    f64 => Float,
    String => String,
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::String(v.to_string())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Scalar(Scalar::from(v))
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::list(v)
    }
}

impl From<Scalar> for Value {
    fn from(v: Scalar) -> Self {
        Value::Scalar(v)
    }
}

impl From<Vec<Scalar>> for Value {
    fn from(v: Vec<Scalar>) -> Self {
        Value::List(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_unquoted() {
        assert_eq!(Scalar::from("bar").to_string(), "bar");
        assert_eq!(Scalar::from(-3).to_string(), "-3");
        assert_eq!(Scalar::from(1.5).to_string(), "1.5");
        assert_eq!(Scalar::from(true).to_string(), "true");
    }

    #[test]
    fn test_untagged_json_literals() {
        let v: Value = serde_json::from_str(r#""bar""#).unwrap();
        assert_eq!(v, Value::from("bar"));

        let v: Value = serde_json::from_str("1").unwrap();
        assert_eq!(v, Value::Scalar(Scalar::Int(1)));

        let v: Value = serde_json::from_str("2.5").unwrap();
        assert_eq!(v, Value::Scalar(Scalar::Float(2.5)));

        let v: Value = serde_json::from_str(r#"[1, "x", false]"#).unwrap();
        assert_eq!(
            v,
            Value::List(vec![Scalar::Int(1), Scalar::from("x"), Scalar::Bool(false)])
        );
    }

    #[test]
    fn test_list_keeps_order_and_duplicates() {
        let v = Value::from(vec![3, 1, 3]);
        assert_eq!(
            v,
            Value::List(vec![Scalar::Int(3), Scalar::Int(1), Scalar::Int(3)])
        );
        assert!(v.is_list());
    }
}
