//! The dynamic value tree.

use std::fmt;

use indexmap::IndexMap;

/// An opaque runtime value of unknown static shape.
///
/// Inspectable only by name-based member access and by its dynamic type name.
/// The core never mutates a `Value`; it is a read-only view into state owned
/// by the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Ordered sequence of values.
    Seq(Vec<Value>),
    /// Absent/present wrapper around another value.
    Option(Option<Box<Value>>),
    /// Struct-like storage: a dynamic type name plus ordered named fields.
    Record(Record),
    /// Enum-case-like storage: members exposed only through a generic
    /// label/value enumeration.
    Case(Case),
}

/// Struct-like storage with a fixed field layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub type_name: String,
    pub fields: IndexMap<String, Value>,
}

/// Enum-case-like storage: a case name and ordered labeled payload values.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub type_name: String,
    pub case_name: String,
    pub labels: Vec<(String, Value)>,
}

impl Value {
    /// Build a record value from a type name and ordered fields.
    ///
    /// # Example
    ///
    /// ```
    /// use nodelens_value::Value;
    ///
    /// let v = Value::record("Font", [("size", Value::from(17.0))]);
    /// assert_eq!(v.type_name(), "Font");
    /// ```
    pub fn record<N, F, K>(type_name: N, fields: F) -> Value
    where
        N: Into<String>,
        F: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Record(Record {
            type_name: type_name.into(),
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        })
    }

    /// Build a case value from a type name, case name, and labeled payloads.
    pub fn case<N, C, L, K>(type_name: N, case_name: C, labels: L) -> Value
    where
        N: Into<String>,
        C: Into<String>,
        L: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Case(Case {
            type_name: type_name.into(),
            case_name: case_name.into(),
            labels: labels.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        })
    }

    /// Build a record with no fields.
    pub fn unit(type_name: impl Into<String>) -> Value {
        Value::Record(Record {
            type_name: type_name.into(),
            fields: IndexMap::new(),
        })
    }

    /// Build a case with no labeled payloads.
    pub fn unit_case(type_name: impl Into<String>, case_name: impl Into<String>) -> Value {
        Value::Case(Case {
            type_name: type_name.into(),
            case_name: case_name.into(),
            labels: Vec::new(),
        })
    }

    /// Build an ordered sequence.
    pub fn seq<I: IntoIterator<Item = Value>>(items: I) -> Value {
        Value::Seq(items.into_iter().collect())
    }

    /// Wrap a value in a present optional.
    pub fn some(value: Value) -> Value {
        Value::Option(Some(Box::new(value)))
    }

    /// An absent optional.
    pub fn none() -> Value {
        Value::Option(None)
    }

    /// The dynamic type name of this value.
    ///
    /// Scalars, sequences, and optionals carry intrinsic names; records and
    /// cases carry the name the UI layer declared for them. Kind
    /// classification matches against this name by exact prefix.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int64",
            Value::Float(_) => "Float64",
            Value::Str(_) => "String",
            Value::Seq(_) => "Array",
            Value::Option(_) => "Optional",
            Value::Record(r) => &r.type_name,
            Value::Case(c) => &c.type_name,
        }
    }

    /// Human description of this value, used when reporting an unrecognized
    /// shape: a bare case name for payload-less cases, `case(PayloadType…)`
    /// for cases with payloads, the type name otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use nodelens_value::Value;
    ///
    /// let plain = Value::unit_case("TextModifier", "italic");
    /// assert_eq!(plain.describe(), "italic");
    ///
    /// let payload = Value::case("TextModifier", "font", [("font", Value::none())]);
    /// assert_eq!(payload.describe(), "font(Optional)");
    /// ```
    pub fn describe(&self) -> String {
        match self {
            Value::Case(c) if c.labels.is_empty() => c.case_name.clone(),
            Value::Case(c) => {
                let payloads: Vec<&str> = c.labels.iter().map(|(_, v)| v.type_name()).collect();
                format!("{}({})", c.case_name, payloads.join(", "))
            }
            other => other.type_name().to_string(),
        }
    }

    /// Look up a named storage member. Only records have fields.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Record(r) => r.fields.get(name),
            _ => None,
        }
    }

    /// Enumerate the externally-visible `(label, value)` pairs of this value.
    ///
    /// Cases expose their labeled payloads; records expose their fields as
    /// labels (the generic enumeration sees both). Every other shape exposes
    /// nothing.
    pub fn labels(&self) -> Box<dyn Iterator<Item = (&str, &Value)> + '_> {
        match self {
            Value::Case(c) => Box::new(c.labels.iter().map(|(k, v)| (k.as_str(), v))),
            Value::Record(r) => Box::new(r.fields.iter().map(|(k, v)| (k.as_str(), v))),
            _ => Box::new(std::iter::empty()),
        }
    }

    /// Look up a labeled member by enumeration.
    pub fn label(&self, name: &str) -> Option<&Value> {
        self.labels().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric access; integers widen to float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Render a scalar as its display string. Non-scalars fall back to the
    /// description; localization arguments are stringified through this.
    pub fn stringify(&self) -> String {
        match self {
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Str(s) => s.clone(),
            Value::Option(Some(inner)) => inner.stringify(),
            other => other.describe(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(s)
    }
}
