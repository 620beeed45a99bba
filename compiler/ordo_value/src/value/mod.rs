//! Runtime operands for the comparison engine.
//!
//! # Arc Enforcement Architecture
//!
//! All heap allocations go through factory methods on `Value`. The `Heap<T>`
//! wrapper has a private constructor, so external code cannot create heap
//! values directly:
//!
//! ```text
//! let s = Value::string("hello");        // OK
//! let list = Value::list(vec![]);        // OK
//! let s = Value::Str(Heap::new(...));    // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Identity
//!
//! Every factory call allocates, and every `clone` shares. `Value::is_same`
//! is therefore a storage question for heap variants. Immediates (numbers,
//! booleans, `None`) have no storage to share; they are identical when their
//! tag and payload bits match.

mod collections;
mod heap;
mod numeric;

use std::fmt;

use rust_decimal::Decimal;

pub use collections::{MapValue, SetValue};
pub use heap::Heap;
pub use numeric::{Complex, Rational};

/// Runtime type tag of an operand.
///
/// A closed set: the coercion resolver matches on pairs of tags and must be
/// exhaustive. `NaN` is a tag of its own (reported by a `Float` holding
/// not-a-number) so that the resolver can route it before any conversion.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeTag {
    None,
    Bool,
    Int,
    Float,
    NaN,
    Complex,
    Decimal,
    Rational,
    Str,
    Bytes,
    List,
    Tuple,
    Set,
    FrozenSet,
    Map,
}

impl TypeTag {
    /// User-facing type name, as shown in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NoneType",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float | Self::NaN => "float",
            Self::Complex => "complex",
            Self::Decimal => "decimal",
            Self::Rational => "rational",
            Self::Str => "str",
            Self::Bytes => "bytes",
            Self::List => "list",
            Self::Tuple => "tuple",
            Self::Set => "set",
            Self::FrozenSet => "frozenset",
            Self::Map => "map",
        }
    }

    /// Whether values of this tag take part in numeric coercion.
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Int
                | Self::Float
                | Self::NaN
                | Self::Complex
                | Self::Decimal
                | Self::Rational
        )
    }

    /// `bool` and `int`: the tags compared as machine integers.
    pub const fn is_integral(self) -> bool {
        matches!(self, Self::Bool | Self::Int)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime operand.
#[derive(Clone)]
pub enum Value {
    // Immediates (inline, no heap allocation)
    /// The `None` singleton.
    None,
    /// Boolean; an integer subtype for comparison purposes.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Binary floating-point value (may be infinite or NaN).
    Float(f64),
    /// Complex value.
    Complex(Complex),
    /// Exact base-10 value.
    Decimal(Decimal),
    /// Exact fraction.
    Rational(Rational),

    // Heap Types (use Heap<T> for enforced Arc usage)
    /// String value (code-point sequence).
    Str(Heap<String>),
    /// Byte string.
    Bytes(Heap<Vec<u8>>),
    /// List of values.
    List(Heap<Vec<Value>>),
    /// Tuple of values.
    Tuple(Heap<Vec<Value>>),
    /// Mutable-kind set.
    Set(Heap<SetValue>),
    /// Immutable-kind set.
    FrozenSet(Heap<SetValue>),
    /// Mapping from keys to values.
    Map(Heap<MapValue>),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a float value.
    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a complex value.
    #[inline]
    pub fn complex(re: f64, im: f64) -> Self {
        Value::Complex(Complex::new(re, im))
    }

    /// Create a decimal value.
    #[inline]
    pub fn decimal(d: Decimal) -> Self {
        Value::Decimal(d)
    }

    /// Create a rational value, `None` if `den` is zero or the fraction
    /// cannot be normalized.
    #[inline]
    pub fn rational(num: i64, den: i64) -> Option<Self> {
        Rational::new(num, den).map(Value::Rational)
    }

    /// Create a string value.
    ///
    /// # Example
    ///
    /// ```text
    /// let s = Value::string("hello");
    /// ```
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a byte string value.
    #[inline]
    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(Heap::new(b.into()))
    }

    /// Create a list value.
    ///
    /// # Example
    ///
    /// ```text
    /// let nums = Value::list(vec![Value::int(1), Value::int(2)]);
    /// ```
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a tuple value.
    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    /// Create a set value from already-deduplicated elements.
    #[inline]
    pub fn set(items: SetValue) -> Self {
        Value::Set(Heap::new(items))
    }

    /// Create a frozen set value from already-deduplicated elements.
    #[inline]
    pub fn frozen_set(items: SetValue) -> Self {
        Value::FrozenSet(Heap::new(items))
    }

    /// Create a map value from entries with already-deduplicated keys.
    #[inline]
    pub fn map(entries: MapValue) -> Self {
        Value::Map(Heap::new(entries))
    }
}

// Value Methods

impl Value {
    /// Runtime type tag.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::None => TypeTag::None,
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
            Value::Float(f) if f.is_nan() => TypeTag::NaN,
            Value::Float(_) => TypeTag::Float,
            Value::Complex(_) => TypeTag::Complex,
            Value::Decimal(_) => TypeTag::Decimal,
            Value::Rational(_) => TypeTag::Rational,
            Value::Str(_) => TypeTag::Str,
            Value::Bytes(_) => TypeTag::Bytes,
            Value::List(_) => TypeTag::List,
            Value::Tuple(_) => TypeTag::Tuple,
            Value::Set(_) => TypeTag::Set,
            Value::FrozenSet(_) => TypeTag::FrozenSet,
            Value::Map(_) => TypeTag::Map,
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        self.type_tag().name()
    }

    /// Integer payload of `bool`/`int` operands.
    pub fn as_integral(&self) -> Option<i64> {
        match self {
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to view as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to view as a list or tuple.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Identity: whether both operands denote the same object.
    ///
    /// Heap variants compare storage addresses. `None` and the booleans are
    /// singletons. Other immediates are identical when tag and bit pattern
    /// agree, which makes a NaN identical to a copy of itself.
    pub fn is_same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Complex(a), Value::Complex(b)) => {
                a.re.to_bits() == b.re.to_bits() && a.im.to_bits() == b.im.to_bits()
            }
            (Value::Decimal(a), Value::Decimal(b)) => a.serialize() == b.serialize(),
            (Value::Rational(a), Value::Rational(b)) => a == b,
            _ => self.shares_storage(other),
        }
    }

    /// Whether both operands are heap values backed by one allocation.
    ///
    /// Unlike `is_same`, never true for immediates. Container comparison
    /// uses this as its identity shortcut, so a NaN stored in two lists
    /// still makes the lists unequal.
    pub fn shares_storage(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => Heap::ptr_eq(a, b),
            (Value::Bytes(a), Value::Bytes(b)) => Heap::ptr_eq(a, b),
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => {
                Heap::ptr_eq(a, b)
            }
            (Value::Set(a), Value::Set(b)) | (Value::FrozenSet(a), Value::FrozenSet(b)) => {
                Heap::ptr_eq(a, b)
            }
            (Value::Map(a), Value::Map(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Whether this value may be a set element or map key.
    ///
    /// Mutable containers are not; a tuple is hashable when all its
    /// elements are.
    pub fn is_hashable(&self) -> bool {
        match self {
            Value::List(_) | Value::Set(_) | Value::Map(_) => false,
            Value::Tuple(items) => items.iter().all(Value::is_hashable),
            _ => true,
        }
    }

    /// First unhashable value reachable from this one, for error messages.
    pub fn first_unhashable(&self) -> Option<&Value> {
        match self {
            Value::List(_) | Value::Set(_) | Value::Map(_) => Some(self),
            Value::Tuple(items) => items.iter().find_map(Value::first_unhashable),
            _ => None,
        }
    }
}

/// Format a float the way source literals read: always with a fractional
/// part or exponent, and `inf`/`nan` spelled out.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f.is_infinite() {
        if f.is_sign_negative() { "-inf" } else { "inf" }.to_string()
    } else {
        format!("{f:?}")
    }
}

fn write_items<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = &'a Value>,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

// Trait Implementations

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{}", format_float(*n)),
            Value::Complex(c) => write!(f, "{c}"),
            Value::Decimal(d) => write!(f, "{d}"),
            Value::Rational(r) => write!(f, "{r}"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::Bytes(b) => write!(f, "b\"{}\"", b.escape_ascii()),
            Value::List(items) => {
                write!(f, "[")?;
                write_items(f, items.iter())?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_items(f, items.iter())?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Value::Set(items) if items.is_empty() => write!(f, "set()"),
            Value::Set(items) => {
                write!(f, "{{")?;
                write_items(f, items.iter())?;
                write!(f, "}}")
            }
            Value::FrozenSet(items) => {
                write!(f, "frozenset({{")?;
                write_items(f, items.iter())?;
                write!(f, "}})")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n:?})"),
            Value::Complex(c) => write!(f, "Complex({:?}, {:?})", c.re, c.im),
            Value::Decimal(d) => write!(f, "Decimal({d})"),
            Value::Rational(r) => write!(f, "Rational({r})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Bytes(b) => write!(f, "Bytes({:?})", &**b),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Tuple(items) => write!(f, "Tuple({:?})", &**items),
            Value::Set(items) => write!(f, "Set({:?})", &**items),
            Value::FrozenSet(items) => write!(f, "FrozenSet({:?})", &**items),
            Value::Map(map) => write!(f, "Map({:?})", &**map),
        }
    }
}
