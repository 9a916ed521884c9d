//! Translation keys: the values call sites build to ask for a message.
//!
//! A [`TranslationKey`] names one message and carries the positional
//! arguments to substitute into it. A [`MultiKey`] strings several keys
//! together so they can be translated and concatenated in one call.
//!
//! The empty key `""` is a structural no-op: it always translates to the
//! empty string and is dropped when added to a [`MultiKey`]. This lets call
//! sites compose optional messages without branching.

use crate::i18n::{Result, TranslationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A positional argument substituted into a template.
///
/// Built through `From` for text, integers, floats, `bool` and `char`.
/// Values are normalised on the way in so each one has a single
/// representation: unsigned integers that fit in `i64` are stored as signed,
/// a `char` is stored as one-character text, and an `f32` keeps its shortest
/// decimal form. A key therefore compares equal to itself after a JSON round
/// trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arg(Value);

/// Deserialization tries the variants in order, so `Unsigned` only ever
/// holds values above `i64::MAX`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum Value {
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

// Floats compare by bit pattern so that equality stays reflexive and
// consistent with `Hash`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Unsigned(a), Value::Unsigned(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Bool(v) => v.hash(state),
            Value::Integer(v) => v.hash(state),
            Value::Unsigned(v) => v.hash(state),
            Value::Float(v) => v.to_bits().hash(state),
            Value::Text(v) => v.hash(state),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::Bool(v) => write!(f, "{}", v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Unsigned(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => f.write_str(v),
        }
    }
}

macro_rules! arg_from {
    ($($ty:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg(Value::$variant(<$target>::from(value)))
                }
            }
        )*
    };
}

arg_from! {
    bool => Bool as bool,
    i8 => Integer as i64,
    i16 => Integer as i64,
    i32 => Integer as i64,
    i64 => Integer as i64,
    u8 => Integer as i64,
    u16 => Integer as i64,
    u32 => Integer as i64,
    f64 => Float as f64,
    String => Text as String,
    &str => Text as String,
}

impl From<u64> for Arg {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(signed) => Arg(Value::Integer(signed)),
            Err(_) => Arg(Value::Unsigned(value)),
        }
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Arg::from(value as u64)
    }
}

// Widening `0.1f32` directly would display as `0.10000000149011612`.
impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        let widened = value
            .to_string()
            .parse::<f64>()
            .unwrap_or_else(|_| f64::from(value));
        Arg(Value::Float(widened))
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Arg(Value::Text(value.to_string()))
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg(Value::Text(value.clone()))
    }
}

/// Identifies a message to translate, with optional positional arguments.
///
/// Keys are immutable once built. Equality and hashing are structural: two
/// keys are equal when they have the same key string and the same argument
/// sequence, in the same order.
///
/// # Example
/// ```
/// use client_translation::i18n::TranslationKey;
///
/// let greet = TranslationKey::with_args("greet", ["World"]);
/// assert_eq!(greet.key(), "greet");
/// assert_eq!(greet.args().len(), 1);
/// assert_eq!(TranslationKey::new("greet"), TranslationKey::with_args("greet", Vec::<String>::new()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationKey {
    key: String,
    #[serde(default)]
    args: Vec<Arg>,
}

impl TranslationKey {
    /// The empty key, which translates to `""`.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Create a key without arguments.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            args: Vec::new(),
        }
    }

    /// Create a key with positional arguments.
    ///
    /// An empty argument list is the same key as [`TranslationKey::new`].
    pub fn with_args<I>(key: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        Self {
            key: key.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a key from arguments that may be absent, e.g. decoded data.
    ///
    /// # Errors
    /// `InvalidArgument` if any argument is `None`.
    pub fn try_with_args<I, A>(key: impl Into<String>, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<A>>,
        A: Into<Arg>,
    {
        let key = key.into();
        let args = args
            .into_iter()
            .enumerate()
            .map(|(index, arg)| {
                arg.map(Into::into).ok_or_else(|| {
                    TranslationError::invalid_argument(format!(
                        "argument {} of key '{}' is absent",
                        index, key
                    ))
                })
            })
            .collect::<Result<Vec<Arg>>>()?;
        Ok(Self { key, args })
    }

    /// The key string looked up in the language table.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The positional arguments, in placeholder order.
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// `true` if the key string is empty.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl From<&str> for TranslationKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for TranslationKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

/// An ordered, non-empty group of keys translated and concatenated together.
///
/// A `MultiKey` never holds an empty key: empty keys are silently dropped at
/// construction and by [`MultiKey::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiKey {
    keys: Vec<TranslationKey>,
}

impl MultiKey {
    /// Build a multi key from an ordered sequence of keys.
    ///
    /// # Errors
    /// `InvalidArgument` if no non-empty key remains after dropping the
    /// empty ones.
    pub fn new<I>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = TranslationKey>,
    {
        let keys: Vec<TranslationKey> = keys.into_iter().filter(|k| !k.is_empty()).collect();
        if keys.is_empty() {
            return Err(TranslationError::invalid_argument(
                "a multi key needs at least one non-empty key",
            ));
        }
        Ok(Self { keys })
    }

    /// Build a multi key from keys that may be absent.
    ///
    /// # Errors
    /// `InvalidArgument` if any element is `None`, or if no non-empty key
    /// remains.
    pub fn try_new<I>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<TranslationKey>>,
    {
        let keys = keys
            .into_iter()
            .map(|key| {
                key.ok_or_else(|| TranslationError::invalid_argument("multi key element is absent"))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(keys)
    }

    /// Append a key. Empty keys are ignored.
    pub fn add(&mut self, key: TranslationKey) -> &mut Self {
        if !key.is_empty() {
            self.keys.push(key);
        }
        self
    }

    /// The keys, in insertion order.
    pub fn keys(&self) -> &[TranslationKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Never true: a multi key holds at least one key.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TranslationKey> {
        self.keys.iter()
    }
}

impl<'a> IntoIterator for &'a MultiKey {
    type Item = &'a TranslationKey;
    type IntoIter = std::slice::Iter<'a, TranslationKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
