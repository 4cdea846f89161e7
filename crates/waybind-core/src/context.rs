//! External-context values and shallow comparison.
//!
//! The external context is application-defined data (authenticated user,
//! locale) injected into the navigation controller so matching and guarding
//! logic can depend on it. The adapter only ever compares contexts shallowly
//! and forwards them; it never interprets individual values.

use std::{any::Any, collections::BTreeMap, fmt, rc::Rc};

/// A single external-context value.
///
/// Primitives compare by value. [`ContextValue::Handle`] wraps an opaque
/// application object and compares strictly by pointer identity, so replacing
/// a handle with an equal-but-distinct object counts as a change.
#[derive(Clone)]
pub enum ContextValue {
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Integer(i64),
    /// Floating point number. Compared by bit pattern so equality stays
    /// reflexive even for NaN.
    Float(f64),
    /// Text value.
    Text(String),
    /// Opaque application object, compared by identity.
    Handle(Rc<dyn Any>),
}

impl PartialEq for ContextValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Handle(a), Self::Handle(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for ContextValue {}

impl fmt::Debug for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "Bool({value})"),
            Self::Integer(value) => write!(f, "Integer({value})"),
            Self::Float(value) => write!(f, "Float({value})"),
            Self::Text(value) => write!(f, "Text({value:?})"),
            Self::Handle(value) => write!(f, "Handle({:p})", Rc::as_ptr(value)),
        }
    }
}

impl From<bool> for ContextValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ContextValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// External-context map with ordered keys.
///
/// An absent context prop is treated as the empty map throughout the adapter,
/// so `None` and `RouteContext::new()` are interchangeable for comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteContext {
    entries: BTreeMap<String, ContextValue>,
}

impl RouteContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value for the key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ContextValue>,
    ) -> Option<ContextValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Value for `key`. `None` if absent.
    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.entries.get(key)
    }

    /// True if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl FromIterator<(String, ContextValue)> for RouteContext {
    fn from_iter<I: IntoIterator<Item = (String, ContextValue)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// Shallow difference between two contexts.
///
/// Two contexts differ if any key present in one is absent in the other, or
/// present in both with unequal values. Values are compared by the
/// [`ContextValue`] equality contract (identity for handles), never deeply.
/// O(total keys).
pub fn shallow_differs(a: &RouteContext, b: &RouteContext) -> bool {
    if a.iter().any(|(key, _)| !b.contains_key(key)) {
        return true;
    }
    b.iter().any(|(key, value)| a.get(key) != Some(value))
}
