use std::any::{Any, TypeId, type_name};
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use super::MessageRequest;

/// A runtime value that can be passed as an argument to a message.
///
/// Formatter dispatch selects a formatter by the value's [`ValueType`]. The
/// built-in variants cover text, nested messages, lists and numbers; any other
/// caller type travels as [`Value::Custom`] and needs a registered
/// [`FormatterFactory`](crate::FormatterFactory) to be rendered.
///
/// # Example
///
/// ```
/// use tolk::{MessageRequest, Value};
///
/// let count: Value = 42.into();
/// let name: Value = "Alice".into();
/// let items: Value = vec!["a", "b"].into();
/// let nested: Value = MessageRequest::new("color").into();
///
/// assert_eq!(count.as_integer(), Some(42));
/// assert_eq!(name.as_str(), Some("Alice"));
/// assert_eq!(items.as_list().map(<[Value]>::len), Some(2));
/// assert!(nested.as_message().is_some());
/// ```
#[derive(Clone, PartialEq)]
pub enum Value {
    /// Plain text, rendered verbatim.
    String(String),

    /// A message request, translated recursively.
    Message(Box<MessageRequest>),

    /// An ordered sequence rendered as a natural-language list.
    List(Vec<Value>),

    /// An integer. `i128` keeps 30-digit values exact.
    Integer(i128),

    /// A floating-point number.
    Float(f64),

    /// A caller-defined value handled by a registered factory.
    Custom(CustomValue),
}

/// Key used by the dispatch cache: the runtime type of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Message,
    List,
    Integer,
    Float,
    Custom { id: TypeId, name: &'static str },
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ValueType::String => f.write_str("string"),
            ValueType::Message => f.write_str("message"),
            ValueType::List => f.write_str("list"),
            ValueType::Integer => f.write_str("integer"),
            ValueType::Float => f.write_str("float"),
            ValueType::Custom { name, .. } => f.write_str(name),
        }
    }
}

impl Value {
    /// Wrap an arbitrary caller type.
    pub fn custom<T: Any + Debug + Send + Sync>(value: T) -> Self {
        Value::Custom(CustomValue::new(value))
    }

    /// The runtime type used for formatter dispatch.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::String(_) => ValueType::String,
            Value::Message(_) => ValueType::Message,
            Value::List(_) => ValueType::List,
            Value::Integer(_) => ValueType::Integer,
            Value::Float(_) => ValueType::Float,
            Value::Custom(c) => ValueType::Custom {
                id: c.value_type_id(),
                name: c.type_name(),
            },
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_message(&self) -> Option<&MessageRequest> {
        match self {
            Value::Message(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Downcast a custom value to its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Custom(c) => c.downcast_ref(),
            _ => None,
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::String(s) => write!(f, "{s:?}"),
            Value::Message(m) => write!(f, "{m}"),
            Value::List(items) => f.debug_list().entries(items).finish(),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n:?}"),
            Value::Custom(c) => write!(f, "{c:?}"),
        }
    }
}

/// A shared, type-erased caller value.
///
/// Equality is identity: two custom values are equal only when they share
/// the same allocation.
#[derive(Clone)]
pub struct CustomValue {
    inner: Arc<dyn AnyDebug>,
    name: &'static str,
}

trait AnyDebug: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Debug + Send + Sync> AnyDebug for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl CustomValue {
    pub fn new<T: Any + Debug + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            name: type_name::<T>(),
        }
    }

    /// `TypeId` of the wrapped value.
    pub fn value_type_id(&self) -> TypeId {
        (*self.inner).as_any().type_id()
    }

    pub fn type_name(&self) -> &'static str {
        self.name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.inner).as_any().downcast_ref()
    }
}

impl PartialEq for CustomValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Debug for CustomValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&*self.inner, f)
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n.into())
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::Integer(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Integer(n.into())
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        // usize is at most 64 bits on every supported target
        Value::Integer(n as i128)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<MessageRequest> for Value {
    fn from(m: MessageRequest) -> Self {
        Value::Message(Box::new(m))
    }
}

impl From<CustomValue> for Value {
    fn from(c: CustomValue) -> Self {
        Value::Custom(c)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}
