mod request;
mod value;

pub use request::MessageRequest;
pub use value::{CustomValue, Value, ValueType};
