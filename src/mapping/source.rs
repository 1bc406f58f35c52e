//! Element data access.

use std::collections::HashMap;
use std::hash::BuildHasher;

use serde_json::{Map, Value};

/// Read access to a graph element's data attributes.
///
/// Missing attributes read as [`Value::Null`]. Implemented for JSON objects
/// and string-keyed maps; an element held by the graph library can implement
/// it directly.
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Value;
}

impl AttributeSource for Value {
    fn attribute(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or(Value::Null)
    }
}

impl AttributeSource for Map<String, Value> {
    fn attribute(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or(Value::Null)
    }
}

impl<S: BuildHasher> AttributeSource for HashMap<String, Value, S> {
    fn attribute(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or(Value::Null)
    }
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
    fn attribute(&self, name: &str) -> Value {
        (**self).attribute(name)
    }
}
