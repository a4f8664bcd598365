// Copyright 2015-2024 Treeform developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use crate::{write_string_literal, ModelError, Number};

/// The fields of an object [`Value`]. The order of the fields carries no meaning.
pub type Map = BTreeMap<String, Value>;

/// The generic value tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A collection of named fields.
    Object(Map),
}

/// An enumeration of the kinds of [`Value`], used when reporting mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Null => "Null",
            ValueKind::Bool => "Bool",
            ValueKind::Number => "Number",
            ValueKind::String => "String",
            ValueKind::Array => "Array",
            ValueKind::Object => "Object",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn null() -> Value {
        Value::Null
    }

    pub fn boolean(b: bool) -> Value {
        Value::Bool(b)
    }

    pub fn number<N: Into<Number>>(n: N) -> Value {
        Value::Number(n.into())
    }

    pub fn string<S: Into<String>>(s: S) -> Value {
        Value::String(s.into())
    }

    /// Create an array containing `len` null values.
    pub fn array(len: usize) -> Value {
        Value::Array(vec![Value::Null; len])
    }

    /// Create an object with no fields.
    pub fn object() -> Value {
        Value::Object(Map::new())
    }

    /// Create an array from a vector of anything that can be converted into a [`Value`].
    pub fn from_vec<V: Into<Value>>(items: Vec<V>) -> Value {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Result<bool, ModelError> {
        match self {
            Value::Bool(b) => Ok(*b),
            ow => Err(ModelError::kind_mismatch(ValueKind::Bool, ow.kind())),
        }
    }

    /// Read the value as a number. Use the narrowing accessors of [`Number`] to obtain a value
    /// of a specific width.
    pub fn as_number(&self) -> Result<Number, ModelError> {
        match self {
            Value::Number(n) => Ok(*n),
            ow => Err(ModelError::kind_mismatch(ValueKind::Number, ow.kind())),
        }
    }

    pub fn as_f64(&self) -> Result<f64, ModelError> {
        self.as_number().map(Number::to_f64)
    }

    pub fn as_str(&self) -> Result<&str, ModelError> {
        match self {
            Value::String(s) => Ok(s.as_str()),
            ow => Err(ModelError::kind_mismatch(ValueKind::String, ow.kind())),
        }
    }

    pub fn as_array(&self) -> Result<&[Value], ModelError> {
        match self {
            Value::Array(items) => Ok(items.as_slice()),
            ow => Err(ModelError::kind_mismatch(ValueKind::Array, ow.kind())),
        }
    }

    pub fn as_object(&self) -> Result<&Map, ModelError> {
        match self {
            Value::Object(fields) => Ok(fields),
            ow => Err(ModelError::kind_mismatch(ValueKind::Object, ow.kind())),
        }
    }

    /// The number of elements of an array or fields of an object. Any other kind of value has
    /// no children.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(fields) => fields.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the elements of an array, in order.
    pub fn iter(&self) -> Result<std::slice::Iter<'_, Value>, ModelError> {
        self.as_array().map(|items| items.iter())
    }

    /// Whether this is an object with a field of the given name.
    pub fn has_field(&self, name: &str) -> bool {
        matches!(self, Value::Object(fields) if fields.contains_key(name))
    }

    /// Look up a field of an object. This returns `None` when the value is not an object.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(fields) => fields.get(name),
            _ => None,
        }
    }

    /// Look up an element of an array. This returns `None` when the value is not an array.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Get a mutable reference to a field of an object, inserting a null field if it does not
    /// exist. A null value is first replaced with an empty object.
    ///
    /// ```
    /// use treeform_model::Value;
    ///
    /// let mut value = Value::null();
    /// *value.field_mut("name").unwrap() = Value::string("Ada");
    /// assert_eq!(value.get("name"), Some(&Value::string("Ada")));
    /// ```
    pub fn field_mut(&mut self, name: &str) -> Result<&mut Value, ModelError> {
        if self.is_null() {
            *self = Value::object();
        }
        match self {
            Value::Object(fields) => Ok(fields.entry(name.to_string()).or_default()),
            ow => Err(ModelError::kind_mismatch(ValueKind::Object, ow.kind())),
        }
    }

    /// Get a mutable reference to an element of an array.
    pub fn element_mut(&mut self, index: usize) -> Result<&mut Value, ModelError> {
        match self {
            Value::Array(items) => {
                let len = items.len();
                items
                    .get_mut(index)
                    .ok_or(ModelError::IndexOutOfBounds { index, len })
            }
            ow => Err(ModelError::kind_mismatch(ValueKind::Array, ow.kind())),
        }
    }

    /// Set a field of an object, returning the previous value of the field, if any.
    pub fn insert<S: Into<String>, V: Into<Value>>(
        &mut self,
        name: S,
        value: V,
    ) -> Result<Option<Value>, ModelError> {
        if self.is_null() {
            *self = Value::object();
        }
        match self {
            Value::Object(fields) => Ok(fields.insert(name.into(), value.into())),
            ow => Err(ModelError::kind_mismatch(ValueKind::Object, ow.kind())),
        }
    }

    /// Append an element to an array.
    pub fn push<V: Into<Value>>(&mut self, value: V) -> Result<(), ModelError> {
        match self {
            Value::Array(items) => {
                items.push(value.into());
                Ok(())
            }
            ow => Err(ModelError::kind_mismatch(ValueKind::Array, ow.kind())),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(Number::Float(n)) if !n.is_finite() => f.write_str("null"),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write_string_literal(s, f),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Object(fields) => {
                f.write_str("{")?;
                for (i, (name, item)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_string_literal(name, f)?;
                    write!(f, ":{}", item)?;
                }
                f.write_str("}")
            }
        }
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
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

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(fields: Map) -> Self {
        Value::Object(fields)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(opt: Option<V>) -> Self {
        opt.map(Into::into).unwrap_or_default()
    }
}
