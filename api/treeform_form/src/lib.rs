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

//! # Treeform conversions
//!
//! This crate contains the [`ToTree`] and [`FromTree`] traits that describe how a type is
//! transformed to and from the generic value tree (described in [`treeform_model`]). The
//! conversion strategy for a type is chosen entirely by its static type: the traits are
//! implemented for the primitive types, strings, sequences, fixed length arrays, optionals and
//! owning pointers, each delegating to the implementation for its element type.
//!
//! Composite types describe their fields once, using a [`Mapper`], and enumerations declare
//! the labels used for their constants, using [`enum_form!`]. Both then take part in the
//! conversion of any container that holds them.
//!
//! ```
//! use treeform_form::{convert, read_new, mapped_form};
//! use treeform_model::{object, Value};
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! mapped_form! {
//!     Point {
//!         "x" => field(x),
//!         "y" => field(y),
//!     }
//! }
//!
//! let points = vec![Point { x: 1, y: 2 }];
//! let value = convert(&points);
//! assert_eq!(value, Value::Array(vec![object! { "x" => 1, "y" => 2 }]));
//!
//! let restored: Vec<Point> = read_new(&value).unwrap();
//! assert_eq!(restored, points);
//! ```

use treeform_model::Value;

#[doc(hidden)]
pub use treeform_model as model;

pub mod enumeration;
mod error;
pub mod field;
mod impls;
#[macro_use]
mod macros;
pub mod mapper;

#[cfg(test)]
mod tests;

pub use enumeration::{EnumLabels, LabelMap};
pub use error::{MapperError, ReadError};
pub use field::{Accessor, FieldAccessor, MappedField};
pub use mapper::{Mapped, Mapper, MapperBuilder};

/// Trait for types that can be written as a [`Value`].
pub trait ToTree {
    /// Represent this value in the value tree.
    fn to_tree(&self) -> Value;
}

/// Trait for types that can be read, in place, from a [`Value`].
pub trait FromTree {
    /// Overwrite this value with the contents of the node.
    ///
    /// If this fails part way through reading a compound value, anything that was written before
    /// the failure is retained.
    fn from_tree(&mut self, node: &Value) -> Result<(), ReadError>;
}

/// A `TreeForm` transforms between a Rust object and a [`Value`] in both directions.
pub trait TreeForm: ToTree + FromTree {}

impl<T: ToTree + FromTree + ?Sized> TreeForm for T {}

/// Write a value as a [`Value`], using the strategy for its type.
pub fn convert<T: ToTree + ?Sized>(value: &T) -> Value {
    value.to_tree()
}

/// Read the contents of a [`Value`] into an existing value, using the strategy for its type.
pub fn convert_from<T: FromTree + ?Sized>(node: &Value, value: &mut T) -> Result<(), ReadError> {
    value.from_tree(node)
}

/// Create a new instance of a type from a [`Value`], starting from its default value.
pub fn read_new<T: FromTree + Default>(node: &Value) -> Result<T, ReadError> {
    let mut value = T::default();
    value.from_tree(node)?;
    Ok(value)
}
