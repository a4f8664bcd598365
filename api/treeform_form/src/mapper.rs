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

use std::collections::HashSet;
use std::fmt::{Debug, Formatter};

use static_assertions::assert_impl_all;
use tracing::trace;
use treeform_model::{Map, ModelError, Value, ValueKind};

use crate::field::{Accessor, FieldAccessor, MappedField};
use crate::{MapperError, ReadError, TreeForm};

type BoxedField<C> = Box<dyn MappedField<C> + Send + Sync>;

/// An ordered list of named fields, all belonging to the composite type `C`, that converts
/// instances of `C` to and from object values.
///
/// A mapper is built once, using a [`MapperBuilder`], and can then be shared freely between
/// threads. It never owns an instance of `C`.
///
/// ```
/// use treeform_form::{Accessor, Mapper};
/// use treeform_model::{object, Value};
///
/// #[derive(Default)]
/// struct Account {
///     id: u64,
///     owner: String,
/// }
///
/// impl Account {
///     fn id(&self) -> u64 {
///         self.id
///     }
/// }
///
/// let mapper = Mapper::<Account>::builder()
///     .read_only("id", Account::id)
///     .direct("owner", |a| &a.owner, |a| &mut a.owner)
///     .build()
///     .unwrap();
///
/// let mut account = Account { id: 7, owner: "Ada".to_string() };
/// assert_eq!(mapper.to_tree(&account), object! { "id" => 7u64, "owner" => "Ada" });
///
/// mapper.from_tree(&object! { "id" => 99u64, "owner" => "Grace" }, &mut account).unwrap();
/// assert_eq!(account.id, 7);
/// assert_eq!(account.owner, "Grace");
/// ```
pub struct Mapper<C> {
    fields: Vec<BoxedField<C>>,
}

assert_impl_all!(Mapper<()>: Send, Sync);

impl<C: 'static> Mapper<C> {
    pub fn builder() -> MapperBuilder<C> {
        MapperBuilder::new()
    }

    /// Write each field of the owner into an object, keyed by the field name.
    pub fn to_tree(&self, owner: &C) -> Value {
        let fields = self
            .fields
            .iter()
            .map(|field| (field.name().to_string(), field.write_field(owner)))
            .collect::<Map>();
        Value::Object(fields)
    }

    /// Read each writable field of the owner from an object. A field that is missing from the
    /// object is read from a null value. A null node is treated as an object with no fields.
    pub fn from_tree(&self, node: &Value, owner: &mut C) -> Result<(), ReadError> {
        if !matches!(node, Value::Object(_) | Value::Null) {
            return Err(ModelError::kind_mismatch(ValueKind::Object, node.kind()).into());
        }
        let null = Value::Null;
        for field in &self.fields {
            let name = field.name();
            if !field.is_writable() {
                trace!(field = name, "Skipping read only field.");
                continue;
            }
            let item = match node.get(name) {
                Some(item) => item,
                None => {
                    trace!(field = name, "Field is absent. Reading it from null.");
                    &null
                }
            };
            field.read_field(item, owner)?;
        }
        Ok(())
    }
}

impl<C> Mapper<C> {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The names of the fields, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|field| field.name())
    }

    pub fn fields(&self) -> impl Iterator<Item = &dyn MappedField<C>> + '_ {
        self.fields
            .iter()
            .map(|field| field.as_ref() as &dyn MappedField<C>)
    }
}

impl<C> Debug for Mapper<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapper")
            .field("fields", &self.field_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder that collects the fields of a [`Mapper`], in order.
pub struct MapperBuilder<C> {
    fields: Vec<BoxedField<C>>,
}

impl<C: 'static> Default for MapperBuilder<C> {
    fn default() -> Self {
        MapperBuilder::new()
    }
}

impl<C: 'static> MapperBuilder<C> {
    pub fn new() -> Self {
        MapperBuilder { fields: vec![] }
    }

    /// Add a field with any kind of accessor.
    pub fn field<F, S>(mut self, name: S, accessor: Accessor<C, F>) -> Self
    where
        F: TreeForm + Default + 'static,
        S: Into<String>,
    {
        self.fields.push(Box::new(FieldAccessor::new(name, accessor)));
        self
    }

    /// Add a field that is stored directly in the owner.
    pub fn direct<F, S>(self, name: S, get: fn(&C) -> &F, get_mut: fn(&mut C) -> &mut F) -> Self
    where
        F: TreeForm + Default + 'static,
        S: Into<String>,
    {
        self.field(name, Accessor::Field { get, get_mut })
    }

    /// Add a field that is accessed through methods that return references to it.
    pub fn reference<F, S>(self, name: S, get: fn(&C) -> &F, get_mut: fn(&mut C) -> &mut F) -> Self
    where
        F: TreeForm + Default + 'static,
        S: Into<String>,
    {
        self.field(name, Accessor::Reference { get, get_mut })
    }

    /// Add a field that is written but never read.
    pub fn read_only<F, S>(self, name: S, get: fn(&C) -> F) -> Self
    where
        F: TreeForm + Default + 'static,
        S: Into<String>,
    {
        self.field(name, Accessor::ReadOnly(get))
    }

    /// Add a field that is accessed with a getter and setter.
    pub fn get_set<F, S>(self, name: S, get: fn(&C) -> F, set: fn(&mut C, F)) -> Self
    where
        F: TreeForm + Default + 'static,
        S: Into<String>,
    {
        self.field(name, Accessor::GetSet { get, set })
    }

    /// Create the mapper, checking that no two fields share a name.
    pub fn build(self) -> Result<Mapper<C>, MapperError> {
        let MapperBuilder { fields } = self;
        let mut names = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !names.insert(field.name()) {
                return Err(MapperError::DuplicateField(field.name().to_string()));
            }
        }
        Ok(Mapper { fields })
    }
}

/// Composite types with a single, shared [`Mapper`]. This is normally implemented with
/// [`mapped_form!`](crate::mapped_form).
pub trait Mapped: Sized + 'static {
    fn mapper() -> &'static Mapper<Self>;
}
