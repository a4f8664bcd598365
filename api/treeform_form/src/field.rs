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

//! Field accessors describe how one named, logical field of a composite type is read and
//! written.

use treeform_model::Value;

use crate::{ReadError, TreeForm};

/// The ways in which a field of type `F` can be accessed on an owner of type `C`.
///
/// Any closure that captures nothing can be used where a function pointer is expected, so
/// the projections of a [`Accessor::Field`] are normally written as `|c| &c.name` and
/// `|c| &mut c.name` (or generated with [`field!`](crate::field)).
pub enum Accessor<C, F> {
    /// Storage embedded directly in the owner. Readable and writable.
    Field {
        get: fn(&C) -> &F,
        get_mut: fn(&mut C) -> &mut F,
    },
    /// A pair of accessor methods that lend references to the field. Writing assigns through the
    /// mutable reference.
    Reference {
        get: fn(&C) -> &F,
        get_mut: fn(&mut C) -> &mut F,
    },
    /// A method that returns the value of the field. Writing is a no-op.
    ReadOnly(fn(&C) -> F),
    /// A getter and setter pair.
    GetSet {
        get: fn(&C) -> F,
        set: fn(&mut C, F),
    },
}

impl<C, F> Clone for Accessor<C, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, F> Copy for Accessor<C, F> {}

impl<C, F> Accessor<C, F> {
    pub fn is_writable(&self) -> bool {
        !matches!(self, Accessor::ReadOnly(_))
    }
}

/// A named field of the composite type `C` with values of type `F`.
pub struct FieldAccessor<C, F> {
    name: String,
    accessor: Accessor<C, F>,
}

impl<C, F> FieldAccessor<C, F> {
    pub fn new<S: Into<String>>(name: S, accessor: Accessor<C, F>) -> Self {
        FieldAccessor {
            name: name.into(),
            accessor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn accessor(&self) -> Accessor<C, F> {
        self.accessor
    }

    /// Every kind of accessor can be read.
    pub fn is_readable(&self) -> bool {
        true
    }

    pub fn is_writable(&self) -> bool {
        self.accessor.is_writable()
    }

    /// Whether the accessor refers directly to storage in the owner.
    pub fn is_field(&self) -> bool {
        matches!(self.accessor, Accessor::Field { .. })
    }

    /// The current value of the field.
    pub fn get(&self, owner: &C) -> F
    where
        F: Clone,
    {
        match self.accessor {
            Accessor::Field { get, .. } | Accessor::Reference { get, .. } => get(owner).clone(),
            Accessor::ReadOnly(get) | Accessor::GetSet { get, .. } => get(owner),
        }
    }

    /// Replace the value of the field. This does nothing for read only fields.
    pub fn set(&self, owner: &mut C, value: F) {
        match self.accessor {
            Accessor::Field { get_mut, .. } | Accessor::Reference { get_mut, .. } => {
                *get_mut(owner) = value;
            }
            Accessor::ReadOnly(_) => {}
            Accessor::GetSet { set, .. } => set(owner, value),
        }
    }
}

/// A field of the composite type `C` with the type of its values erased. A [`crate::Mapper`]
/// holds an ordered list of these.
pub trait MappedField<C> {
    fn name(&self) -> &str;

    fn is_writable(&self) -> bool;

    /// Write the current value of the field.
    fn write_field(&self, owner: &C) -> Value;

    /// Read a new value for the field from the node and assign it.
    fn read_field(&self, node: &Value, owner: &mut C) -> Result<(), ReadError>;
}

impl<C, F> MappedField<C> for FieldAccessor<C, F>
where
    F: TreeForm + Default,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn is_writable(&self) -> bool {
        self.accessor.is_writable()
    }

    fn write_field(&self, owner: &C) -> Value {
        match self.accessor {
            Accessor::Field { get, .. } | Accessor::Reference { get, .. } => get(owner).to_tree(),
            Accessor::ReadOnly(get) | Accessor::GetSet { get, .. } => get(owner).to_tree(),
        }
    }

    fn read_field(&self, node: &Value, owner: &mut C) -> Result<(), ReadError> {
        let mut value = F::default();
        value.from_tree(node)?;
        self.set(owner, value);
        Ok(())
    }
}
