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

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

use treeform_model::{Map, Value};

use crate::{FromTree, ReadError, ToTree};

impl<T: ToTree> ToTree for [T] {
    fn to_tree(&self) -> Value {
        Value::Array(self.iter().map(ToTree::to_tree).collect())
    }
}

macro_rules! impl_seq_form {
    ($($ty:ident => $push:ident),*) => {
        $(
            impl<T: ToTree> ToTree for $ty<T> {
                fn to_tree(&self) -> Value {
                    Value::Array(self.iter().map(ToTree::to_tree).collect())
                }
            }

            impl<T: FromTree + Default> FromTree for $ty<T> {
                fn from_tree(&mut self, node: &Value) -> Result<(), ReadError> {
                    let items = node.as_array()?;
                    self.clear();
                    self.reserve(items.len());
                    for item in items {
                        let mut value = T::default();
                        value.from_tree(item)?;
                        self.$push(value);
                    }
                    Ok(())
                }
            }
        )*
    };
}

impl_seq_form!(Vec => push, VecDeque => push_back);

impl<T: ToTree, const N: usize> ToTree for [T; N] {
    fn to_tree(&self) -> Value {
        self.as_slice().to_tree()
    }
}

/// Arrays of a fixed length can only be read from an array node of exactly that length. Any
/// other length is rejected before the target is modified.
impl<T: FromTree + Default, const N: usize> FromTree for [T; N] {
    fn from_tree(&mut self, node: &Value) -> Result<(), ReadError> {
        let items = node.as_array()?;
        if items.len() != N {
            return Err(ReadError::LengthMismatch {
                expected: N,
                actual: items.len(),
            });
        }
        for (slot, item) in self.iter_mut().zip(items) {
            let mut value = T::default();
            value.from_tree(item)?;
            *slot = value;
        }
        Ok(())
    }
}

impl<V: ToTree> ToTree for BTreeMap<String, V> {
    fn to_tree(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(name, value)| (name.clone(), value.to_tree()))
                .collect::<Map>(),
        )
    }
}

impl<V: FromTree + Default> FromTree for BTreeMap<String, V> {
    fn from_tree(&mut self, node: &Value) -> Result<(), ReadError> {
        let fields = node.as_object()?;
        self.clear();
        for (name, item) in fields {
            let mut value = V::default();
            value.from_tree(item)?;
            self.insert(name.clone(), value);
        }
        Ok(())
    }
}

impl<V: ToTree, S: BuildHasher> ToTree for HashMap<String, V, S> {
    fn to_tree(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(name, value)| (name.clone(), value.to_tree()))
                .collect::<Map>(),
        )
    }
}

impl<V: FromTree + Default, S: BuildHasher> FromTree for HashMap<String, V, S> {
    fn from_tree(&mut self, node: &Value) -> Result<(), ReadError> {
        let fields = node.as_object()?;
        self.clear();
        self.reserve(fields.len());
        for (name, item) in fields {
            let mut value = V::default();
            value.from_tree(item)?;
            self.insert(name.clone(), value);
        }
        Ok(())
    }
}
