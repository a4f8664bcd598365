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

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use treeform_model::Value;

use crate::{FromTree, ReadError, ToTree};

impl<T: ToTree + ?Sized> ToTree for &T {
    fn to_tree(&self) -> Value {
        (**self).to_tree()
    }
}

impl<T: ToTree> ToTree for Option<T> {
    fn to_tree(&self) -> Value {
        match self {
            Some(value) => value.to_tree(),
            None => Value::Null,
        }
    }
}

impl<T: FromTree + Default> FromTree for Option<T> {
    fn from_tree(&mut self, node: &Value) -> Result<(), ReadError> {
        if node.is_null() {
            *self = None;
        } else {
            let mut value = T::default();
            value.from_tree(node)?;
            *self = Some(value);
        }
        Ok(())
    }
}

macro_rules! owning_pointer_form {
    ($($ptr:ident),*) => {
        $(
            impl<T: ToTree + ?Sized> ToTree for $ptr<T> {
                fn to_tree(&self) -> Value {
                    (**self).to_tree()
                }
            }

            impl<T: FromTree + Default> FromTree for $ptr<T> {
                fn from_tree(&mut self, node: &Value) -> Result<(), ReadError> {
                    let mut value = T::default();
                    value.from_tree(node)?;
                    *self = $ptr::new(value);
                    Ok(())
                }
            }
        )*
    };
}

owning_pointer_form!(Box, Rc, Arc);

impl<T: ToTree + Copy> ToTree for Cell<T> {
    fn to_tree(&self) -> Value {
        self.get().to_tree()
    }
}

impl<T: FromTree> FromTree for Cell<T> {
    fn from_tree(&mut self, node: &Value) -> Result<(), ReadError> {
        self.get_mut().from_tree(node)
    }
}

impl<T: ToTree> ToTree for RefCell<T> {
    fn to_tree(&self) -> Value {
        self.borrow().to_tree()
    }
}

impl<T: FromTree> FromTree for RefCell<T> {
    fn from_tree(&mut self, node: &Value) -> Result<(), ReadError> {
        self.get_mut().from_tree(node)
    }
}
