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

use treeform_model::{Number, Value};

use crate::{FromTree, ReadError, ToTree};

macro_rules! numeric_form {
    ($($ty:ty => $narrow:ident),* $(,)?) => {
        $(
            impl ToTree for $ty {
                fn to_tree(&self) -> Value {
                    Value::Number(Number::from(*self))
                }
            }

            impl FromTree for $ty {
                fn from_tree(&mut self, node: &Value) -> Result<(), ReadError> {
                    *self = node.as_number()?.$narrow();
                    Ok(())
                }
            }
        )*
    };
}

numeric_form! {
    i8 => to_i8,
    i16 => to_i16,
    i32 => to_i32,
    i64 => to_i64,
    isize => to_isize,
    u8 => to_u8,
    u16 => to_u16,
    u32 => to_u32,
    u64 => to_u64,
    usize => to_usize,
    f32 => to_f32,
    f64 => to_f64,
}

impl ToTree for bool {
    fn to_tree(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromTree for bool {
    fn from_tree(&mut self, node: &Value) -> Result<(), ReadError> {
        *self = node.as_bool()?;
        Ok(())
    }
}

impl ToTree for str {
    fn to_tree(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl ToTree for String {
    fn to_tree(&self) -> Value {
        Value::String(self.clone())
    }
}

impl FromTree for String {
    fn from_tree(&mut self, node: &Value) -> Result<(), ReadError> {
        let text = node.as_str()?;
        self.clear();
        self.push_str(text);
        Ok(())
    }
}

impl ToTree for Value {
    fn to_tree(&self) -> Value {
        self.clone()
    }
}

impl FromTree for Value {
    fn from_tree(&mut self, node: &Value) -> Result<(), ReadError> {
        self.clone_from(node);
        Ok(())
    }
}
