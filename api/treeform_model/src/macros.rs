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

/// Creates an array value from the provided items.
///
/// ```
/// use treeform_model::{array, Value};
///
/// let value = array![1i32, "two", true];
/// assert_eq!(value, Value::Array(vec![
///     Value::from(1i32),
///     Value::string("two"),
///     Value::boolean(true),
/// ]));
///
/// assert_eq!(array![], Value::Array(vec![]));
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Value::Array(::std::vec::Vec::new())
    };
    ($($items:expr),+ $(,)?) => {
        $crate::Value::Array(::std::vec![$($crate::Value::from($items)),+])
    };
}

/// Creates an object value from the provided name and value pairs.
///
/// ```
/// use treeform_model::{array, object, Value};
///
/// let value = object! {
///     "name" => "Ada",
///     "scores" => array![1u32, 2u32],
/// };
/// assert!(value.has_field("name"));
/// assert_eq!(value.get("scores").map(Value::len), Some(2));
///
/// assert_eq!(object!(), Value::object());
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::Value::object()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Map::new();
        $(
            fields.insert(::std::string::String::from($name), $crate::Value::from($value));
        )+
        $crate::Value::Object(fields)
    }};
}
