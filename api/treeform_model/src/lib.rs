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

//! # Treeform value model
//!
//! The generic hierarchical representation that the `treeform_form` crate converts Rust values
//! to and from. A [`Value`] is one of null, boolean, number, string, array or object. Typed
//! access to a value (for example [`Value::as_bool`]) fails with a [`ModelError`] when the
//! kind of the value does not match.
//!
//! With the `json` feature enabled, values can be rendered to and parsed from JSON text.

use std::fmt::Formatter;

mod error;
#[cfg(feature = "json")]
mod json;
#[macro_use]
pub mod macros;
mod number;
#[cfg(test)]
mod tests;
mod value;

pub use error::ModelError;
pub use number::Number;
pub use value::{Map, Value, ValueKind};

/// Write a string literal, quoted and with any characters that require it escaped.
pub fn write_string_literal(literal: &str, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
    if needs_escape(literal) {
        write!(f, "\"{}\"", escape_text(literal))
    } else {
        write!(f, "\"{}\"", literal)
    }
}

static DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

fn escape_text(text: &str) -> String {
    let mut output = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\r' => output.push_str("\\r"),
            '\n' => output.push_str("\\n"),
            '\t' => output.push_str("\\t"),
            '\u{08}' => output.push_str("\\b"),
            '\u{0c}' => output.push_str("\\f"),
            cp if cp < '\u{20}' => {
                let n = cp as usize;
                output.push_str("\\u");
                output.push(DIGITS[(n >> 12) & 0xf]);
                output.push(DIGITS[(n >> 8) & 0xf]);
                output.push(DIGITS[(n >> 4) & 0xf]);
                output.push(DIGITS[n & 0xf]);
            }
            _ => output.push(c),
        }
    }
    output
}

fn needs_escape(text: &str) -> bool {
    text.chars().any(|c| c < '\u{20}' || c == '"' || c == '\\')
}
