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

//! Enumerations are written as string labels. The association between the constants of an
//! enumeration and their labels is declared once, with [`enum_form!`](crate::enum_form), and
//! is built lazily, exactly once, on first use.

use static_assertions::assert_impl_all;
use tracing::debug;
use treeform_model::Value;

use crate::ReadError;

/// A fixed association between the constants of an enumeration and their labels.
#[derive(Debug, Clone)]
pub struct LabelMap<E> {
    entries: Vec<(E, &'static str)>,
}

assert_impl_all!(LabelMap<u8>: Send, Sync);

impl<E> LabelMap<E> {
    pub fn new(entries: Vec<(E, &'static str)>) -> Self {
        LabelMap { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the constant with the given label. If more than one constant has the label, the
    /// first declared wins.
    pub fn value_of(&self, label: &str) -> Option<&E> {
        self.entries
            .iter()
            .find(|(_, l)| *l == label)
            .map(|(value, _)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&E, &'static str)> + '_ {
        self.entries.iter().map(|(value, label)| (value, *label))
    }
}

impl<E: PartialEq> LabelMap<E> {
    pub fn label_of(&self, value: &E) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, label)| *label)
    }
}

/// Enumerations with a declared set of labels. This is normally implemented with
/// [`enum_form!`](crate::enum_form) which guarantees that every constant has a label.
pub trait EnumLabels: Clone + 'static {
    /// The label of this constant.
    fn label(&self) -> &'static str;

    /// The shared label map for the type.
    fn labels() -> &'static LabelMap<Self>;
}

/// Write an enumeration constant as its label.
pub fn write_label<E: EnumLabels>(value: &E) -> Value {
    Value::String(value.label().to_string())
}

/// Read an enumeration constant from its label. A label that matches no constant leaves the
/// value unchanged; it is not an error.
pub fn read_label<E: EnumLabels>(node: &Value, value: &mut E) -> Result<(), ReadError> {
    let label = node.as_str()?;
    if let Some(constant) = E::labels().value_of(label) {
        *value = constant.clone();
    } else {
        debug!(
            enumeration = std::any::type_name::<E>(),
            %label,
            "No constant matches the label. The value is unchanged."
        );
    }
    Ok(())
}
