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

use thiserror::Error;

use crate::ValueKind;

/// Errors produced by the typed accessors of [`crate::Value`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    #[error("Expected a value of kind {expected} but found {actual}.")]
    KindMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },
    #[error("Index {index} is out of bounds for an array of length {len}.")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl ModelError {
    pub fn kind_mismatch(expected: ValueKind, actual: ValueKind) -> Self {
        ModelError::KindMismatch { expected, actual }
    }
}
