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
use treeform_model::ModelError;

/// Error type for failed attempts to read a value from the value tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The tree did not have the expected shape. This is reported by the value tree itself.
    #[error(transparent)]
    Model(#[from] ModelError),
    /// An array was read into a fixed length target of a different length.
    #[error("Expected an array of length {expected} but it had {actual} elements.")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Error type for invalid mapper declarations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapperError {
    #[error("Multiple fields with the same name: {0}")]
    DuplicateField(String),
}
