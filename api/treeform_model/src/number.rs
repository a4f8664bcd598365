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

use std::fmt::{Display, Formatter};

/// The numeric representation used by [`crate::Value`]. Signed integers are held as
/// [`Number::Int`], unsigned integers as [`Number::UInt`] and floating point numbers as
/// [`Number::Float`].
///
/// The `to_*` accessors convert to a specific width using the semantics of an `as` cast, so
/// integers wrap around when narrowed and floating point numbers saturate.
///
/// ```
/// use treeform_model::Number;
///
/// assert_eq!(Number::from(300i32).to_u8(), 44);
/// assert_eq!(Number::from(-1i64).to_u32(), u32::MAX);
/// assert_eq!(Number::from(2.5f64).to_i32(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

macro_rules! narrowing {
    ($($name:ident => $target:ty),* $(,)?) => {
        $(
            #[doc = concat!("Convert to `", stringify!($target), "` with `as` cast semantics.")]
            pub fn $name(self) -> $target {
                match self {
                    Number::Int(n) => n as $target,
                    Number::UInt(n) => n as $target,
                    Number::Float(n) => n as $target,
                }
            }
        )*
    };
}

impl Number {
    narrowing! {
        to_i8 => i8,
        to_i16 => i16,
        to_i32 => i32,
        to_i64 => i64,
        to_isize => isize,
        to_u8 => u8,
        to_u16 => u16,
        to_u32 => u32,
        to_u64 => u64,
        to_usize => usize,
        to_f32 => f32,
        to_f64 => f64,
    }

    /// Whether the number is held as an integer (either signed or unsigned).
    pub fn is_integral(&self) -> bool {
        !matches!(self, Number::Float(_))
    }

    fn as_i128(&self) -> Option<i128> {
        match self {
            Number::Int(n) => Some(i128::from(*n)),
            Number::UInt(n) => Some(i128::from(*n)),
            Number::Float(_) => None,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Float(x), Number::Float(y)) => x == y,
            _ => match (self.as_i128(), other.as_i128()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::UInt(n) => write!(f, "{}", n),
            Number::Float(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{:.1}", n),
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! number_from {
    ($variant:ident: $wide:ty => $($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n as $wide)
                }
            }
        )*
    };
}

number_from!(Int: i64 => i8, i16, i32, i64, isize);
number_from!(UInt: u64 => u8, u16, u32, u64, usize);
number_from!(Float: f64 => f32, f64);
