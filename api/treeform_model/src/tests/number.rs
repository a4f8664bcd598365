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

use crate::Number;

#[test]
fn integers_wrap_when_narrowed() {
    assert_eq!(Number::from(300i32).to_u8(), 44);
    assert_eq!(Number::from(-1i32).to_u8(), u8::MAX);
    assert_eq!(Number::from(-1i64).to_u64(), u64::MAX);
    assert_eq!(Number::from(u64::MAX).to_i64(), -1);
    assert_eq!(Number::from(70000u32).to_i16(), 4464);
    assert_eq!(Number::from(i64::MIN).to_i32(), 0);
}

#[test]
fn floats_saturate_when_converted_to_integers() {
    assert_eq!(Number::from(2.75f64).to_i32(), 2);
    assert_eq!(Number::from(-2.75f64).to_i32(), -2);
    assert_eq!(Number::from(1e12f64).to_i32(), i32::MAX);
    assert_eq!(Number::from(-5.0f64).to_u32(), 0);
}

#[test]
fn integers_convert_to_floats() {
    assert_eq!(Number::from(3i8).to_f64(), 3.0);
    assert_eq!(Number::from(7u16).to_f32(), 7.0);
    assert_eq!(Number::from(0.5f32).to_f64(), 0.5);
}

#[test]
fn integral_check() {
    assert!(Number::from(1i32).is_integral());
    assert!(Number::from(1u32).is_integral());
    assert!(!Number::from(1.0f64).is_integral());
}

#[test]
fn equality_ignores_signedness() {
    assert_eq!(Number::Int(5), Number::UInt(5));
    assert_eq!(Number::UInt(0), Number::Int(0));
    assert_ne!(Number::Int(-1), Number::UInt(u64::MAX));
    assert_ne!(Number::Int(1), Number::Float(1.0));
    assert_eq!(Number::Float(1.5), Number::Float(1.5));
}

#[test]
fn display_numbers() {
    assert_eq!(Number::Int(-12).to_string(), "-12");
    assert_eq!(Number::UInt(12).to_string(), "12");
    assert_eq!(Number::Float(2.0).to_string(), "2.0");
    assert_eq!(Number::Float(0.25).to_string(), "0.25");
}
