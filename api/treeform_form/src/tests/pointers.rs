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

use treeform_model::{array, Value};

use crate::{convert, read_new, FromTree, ToTree};

#[test]
fn absent_optional_is_null() {
    assert_eq!(None::<i32>.to_tree(), Value::Null);
}

#[test]
fn present_optional_is_its_value() {
    assert_eq!(Some(5i32).to_tree(), Value::from(5));
}

#[test]
fn optional_from_null() {
    let mut opt = Some(3i32);
    opt.from_tree(&Value::Null).unwrap();
    assert_eq!(opt, None);
}

#[test]
fn optional_from_value() {
    let mut opt: Option<i32> = None;
    opt.from_tree(&Value::from(5)).unwrap();
    assert_eq!(opt, Some(5));
}

#[test]
fn optional_failure_leaves_target() {
    let mut opt = Some(3i32);
    assert!(opt.from_tree(&Value::from(true)).is_err());
    assert_eq!(opt, Some(3));
}

#[test]
fn nested_optionals_collapse_to_null() {
    assert_eq!(Some(None::<u8>).to_tree(), Value::Null);
    assert_eq!(read_new::<Option<Option<u8>>>(&Value::Null), Ok(None));
    assert_eq!(
        read_new::<Option<Option<u8>>>(&Value::from(1u8)),
        Ok(Some(Some(1)))
    );
}

#[test]
fn optional_elements() {
    let values = vec![Some(1i32), None, Some(3)];
    let tree = values.to_tree();
    assert_eq!(tree, array![1, Value::Null, 3]);
    assert_eq!(read_new::<Vec<Option<i32>>>(&tree), Ok(values));
}

#[test]
fn boxed_values() {
    let boxed = Box::new(String::from("inside"));
    assert_eq!(boxed.to_tree(), Value::string("inside"));

    let mut target = Box::new(String::new());
    target.from_tree(&Value::string("replaced")).unwrap();
    assert_eq!(*target, "replaced");
}

#[test]
fn nullable_box() {
    let mut target: Option<Box<u32>> = Some(Box::new(1));
    target.from_tree(&Value::Null).unwrap();
    assert!(target.is_none());

    target.from_tree(&Value::from(12u32)).unwrap();
    assert_eq!(target.as_deref(), Some(&12));
    assert_eq!(convert(&target), Value::from(12u32));
}

#[test]
fn shared_pointers_are_rebound() {
    let original = Rc::new(1i32);
    let mut target = original.clone();
    target.from_tree(&Value::from(2)).unwrap();
    assert_eq!(*target, 2);
    assert_eq!(*original, 1);
    assert!(!Rc::ptr_eq(&original, &target));

    let mut arc: Arc<Vec<bool>> = Arc::default();
    arc.from_tree(&array![true]).unwrap();
    assert_eq!(*arc, vec![true]);
    assert_eq!(arc.to_tree(), array![true]);
}

#[test]
fn boxed_str_is_written() {
    let text: Box<str> = Box::from("boxed");
    assert_eq!(text.to_tree(), Value::string("boxed"));
}

#[test]
fn references_are_written() {
    let value = 10u16;
    let reference = &value;
    assert_eq!(convert(&reference), Value::from(10u16));
}

#[test]
fn cells() {
    let mut cell = Cell::new(1i64);
    assert_eq!(cell.to_tree(), Value::from(1i64));
    cell.from_tree(&Value::from(2i64)).unwrap();
    assert_eq!(cell.get(), 2);

    let mut ref_cell = RefCell::new(vec![1u8]);
    ref_cell.from_tree(&array![2u8, 3u8]).unwrap();
    assert_eq!(ref_cell.to_tree(), array![2u8, 3u8]);
}
