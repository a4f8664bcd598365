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

use std::collections::{BTreeMap, HashMap, VecDeque};

use treeform_model::{array, object, Value};

use crate::{convert, read_new, FromTree, ReadError, ToTree};

#[test]
fn vector_to_array() {
    let values = vec![1i32, 2, 3];
    assert_eq!(convert(&values), array![1, 2, 3]);
    assert_eq!(read_new::<Vec<i32>>(&array![1, 2, 3]), Ok(values));
}

#[test]
fn empty_vector() {
    assert_eq!(Vec::<String>::new().to_tree(), array![]);
    assert_eq!(read_new::<Vec<String>>(&array![]), Ok(vec![]));
}

#[test]
fn vector_contents_are_replaced() {
    let mut values = vec![9u8, 9, 9, 9];
    values.from_tree(&array![1u8, 2u8]).unwrap();
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn vector_not_read_from_other_kinds() {
    let mut values = vec![1i32, 2];
    assert!(values.from_tree(&object!()).is_err());
    assert!(values.from_tree(&Value::Null).is_err());
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn vector_failure_keeps_earlier_elements() {
    let mut values = vec![0i64];
    let result = values.from_tree(&array![1, 2, "three", 4]);
    assert!(result.is_err());
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn nested_vectors() {
    let values = vec![
        vec!["a".to_string()],
        vec![],
        vec!["b".to_string(), "c".to_string()],
    ];
    let tree = values.to_tree();
    assert_eq!(tree, array![array!["a"], array![], array!["b", "c"]]);
    assert_eq!(read_new::<Vec<Vec<String>>>(&tree), Ok(values));
}

#[test]
fn deque() {
    let values = VecDeque::from(vec![true, false]);
    let tree = values.to_tree();
    assert_eq!(tree, array![true, false]);
    assert_eq!(read_new::<VecDeque<bool>>(&tree), Ok(values));
}

#[test]
fn slices_are_written() {
    let values = [1u64, 2, 3];
    assert_eq!(values[..2].to_tree(), array![1u64, 2u64]);
}

#[test]
fn fixed_array() {
    let values = [1.5f64, 2.5, 3.5];
    let tree = values.to_tree();
    assert_eq!(tree, array![1.5, 2.5, 3.5]);

    let mut restored = [0.0f64; 3];
    restored.from_tree(&tree).unwrap();
    assert_eq!(restored, values);
}

#[test]
fn fixed_array_rejects_other_lengths() {
    let mut target = [7i32; 3];

    let result = target.from_tree(&array![1, 2, 3, 4]);
    assert_eq!(
        result,
        Err(ReadError::LengthMismatch {
            expected: 3,
            actual: 4
        })
    );
    assert_eq!(target, [7, 7, 7]);

    let result = target.from_tree(&array![1, 2]);
    assert_eq!(
        result,
        Err(ReadError::LengthMismatch {
            expected: 3,
            actual: 2
        })
    );
    assert_eq!(target, [7, 7, 7]);
}

#[test]
fn empty_fixed_array() {
    let values: [String; 0] = [];
    assert_eq!(values.to_tree(), array![]);
    assert_eq!(read_new::<[String; 0]>(&array![]), Ok(values));
}

#[test]
fn btree_map_to_object() {
    let mut map = BTreeMap::new();
    map.insert("a".to_string(), 1u32);
    map.insert("b".to_string(), 2u32);

    let tree = map.to_tree();
    assert_eq!(tree, object! { "a" => 1u32, "b" => 2u32 });
    assert_eq!(read_new::<BTreeMap<String, u32>>(&tree), Ok(map));
}

#[test]
fn hash_map_to_object() {
    let mut map = HashMap::new();
    map.insert("first".to_string(), vec![1i32]);
    map.insert("second".to_string(), vec![]);

    let tree = map.to_tree();
    assert_eq!(tree, object! { "first" => array![1], "second" => array![] });

    let mut restored: HashMap<String, Vec<i32>> = HashMap::new();
    restored.insert("stale".to_string(), vec![0]);
    restored.from_tree(&tree).unwrap();
    assert_eq!(restored, map);
}

#[test]
fn map_requires_object() {
    assert!(read_new::<BTreeMap<String, i32>>(&array![1]).is_err());
}
