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

use std::sync::Arc;
use std::thread;

use treeform_form::{mapped_form, read_new, Mapped, ToTree};
use treeform_model::Value;

#[derive(Debug, Default, Clone, PartialEq)]
struct Order {
    id: u64,
    items: Vec<String>,
    total: f64,
}

mapped_form! {
    Order {
        "id" => field(id),
        "items" => field(items),
        "total" => field(total),
    }
}

fn order(id: u64) -> Order {
    Order {
        id,
        items: (0..id % 5).map(|i| format!("item-{}", i)).collect(),
        total: id as f64 * 1.25,
    }
}

#[test]
fn concurrent_conversions_share_one_mapper() {
    let handles = (0..8u64)
        .map(|worker| {
            thread::spawn(move || {
                let mapper = Order::mapper() as *const _ as usize;
                for n in 0..100 {
                    let original = order(worker * 1000 + n);
                    let tree = original.to_tree();
                    let restored: Order = read_new(&tree).unwrap();
                    assert_eq!(restored, original);
                }
                mapper
            })
        })
        .collect::<Vec<_>>();

    let addresses = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect::<Vec<_>>();
    let shared = Order::mapper() as *const _ as usize;
    assert!(addresses.iter().all(|address| *address == shared));
}

#[test]
fn trees_can_be_shared_between_threads() {
    let orders = (1..=4).map(order).collect::<Vec<_>>();
    let tree = Arc::new(orders.to_tree());

    let handles = (0..4)
        .map(|_| {
            let tree = Arc::clone(&tree);
            thread::spawn(move || read_new::<Vec<Order>>(&tree).unwrap())
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), orders);
    }
    assert!(matches!(*tree, Value::Array(ref items) if items.len() == 4));
}
