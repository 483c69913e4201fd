//! Fuzzer for the public table API.
//!
//! Runs arbitrary operation sequences against a `FixedHashTable` and a
//! `HashMap` with the same capacity rule, and checks they always agree.

#![no_main]
use arbitrary::Arbitrary;
use chaintable::FixedHashTable;
use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;

type Val = u32;

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Set(String, Val),
    Get(String),
    Delete(String),
    Load,
}

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u8,
    ops: Vec<Op>,
}

#[derive(Debug)]
struct SimulatedTable {
    capacity: usize,
    map: HashMap<String, Val>,
}

impl SimulatedTable {
    fn set(&mut self, key: String, value: Val) -> bool {
        if self.map.contains_key(&key) || self.map.len() < self.capacity {
            self.map.insert(key, value);
            true
        } else {
            false
        }
    }
}

fuzz_target!(|input: Input| {
    let capacity = usize::from(input.capacity);
    let mut table = match FixedHashTable::new(capacity) {
        Ok(table) => table,
        Err(_) => {
            assert_eq!(capacity, 0);
            return;
        }
    };
    let mut sim = SimulatedTable {
        capacity,
        map: HashMap::new(),
    };

    for op in input.ops {
        match op {
            Op::Set(key, value) => {
                assert_eq!(table.set(key.as_str(), value), sim.set(key, value));
            }
            Op::Get(key) => assert_eq!(table.get(&key), sim.map.get(&key)),
            Op::Delete(key) => assert_eq!(table.delete(&key), sim.map.remove(&key)),
            Op::Load => {
                assert_eq!(table.load(), sim.map.len() as f64 / capacity as f64);
                assert!(table.load() <= 1.0);
            }
        }
        assert_eq!(table.len(), sim.map.len());
        assert_eq!(table.bucket_lens().sum::<usize>(), table.len());
        assert!(table.len() <= table.capacity());
    }
});
