//! Randomized checks of the hash table against a `HashMap` oracle.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rs_speaker_core::{HashTable, HashTableConfig, TableError};

fn random_key(rng: &mut StdRng) -> String {
	let len = rng.random_range(0..4);
	(0..len).map(|_| rng.random_range('a'..='f')).collect()
}

#[test]
fn test_random_operations_match_oracle() {
	let mut rng = StdRng::seed_from_u64(42);
	let config = HashTableConfig { capacity: 3, ..Default::default() };
	let mut table = HashTable::new(config).unwrap();
	let mut oracle: HashMap<String, i64> = HashMap::new();

	for _ in 0..5_000 {
		let key = random_key(&mut rng);
		match rng.random_range(0..3) {
			0 | 1 => {
				let value = rng.random_range(-100..100);
				table.set(&key, value);
				oracle.insert(key.clone(), value);
				assert_eq!(table.get(&key), value);
			}
			_ => {
				let before = table.size();
				match oracle.remove(&key) {
					Some(value) => {
						assert_eq!(table.delete(&key), Ok(value));
						assert_eq!(table.size(), before - 1);
						assert_eq!(table.get(&key), 0);
					}
					None => {
						assert_eq!(table.delete(&key), Err(TableError::KeyNotFound(key.clone())));
						assert_eq!(table.size(), before);
					}
				}
			}
		}
		assert_eq!(table.size(), oracle.len());
	}

	for (key, value) in &oracle {
		assert_eq!(table.get(key), *value);
	}
}

#[test]
fn test_load_factor_holds_after_distinct_inserts() {
	for growth_factor in [1.5, 2.0, 3.0] {
		let config = HashTableConfig { capacity: 5, load_factor: 0.75, growth_factor, ..Default::default() };
		let mut table = HashTable::new(config).unwrap();
		for i in 0..2_000 {
			table.set(&format!("k{i}"), i);
			assert!(table.size() as f64 / table.capacity() as f64 <= 0.75);
		}
		assert_eq!(table.size(), 2_000);
	}
}

#[test]
fn test_growth_preserves_entries() {
	let mut table = HashTable::new(HashTableConfig::default()).unwrap();
	let mut capacity = table.capacity();
	let mut grown = 0;

	for i in 0..1_000i64 {
		table.set(&format!("entry-{i}"), i * 3);
		if table.capacity() != capacity {
			capacity = table.capacity();
			grown += 1;
			for j in 0..=i {
				assert_eq!(table.get(&format!("entry-{j}")), j * 3);
			}
		}
	}
	assert!(grown >= 5);
}

#[test]
fn test_unset_keys_return_default() {
	let mut rng = StdRng::seed_from_u64(7);
	let config = HashTableConfig { default_value: 9, ..Default::default() };
	let mut table = HashTable::new(config).unwrap();
	for i in 0..100 {
		table.set(&format!("set-{i}"), i);
	}
	for _ in 0..100 {
		let key = format!("unset-{}", rng.random_range(0..1_000));
		assert_eq!(table.get(&key), 9);
	}
}
