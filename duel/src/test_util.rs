use std::{
    any::Any,
    fmt::Debug,
};

use duel_prng::PseudoRandomNumberGenerator;
use serde::{
    Serialize,
    de::DeserializeOwned,
};

/// A generator that cycles through a fixed list of values.
pub struct FixedRandomNumberGenerator {
    values: Vec<u64>,
    count: usize,
}

impl FixedRandomNumberGenerator {
    pub fn new(values: &[u64]) -> Self {
        assert!(!values.is_empty());
        Self {
            values: values.to_vec(),
            count: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl PseudoRandomNumberGenerator for FixedRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        0
    }

    fn next(&mut self) -> u64 {
        let value = self.values[self.count % self.values.len()];
        self.count += 1;
        value
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Asserts that the value serializes to the expected JSON string.
#[track_caller]
pub fn test_string_serialization<T>(value: T, expected: &str)
where
    T: Serialize,
{
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        format!("\"{expected}\"")
    );
}

/// Asserts that the string deserializes to the expected value.
#[track_caller]
pub fn test_string_deserialization<T>(value: &str, expected: T)
where
    T: DeserializeOwned + PartialEq + Debug,
{
    assert_eq!(
        serde_json::from_str::<T>(&format!("\"{value}\"")).unwrap(),
        expected
    );
}
