use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// A normalized identifier for looking up data by name.
///
/// Only lowercase ASCII letters and digits are kept, so "Mr. Mime", "mr-mime", and "MrMime" all
/// refer to the same resource.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Id(String);

impl Id {
    /// The normalized identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn normalize(value: &str) -> String {
        value
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(Self::normalize(value))
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Id> for String {
    fn from(value: Id) -> Self {
        value.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
