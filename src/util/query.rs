use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use crate::error::{MovieError, MovieResult};

#[derive(Debug, Default)]
pub struct QueryParams {
    map: HashMap<String, String>,
}

impl<'de> Deserialize<'de> for QueryParams {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = HashMap::<String, String>::deserialize(deserializer)?;
        Ok(QueryParams { map })
    }
}

impl QueryParams {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|v| v.as_str())
    }

    /// Parse a positive integer parameter. Absent or empty means `default`.
    pub fn positive_u32(&self, key: &str, default: u32, message: &str) -> MovieResult<u32> {
        match self.get(key).map(str::trim) {
            None | Some("") => Ok(default),
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n >= 1 => Ok(n),
                _ => Err(MovieError::validation(message)),
            },
        }
    }

    pub fn page(&self) -> MovieResult<u32> {
        self.positive_u32("page", 1, "Page must be a positive number")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        QueryParams {
            map: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_page_defaults_to_one() {
        assert_eq!(params(&[]).page().unwrap(), 1);
        assert_eq!(params(&[("page", "")]).page().unwrap(), 1);
        assert_eq!(params(&[("page", "7")]).page().unwrap(), 7);
    }

    #[test]
    fn test_page_rejects_garbage() {
        for bad in ["abc", "-1", "0", "1.5"] {
            assert!(
                matches!(params(&[("page", bad)]).page(), Err(MovieError::Validation(_))),
                "page={} should be rejected",
                bad
            );
        }
    }
}
