use super::KeyValueStore;
use crate::errors::AppResult;
use std::collections::HashMap;

/// Volatile backend, handy for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    values: HashMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-filled with raw values.
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.values.remove(key);
        Ok(())
    }
}
