//! Shared primitives for the genz workspace crates.
//!
//! ```rust
//! use gzcommon::{GenerationOptions, Registry};
//!
//! let options = GenerationOptions::default().with_temperature(0.7).with_max_tokens(4096);
//! let mut registry = Registry::new();
//! registry.insert("groq", options);
//!
//! assert_eq!(registry.get(&"groq").and_then(|o| o.max_tokens), Some(4096));
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use gzcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod model {
    //! Per-provider generation settings applied to outbound requests.
    //!
    //! ```rust
    //! use gzcommon::GenerationOptions;
    //!
    //! let options = GenerationOptions::default()
    //!     .with_temperature(0.7)
    //!     .with_max_tokens(2048);
    //!
    //! assert_eq!(options.temperature, Some(0.7));
    //! assert_eq!(options.max_tokens, Some(2048));
    //! ```

    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct GenerationOptions {
        pub temperature: Option<f32>,
        pub max_tokens: Option<u32>,
    }

    impl GenerationOptions {
        pub fn new(max_tokens: u32, temperature: f32) -> Self {
            Self {
                temperature: Some(temperature),
                max_tokens: Some(max_tokens),
            }
        }

        pub fn with_temperature(mut self, temperature: f32) -> Self {
            self.temperature = Some(temperature);
            self
        }

        pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
            self.max_tokens = Some(max_tokens);
            self
        }
    }
}

pub mod registry {
    //! Small insertion-ordered lookup table for closed key sets.
    //!
    //! ```rust
    //! use gzcommon::Registry;
    //!
    //! let mut registry = Registry::new();
    //! registry.insert("groq", 30_u64);
    //! registry.insert("huggingface", 60_u64);
    //!
    //! assert_eq!(registry.get(&"huggingface"), Some(&60));
    //! assert_eq!(registry.keys().collect::<Vec<_>>(), vec![&"groq", &"huggingface"]);
    //! ```

    #[derive(Debug, Clone)]
    pub struct Registry<K, V> {
        entries: Vec<(K, V)>,
    }

    impl<K, V> Default for Registry<K, V> {
        fn default() -> Self {
            Self {
                entries: Vec::new(),
            }
        }
    }

    impl<K, V> Registry<K, V>
    where
        K: PartialEq,
    {
        pub fn new() -> Self {
            Self::default()
        }

        /// Replaces an existing entry in place, keeping its original position.
        pub fn insert(&mut self, key: K, value: V) -> Option<V> {
            match self.position(&key) {
                Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
                None => {
                    self.entries.push((key, value));
                    None
                }
            }
        }

        pub fn get(&self, key: &K) -> Option<&V> {
            self.position(key).map(|index| &self.entries[index].1)
        }

        pub fn remove(&mut self, key: &K) -> Option<V> {
            self.position(key)
                .map(|index| self.entries.remove(index).1)
        }

        pub fn contains_key(&self, key: &K) -> bool {
            self.position(key).is_some()
        }

        pub fn keys(&self) -> impl Iterator<Item = &K> {
            self.entries.iter().map(|(key, _)| key)
        }

        pub fn len(&self) -> usize {
            self.entries.len()
        }

        pub fn is_empty(&self) -> bool {
            self.entries.is_empty()
        }

        fn position(&self, key: &K) -> Option<usize> {
            self.entries.iter().position(|(candidate, _)| candidate == key)
        }
    }
}

pub use future::BoxFuture;
pub use model::GenerationOptions;
pub use registry::Registry;
