//! Hint descriptor
//!
//! A `Hint` is the parsed per-field resolution policy. It is written in a
//! compact `key:value;key:value` mini-language next to the field it governs:
//!
//! | Key | Meaning |
//! |-----|---------|
//! | `from` | provider symbol, `?` synthesizes structurally |
//! | `namespace` | namespace to look bindings and providers up in |
//! | `chan_buf` | buffer size of a synthesized channel |
//! | `map_size` | pre-sizing of a synthesized map |
//! | `slice_len` / `slice_cap` | length and capacity of a synthesized sequence |
//!
//! Sizes above [`HINT_SIZE_LIMIT`] are clamped to it, so a hint can never ask
//! for an allocation the process cannot make.
//!
//! Any other key is kept verbatim and can be read by providers through
//! [`Hint::custom`]. The recognized key names can be replaced with
//! [`Hint::unmarshal_with`] and a [`HintKeys`] table.
//!
//! ## Example
//!
//! ```
//! use dix_domain::Hint;
//!
//! let hint = Hint::parse("from:?;namespace:int100;slice_len:2;label:primary");
//! assert!(hint.is_synthesize());
//! assert_eq!(hint.namespace(), "int100");
//! assert_eq!(hint.slice_len(), 2);
//! assert_eq!(hint.custom("label"), Some("primary"));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::hint_keys::HintKeys;
use crate::constants::{
    HINT_ASSIGNMENT_SEPARATOR, HINT_CUSTOM_CAPACITY, HINT_KEY_CHAN_BUF, HINT_KEY_MAP_SIZE,
    HINT_KEY_NAMESPACE, HINT_KEY_SEPARATOR, HINT_KEY_SLICE_CAP, HINT_KEY_SLICE_LEN,
    HINT_KEY_SYMBOL, HINT_SIZE_LIMIT, SYMBOL_SYNTHESIZE,
};

/// Parsed resolution policy for one resolution step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// Namespace to resolve in, empty means the container default
    namespace: String,
    /// Provider symbol, `?` means structural synthesis
    symbol: String,
    /// Channel buffer size
    chan_buf: usize,
    /// Map pre-sizing
    map_size: usize,
    /// Sequence length
    slice_len: usize,
    /// Sequence capacity
    slice_cap: usize,
    /// Unrecognized keys
    custom: HashMap<String, String>,
}

impl Default for Hint {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            symbol: String::new(),
            chan_buf: 0,
            map_size: 0,
            slice_len: 0,
            slice_cap: 0,
            custom: HashMap::new(),
        }
    }
}

impl Hint {
    /// Create an empty hint with room for a few custom keys
    pub fn new() -> Self {
        Self {
            custom: HashMap::with_capacity(HINT_CUSTOM_CAPACITY),
            ..Self::default()
        }
    }

    /// Create a hint asking for structural synthesis
    pub fn synthesize() -> Self {
        let mut hint = Self::new();
        hint.set_symbol(SYMBOL_SYNTHESIZE);
        hint
    }

    /// Parse a hint from its mini-language form
    pub fn parse(descriptor: &str) -> Self {
        let mut hint = Self::new();
        hint.unmarshal(descriptor);
        hint
    }

    /// Apply the assignments of `descriptor` on top of this hint
    ///
    /// Integer values that fail to parse become 0, values above
    /// [`HINT_SIZE_LIMIT`] are clamped. Segments without a key
    /// separator, or with an empty key, are skipped.
    pub fn unmarshal(&mut self, descriptor: &str) -> &mut Self {
        self.unmarshal_with(&HintKeys::STANDARD, descriptor)
    }

    /// Like [`Hint::unmarshal`], recognizing the key names in `keys`
    ///
    /// A symbol equal to `keys.synthesize` is stored as the standard `?`
    /// marker, so [`Hint::is_synthesize`] holds whatever the marker is
    /// called.
    pub fn unmarshal_with(&mut self, keys: &HintKeys, descriptor: &str) -> &mut Self {
        for segment in descriptor.split(HINT_ASSIGNMENT_SEPARATOR) {
            if let Some((key, value)) = segment.split_once(HINT_KEY_SEPARATOR) {
                if !key.is_empty() {
                    self.set(keys, key, value);
                }
            }
        }
        self
    }

    /// Clear every field so the hint can be reused
    pub fn reset(&mut self) -> &mut Self {
        self.namespace.clear();
        self.symbol.clear();
        self.chan_buf = 0;
        self.map_size = 0;
        self.slice_len = 0;
        self.slice_cap = 0;
        self.custom.clear();
        self
    }

    fn set(&mut self, keys: &HintKeys, key: &str, value: &str) {
        if keys.namespace == key {
            self.set_namespace(value);
        } else if keys.symbol == key {
            if keys.synthesize == value {
                self.set_symbol(SYMBOL_SYNTHESIZE);
            } else {
                self.set_symbol(value);
            }
        } else if keys.chan_buf == key {
            self.chan_buf = parse_size(value);
        } else if keys.map_size == key {
            self.map_size = parse_size(value);
        } else if keys.slice_len == key {
            self.slice_len = parse_size(value);
        } else if keys.slice_cap == key {
            self.slice_cap = parse_size(value);
        } else {
            self.custom.insert(key.to_string(), value.to_string());
        }
    }

    /// Replace the namespace in place
    pub fn set_namespace(&mut self, value: &str) -> &mut Self {
        self.namespace.clear();
        self.namespace.push_str(value);
        self
    }

    /// Replace the provider symbol in place
    pub fn set_symbol(&mut self, value: &str) -> &mut Self {
        self.symbol.clear();
        self.symbol.push_str(value);
        self
    }

    /// Set the namespace
    pub fn with_namespace(mut self, namespace: impl AsRef<str>) -> Self {
        self.set_namespace(namespace.as_ref());
        self
    }

    /// Set the provider symbol
    pub fn with_symbol(mut self, symbol: impl AsRef<str>) -> Self {
        self.set_symbol(symbol.as_ref());
        self
    }

    /// Set the channel buffer size
    pub fn with_chan_buf(mut self, chan_buf: usize) -> Self {
        self.chan_buf = chan_buf.min(HINT_SIZE_LIMIT);
        self
    }

    /// Set the map pre-sizing
    pub fn with_map_size(mut self, map_size: usize) -> Self {
        self.map_size = map_size.min(HINT_SIZE_LIMIT);
        self
    }

    /// Set the sequence length
    pub fn with_slice_len(mut self, slice_len: usize) -> Self {
        self.slice_len = slice_len.min(HINT_SIZE_LIMIT);
        self
    }

    /// Set the sequence capacity
    pub fn with_slice_cap(mut self, slice_cap: usize) -> Self {
        self.slice_cap = slice_cap.min(HINT_SIZE_LIMIT);
        self
    }

    /// Add a custom key/value pair
    pub fn with_custom(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }

    /// Namespace, empty when none was given
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Provider symbol, empty when none was given
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Whether the hint asks for structural synthesis (`from:?`)
    pub fn is_synthesize(&self) -> bool {
        self.symbol == SYMBOL_SYNTHESIZE
    }

    pub fn chan_buf(&self) -> usize {
        self.chan_buf
    }

    pub fn map_size(&self) -> usize {
        self.map_size
    }

    pub fn slice_len(&self) -> usize {
        self.slice_len
    }

    pub fn slice_cap(&self) -> usize {
        self.slice_cap
    }

    /// Look up an unrecognized key
    pub fn custom(&self, key: &str) -> Option<&str> {
        self.custom.get(key).map(String::as_str)
    }

    /// All unrecognized keys
    pub fn custom_entries(&self) -> &HashMap<String, String> {
        &self.custom
    }

    /// Namespace to resolve in, falling back to `default` when none was given
    pub fn namespace_or<'a>(&'a self, default: &'a str) -> &'a str {
        if self.namespace.is_empty() {
            default
        } else {
            &self.namespace
        }
    }
}

impl fmt::Display for Hint {
    /// Render back to the mini-language, custom keys in sorted order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if !self.symbol.is_empty() {
            parts.push(format!("{HINT_KEY_SYMBOL}{HINT_KEY_SEPARATOR}{}", self.symbol));
        }
        if !self.namespace.is_empty() {
            parts.push(format!(
                "{HINT_KEY_NAMESPACE}{HINT_KEY_SEPARATOR}{}",
                self.namespace
            ));
        }
        for (key, value) in [
            (HINT_KEY_CHAN_BUF, self.chan_buf),
            (HINT_KEY_MAP_SIZE, self.map_size),
            (HINT_KEY_SLICE_LEN, self.slice_len),
            (HINT_KEY_SLICE_CAP, self.slice_cap),
        ] {
            if value > 0 {
                parts.push(format!("{key}{HINT_KEY_SEPARATOR}{value}"));
            }
        }
        let custom: BTreeMap<_, _> = self.custom.iter().collect();
        for (key, value) in custom {
            parts.push(format!("{key}{HINT_KEY_SEPARATOR}{value}"));
        }
        write!(f, "{}", parts.join(&HINT_ASSIGNMENT_SEPARATOR.to_string()))
    }
}

fn parse_size(value: &str) -> usize {
    match value.parse::<usize>() {
        Ok(size) => size.min(HINT_SIZE_LIMIT),
        // Out of range rather than malformed
        Err(_) if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => {
            HINT_SIZE_LIMIT
        }
        Err(_) => 0,
    }
}
