//! Hint key names
//!
//! The keys of the hint mini-language can be renamed per container, for
//! instance to avoid clashing with custom keys a provider already reads.
//! Renamed keys only affect parsing; a parsed [`Hint`](super::Hint) always
//! renders with the standard names.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::constants::{
    HINT_ASSIGNMENT_SEPARATOR, HINT_KEY_CHAN_BUF, HINT_KEY_MAP_SIZE, HINT_KEY_NAMESPACE,
    HINT_KEY_SEPARATOR, HINT_KEY_SLICE_CAP, HINT_KEY_SLICE_LEN, HINT_KEY_SYMBOL,
    SYMBOL_SYNTHESIZE,
};
use crate::error::{Error, Result};

/// Names of the recognized hint keys and of the synthesize marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintKeys {
    /// Key selecting the provider symbol
    pub symbol: Cow<'static, str>,
    /// Key selecting the namespace
    pub namespace: Cow<'static, str>,
    /// Key for the channel buffer size
    pub chan_buf: Cow<'static, str>,
    /// Key for map pre-sizing
    pub map_size: Cow<'static, str>,
    /// Key for sequence length
    pub slice_len: Cow<'static, str>,
    /// Key for sequence capacity
    pub slice_cap: Cow<'static, str>,
    /// Symbol value asking for structural synthesis
    pub synthesize: Cow<'static, str>,
}

impl HintKeys {
    /// `from`, `namespace`, `chan_buf`, `map_size`, `slice_len`, `slice_cap` and `?`
    pub const STANDARD: Self = Self {
        symbol: Cow::Borrowed(HINT_KEY_SYMBOL),
        namespace: Cow::Borrowed(HINT_KEY_NAMESPACE),
        chan_buf: Cow::Borrowed(HINT_KEY_CHAN_BUF),
        map_size: Cow::Borrowed(HINT_KEY_MAP_SIZE),
        slice_len: Cow::Borrowed(HINT_KEY_SLICE_LEN),
        slice_cap: Cow::Borrowed(HINT_KEY_SLICE_CAP),
        synthesize: Cow::Borrowed(SYMBOL_SYNTHESIZE),
    };

    /// Check that every name is non-empty, free of separators, and that
    /// the keys are pairwise distinct
    pub fn validate(&self) -> Result<()> {
        let keys = [
            ("symbol", &self.symbol),
            ("namespace", &self.namespace),
            ("chan_buf", &self.chan_buf),
            ("map_size", &self.map_size),
            ("slice_len", &self.slice_len),
            ("slice_cap", &self.slice_cap),
        ];
        for (label, name) in keys.iter().chain([("synthesize", &self.synthesize)].iter()) {
            if name.is_empty() {
                return Err(Error::configuration(format!("Hint key `{label}` cannot be empty")));
            }
            if name.contains([HINT_ASSIGNMENT_SEPARATOR, HINT_KEY_SEPARATOR]) {
                return Err(Error::configuration(format!(
                    "Hint key `{label}` cannot contain `{HINT_ASSIGNMENT_SEPARATOR}` or `{HINT_KEY_SEPARATOR}`: {name}"
                )));
            }
        }
        for (i, (label, name)) in keys.iter().enumerate() {
            if let Some((other, _)) = keys[i + 1..].iter().find(|(_, n)| n == name) {
                return Err(Error::configuration(format!(
                    "Hint keys `{label}` and `{other}` share the name `{name}`"
                )));
            }
        }
        Ok(())
    }
}

impl Default for HintKeys {
    fn default() -> Self {
        Self::STANDARD
    }
}
