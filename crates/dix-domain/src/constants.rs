//! Domain layer constants
//!
//! Keys and markers of the hint mini-language. Infrastructure-specific
//! constants (config file names, pool sizes) live in
//! `dix_infrastructure::constants`.

// ============================================================================
// NAMESPACE CONSTANTS
// ============================================================================

/// Namespace used when a binding, provider or hint names none
pub const DEFAULT_NAMESPACE: &str = "def";

// ============================================================================
// HINT MINI-LANGUAGE
// ============================================================================

/// Separates `key:value` assignments
pub const HINT_ASSIGNMENT_SEPARATOR: char = ';';

/// Separates a key from its value
pub const HINT_KEY_SEPARATOR: char = ':';

/// Selects the namespace to resolve in
pub const HINT_KEY_NAMESPACE: &str = "namespace";

/// Selects the provider symbol (or the synthesize marker)
pub const HINT_KEY_SYMBOL: &str = "from";

/// Channel buffer size for synthesized channels
pub const HINT_KEY_CHAN_BUF: &str = "chan_buf";

/// Pre-sizing for synthesized maps
pub const HINT_KEY_MAP_SIZE: &str = "map_size";

/// Length of synthesized sequences
pub const HINT_KEY_SLICE_LEN: &str = "slice_len";

/// Capacity of synthesized sequences
pub const HINT_KEY_SLICE_CAP: &str = "slice_cap";

/// Symbol meaning "no named provider, synthesize structurally"
pub const SYMBOL_SYNTHESIZE: &str = "?";

/// Largest accepted `chan_buf`, `map_size`, `slice_len` or `slice_cap`
///
/// Larger values are clamped to it.
pub const HINT_SIZE_LIMIT: usize = 1 << 20;

/// Number of custom slots a fresh hint reserves
pub const HINT_CUSTOM_CAPACITY: usize = 10;
