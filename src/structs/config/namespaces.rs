use serde::{Deserialize, Serialize};

/// Namespaces to include and ignore for a watched resource.
///
/// `include` may carry `all` to watch every namespace; `ignore` only applies
/// in tandem with that wildcard, e.g. include [all], ignore [x, y, z].
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Namespaces {
    #[serde(default)]
    pub include: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<String>,
}
