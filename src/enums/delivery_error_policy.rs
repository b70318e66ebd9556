use serde::{Deserialize, Serialize};

/// What a channel does with a failed delivery attempt.
///
/// `Log` reproduces the historical behavior: the failure is logged and the
/// caller observes success. `Propagate` surfaces the failure to the caller.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, PartialEq)]
pub enum DeliveryErrorPolicy {
    #[serde(rename = "log")]
    Log,
    #[serde(rename = "propagate")]
    Propagate,
}

impl Default for DeliveryErrorPolicy {
    fn default() -> Self {
        DeliveryErrorPolicy::Log
    }
}
