use serde::{Deserialize, Serialize};

/// AWS request signing for managed ElasticSearch clusters.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AwsSigning {
    #[serde(default)]
    pub enabled: bool,

    #[serde(rename = "awsRegion", default)]
    pub aws_region: String,
}
