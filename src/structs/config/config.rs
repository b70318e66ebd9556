use serde::{Deserialize, Serialize};
use crate::structs::config::communications::Communications;
use crate::structs::config::resource::Resource;
use crate::structs::config::settings::Settings;

/// Union of the two configuration documents.
///
/// The resource watch document fills `resources` and `recommendations`, the
/// communication document fills `communications` and `settings`. A field set
/// by one document and absent from the other keeps its value; when both set
/// the same field the communication document wins.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub resources: Vec<Resource>,

    #[serde(default)]
    pub recommendations: bool,

    #[serde(default)]
    pub communications: Communications,

    #[serde(default)]
    pub settings: Settings,
}
