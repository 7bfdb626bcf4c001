use serde::{Deserialize, Serialize};

use super::DEFAULT_5QI;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowRule {
    pub filter: String,
    pub precedence: u8,
    pub snssai: String,
    pub dnn: String,
    pub qos_ref: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QosFlow {
    pub snssai: String,
    pub dnn: String,
    pub qos_ref: u32,
    #[serde(rename = "5qi", default = "default_5qi")]
    pub five_qi: u8,
    #[serde(rename = "mbrUL", default)]
    pub mbr_ul: String,
    #[serde(rename = "mbrDL", default)]
    pub mbr_dl: String,
    #[serde(rename = "gbrUL", default)]
    pub gbr_ul: String,
    #[serde(rename = "gbrDL", default)]
    pub gbr_dl: String,
}

fn default_5qi() -> u8 {
    DEFAULT_5QI
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingData {
    pub snssai: String,
    pub dnn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qos_ref: Option<u32>,
    pub filter: String,
    pub charging_method: ChargingMethod,
    pub quota: String,
    pub unit_cost: String,
}

impl ChargingData {
    pub fn is_slice_level(&self) -> bool {
        self.dnn.is_empty() && self.filter.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChargingMethod {
    Online,
    #[default]
    Offline,
}
