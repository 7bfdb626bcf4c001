pub mod profile;
pub mod subscription;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{ChargingMethod, UpConfidentiality, UpIntegrity, DEFAULT_5QI};

pub use profile::*;
pub use subscription::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbrDto {
    pub uplink: String,
    pub downlink: String,
}

impl AmbrDto {
    pub fn new(uplink: impl Into<String>, downlink: impl Into<String>) -> Self {
        Self {
            uplink: uplink.into(),
            downlink: downlink.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingDataDto {
    pub charging_method: ChargingMethod,
    pub quota: String,
    pub unit_cost: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowRuleDto {
    pub filter: String,
    pub precedence: u8,
    #[serde(rename = "5qi")]
    pub five_qi: u8,
    #[serde(rename = "gbrUL")]
    pub gbr_ul: String,
    #[serde(rename = "gbrDL")]
    pub gbr_dl: String,
    #[serde(rename = "mbrUL")]
    pub mbr_ul: String,
    #[serde(rename = "mbrDL")]
    pub mbr_dl: String,
    pub charging_data: ChargingDataDto,
}

impl FlowRuleDto {
    pub fn new_default() -> Self {
        Self {
            filter: "1.1.1.1/32".to_string(),
            precedence: 128,
            five_qi: DEFAULT_5QI,
            gbr_ul: "208 Mbps".to_string(),
            gbr_dl: "208 Mbps".to_string(),
            mbr_ul: "108 Mbps".to_string(),
            mbr_dl: "108 Mbps".to_string(),
            charging_data: ChargingDataDto {
                charging_method: ChargingMethod::Online,
                quota: "10000".to_string(),
                unit_cost: "1".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpSecurityDto {
    pub up_integr: UpIntegrity,
    pub up_confid: UpConfidentiality,
}

impl UpSecurityDto {
    pub fn new_default() -> Self {
        Self {
            up_integr: UpIntegrity::NotNeeded,
            up_confid: UpConfidentiality::NotNeeded,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnnConfigurationDto {
    #[serde(rename = "default5qi")]
    pub default_5qi: u8,
    pub session_ambr: AmbrDto,
    pub enable_static_ipv4_address: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_ipv4_address: Option<String>,
    pub flow_rules: Vec<FlowRuleDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_security: Option<UpSecurityDto>,
}

impl DnnConfigurationDto {
    pub fn new_default() -> Self {
        Self {
            default_5qi: DEFAULT_5QI,
            session_ambr: AmbrDto::new("1000 Mbps", "1000 Mbps"),
            enable_static_ipv4_address: false,
            static_ipv4_address: Some(String::new()),
            flow_rules: vec![FlowRuleDto::new_default()],
            up_security: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnssaiConfigurationDto {
    pub sst: u8,
    pub sd: String,
    pub is_default: bool,
    pub charging_data: ChargingDataDto,
    pub dnn_configurations: IndexMap<String, DnnConfigurationDto>,
}

impl SnssaiConfigurationDto {
    pub fn new_default() -> Self {
        Self {
            sst: 1,
            sd: String::new(),
            is_default: false,
            charging_data: ChargingDataDto {
                charging_method: ChargingMethod::Offline,
                quota: "100000".to_string(),
                unit_cost: "1".to_string(),
            },
            dnn_configurations: IndexMap::from([(
                "internet".to_string(),
                DnnConfigurationDto::new_default(),
            )]),
        }
    }

    pub fn snssai_key(&self) -> String {
        crate::types::snssai_key(self.sst, &self.sd)
    }
}

pub(crate) fn default_slice_configurations(
    static_ipv4_address: Option<&str>,
) -> Vec<SnssaiConfigurationDto> {
    vec![
        SnssaiConfigurationDto {
            sst: 1,
            sd: "010203".to_string(),
            is_default: true,
            charging_data: ChargingDataDto {
                charging_method: ChargingMethod::Offline,
                quota: "100000".to_string(),
                unit_cost: "1".to_string(),
            },
            dnn_configurations: IndexMap::from([(
                "internet".to_string(),
                DnnConfigurationDto {
                    default_5qi: 9,
                    session_ambr: AmbrDto::new("1000 Mbps", "1000 Mbps"),
                    enable_static_ipv4_address: false,
                    static_ipv4_address: static_ipv4_address.map(str::to_string),
                    flow_rules: vec![FlowRuleDto {
                        filter: "1.1.1.1/32".to_string(),
                        precedence: 128,
                        five_qi: 8,
                        gbr_ul: "108 Mbps".to_string(),
                        gbr_dl: "108 Mbps".to_string(),
                        mbr_ul: "208 Mbps".to_string(),
                        mbr_dl: "208 Mbps".to_string(),
                        charging_data: ChargingDataDto {
                            charging_method: ChargingMethod::Offline,
                            quota: "100000".to_string(),
                            unit_cost: "1".to_string(),
                        },
                    }],
                    up_security: None,
                },
            )]),
        },
        SnssaiConfigurationDto {
            sst: 1,
            sd: "112233".to_string(),
            is_default: false,
            charging_data: ChargingDataDto {
                charging_method: ChargingMethod::Online,
                quota: "100000".to_string(),
                unit_cost: "1".to_string(),
            },
            dnn_configurations: IndexMap::from([(
                "internet".to_string(),
                DnnConfigurationDto {
                    default_5qi: 8,
                    session_ambr: AmbrDto::new("1000 Mbps", "1000 Mbps"),
                    enable_static_ipv4_address: false,
                    static_ipv4_address: static_ipv4_address.map(str::to_string),
                    flow_rules: vec![FlowRuleDto {
                        filter: "1.1.1.1/32".to_string(),
                        precedence: 127,
                        five_qi: 7,
                        gbr_ul: "207 Mbps".to_string(),
                        gbr_dl: "207 Mbps".to_string(),
                        mbr_ul: "407 Mbps".to_string(),
                        mbr_dl: "407 Mbps".to_string(),
                        charging_data: ChargingDataDto {
                            charging_method: ChargingMethod::Online,
                            quota: "5000".to_string(),
                            unit_cost: "1".to_string(),
                        },
                    }],
                    up_security: None,
                },
            )]),
        },
    ]
}
