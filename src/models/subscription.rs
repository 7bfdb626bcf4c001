use serde::{Deserialize, Serialize};

use super::{default_slice_configurations, AmbrDto, SnssaiConfigurationDto};
use crate::types::AuthMethod;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDto {
    pub user_number: u32,
    pub ue_id: String,
    #[serde(rename = "plmnID")]
    pub plmn_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpsi: Option<String>,
    pub auth: SubscriberAuthDto,
    pub subscribed_ue_ambr: AmbrDto,
    #[serde(rename = "SnssaiConfigurations")]
    pub snssai_configurations: Vec<SnssaiConfigurationDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberAuthDto {
    pub authentication_management_field: String,
    pub authentication_method: AuthMethod,
    pub sequence_number: String,
    pub permanent_key: String,
    pub operator_code_type: OperatorCodeType,
    pub operator_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatorCodeType {
    #[serde(rename = "OP")]
    Op,
    #[serde(rename = "OPc")]
    Opc,
}

impl SubscriptionDto {
    pub fn new_default() -> Self {
        Self {
            user_number: 1,
            ue_id: "imsi-208930000000001".to_string(),
            plmn_id: "20893".to_string(),
            gpsi: Some(String::new()),
            auth: SubscriberAuthDto {
                authentication_management_field: "8000".to_string(),
                authentication_method: AuthMethod::FiveGAka,
                sequence_number: "000000000023".to_string(),
                permanent_key: "8baf473f2f8fd09487cccbd7097c6862".to_string(),
                operator_code_type: OperatorCodeType::Opc,
                operator_code: "8e27b6af0e692e750f32667a3b14605d".to_string(),
            },
            subscribed_ue_ambr: AmbrDto::new("1 Gbps", "2 Gbps"),
            snssai_configurations: default_slice_configurations(Some("")),
        }
    }
}
