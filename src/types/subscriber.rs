use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::flows::{ChargingData, FlowRule, QosFlow};
use super::Snssai;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub profile_name: String,
    #[serde(rename = "AccessAndMobilitySubscriptionData")]
    pub access_and_mobility: AccessAndMobilitySubscriptionData,
    #[serde(rename = "SessionManagementSubscriptionData")]
    pub session_management: Vec<SessionManagementSubscriptionData>,
    #[serde(rename = "SmfSelectionSubscriptionData")]
    pub smf_selection: SmfSelectionSubscriptionData,
    #[serde(rename = "AmPolicyData")]
    pub am_policy: AmPolicyData,
    #[serde(rename = "SmPolicyData")]
    pub sm_policy: SmPolicyData,
    #[serde(rename = "FlowRules")]
    pub flow_rules: Vec<FlowRule>,
    #[serde(rename = "QosFlows")]
    pub qos_flows: Vec<QosFlow>,
    #[serde(rename = "ChargingDatas")]
    pub charging_datas: Vec<ChargingData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub user_number: u32,
    pub ue_id: String,
    #[serde(rename = "plmnID")]
    pub plmn_id: String,
    #[serde(rename = "AuthenticationSubscription")]
    pub authentication: AuthenticationSubscription,
    #[serde(rename = "AccessAndMobilitySubscriptionData")]
    pub access_and_mobility: AccessAndMobilitySubscriptionData,
    #[serde(rename = "SessionManagementSubscriptionData")]
    pub session_management: Vec<SessionManagementSubscriptionData>,
    #[serde(rename = "SmfSelectionSubscriptionData")]
    pub smf_selection: SmfSelectionSubscriptionData,
    #[serde(rename = "AmPolicyData")]
    pub am_policy: AmPolicyData,
    #[serde(rename = "SmPolicyData")]
    pub sm_policy: SmPolicyData,
    #[serde(rename = "FlowRules")]
    pub flow_rules: Vec<FlowRule>,
    #[serde(rename = "QosFlows")]
    pub qos_flows: Vec<QosFlow>,
    #[serde(rename = "ChargingDatas")]
    pub charging_datas: Vec<ChargingData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessAndMobilitySubscriptionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpsis: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed_ue_ambr: Option<Ambr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nssai: Option<Nssai>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nssai {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_single_nssais: Option<Vec<Snssai>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_nssais: Option<Vec<Snssai>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ambr {
    pub uplink: String,
    pub downlink: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionManagementSubscriptionData {
    pub single_nssai: Snssai,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnn_configurations: Option<IndexMap<String, DnnConfiguration>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnnConfiguration {
    pub pdu_session_types: PduSessionTypes,
    pub ssc_modes: SscModes,
    #[serde(rename = "5gQosProfile", skip_serializing_if = "Option::is_none")]
    pub qos_profile_5g: Option<SubscribedDefaultQos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_ambr: Option<Ambr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_ip_address: Option<Vec<IpAddress>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_security: Option<UpSecurity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PduSessionTypes {
    pub default_session_type: PduSessionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_session_types: Option<Vec<PduSessionType>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PduSessionType {
    Ipv4,
    Ipv6,
    Ipv4v6,
    Unstructured,
    Ethernet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SscModes {
    pub default_ssc_mode: SscMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_ssc_modes: Option<Vec<SscMode>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SscMode {
    SscMode1,
    SscMode2,
    SscMode3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribedDefaultQos {
    #[serde(rename = "5qi")]
    pub five_qi: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arp: Option<Arp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_level: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arp {
    pub priority_level: u8,
    pub preempt_cap: String,
    pub preempt_vuln: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_prefix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpSecurity {
    pub up_integr: UpIntegrity,
    pub up_confid: UpConfidentiality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpIntegrity {
    Required,
    Preferred,
    NotNeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpConfidentiality {
    Required,
    Preferred,
    NotNeeded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmfSelectionSubscriptionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed_snssai_infos: Option<IndexMap<String, SnssaiInfo>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnssaiInfo {
    pub dnn_infos: Vec<DnnInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnnInfo {
    pub dnn: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmPolicyData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsc_cats: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmPolicyData {
    pub sm_policy_snssai_data: IndexMap<String, SmPolicySnssaiData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmPolicySnssaiData {
    pub snssai: Snssai,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm_policy_dnn_data: Option<IndexMap<String, SmPolicyDnnData>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmPolicyDnnData {
    pub dnn: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationSubscription {
    pub authentication_method: AuthMethod,
    pub permanent_key: PermanentKey,
    pub sequence_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_management_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milenage: Option<Milenage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opc: Option<Opc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthMethod {
    #[serde(rename = "5G_AKA")]
    FiveGAka,
    #[serde(rename = "EAP_AKA_PRIME")]
    EapAkaPrime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermanentKey {
    pub permanent_key_value: String,
    pub encryption_key: u32,
    pub encryption_algorithm: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milenage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub op: Option<Op>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Op {
    pub op_value: String,
    pub encryption_key: u32,
    pub encryption_algorithm: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opc {
    pub opc_value: String,
    pub encryption_key: u32,
    pub encryption_algorithm: u32,
}

#[cfg(test)]
mod tests {
    use crate::models::{ProfileDto, SubscriptionDto};
    use crate::services::{profile, subscription};
    use crate::types::{Profile, Subscription};

    #[test]
    fn test_profile_wire_keys() {
        let record = profile::map_from_dto(&ProfileDto::new_default());
        let value = serde_json::to_value(&record).unwrap();

        for key in [
            "profileName",
            "AccessAndMobilitySubscriptionData",
            "SessionManagementSubscriptionData",
            "SmfSelectionSubscriptionData",
            "AmPolicyData",
            "SmPolicyData",
            "FlowRules",
            "QosFlows",
            "ChargingDatas",
        ] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }

        let dnn = &value["SessionManagementSubscriptionData"][0]["dnnConfigurations"]["internet"];
        assert_eq!(dnn["5gQosProfile"]["5qi"], 9);
        assert_eq!(dnn["pduSessionTypes"]["defaultSessionType"], "IPV4");
        assert_eq!(dnn["sscModes"]["allowedSscModes"][0], "SSC_MODE_2");
        assert_eq!(dnn["sessionAmbr"]["uplink"], "1000 Mbps");

        assert_eq!(value["FlowRules"][0]["qosRef"], 1);
        assert_eq!(value["QosFlows"][0]["mbrUL"], "208 Mbps");
        assert_eq!(value["QosFlows"][0]["5qi"], 8);
        assert_eq!(value["ChargingDatas"][0]["chargingMethod"], "Offline");
        // slice-level charging entries carry no qosRef on the wire
        assert!(value["ChargingDatas"][0].get("qosRef").is_none());
        assert_eq!(value["ChargingDatas"][1]["qosRef"], 1);
    }

    #[test]
    fn test_subscription_wire_keys() {
        let record = subscription::map_from_dto(&SubscriptionDto::new_default());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["ueId"], "imsi-208930000000001");
        assert_eq!(value["plmnID"], "20893");
        assert_eq!(value["userNumber"], 1);

        let auth = &value["AuthenticationSubscription"];
        assert_eq!(auth["authenticationMethod"], "5G_AKA");
        assert_eq!(
            auth["permanentKey"]["permanentKeyValue"],
            "8baf473f2f8fd09487cccbd7097c6862"
        );
        assert_eq!(auth["milenage"]["op"]["opValue"], "");
        assert_eq!(auth["opc"]["opcValue"], "8e27b6af0e692e750f32667a3b14605d");

        assert_eq!(
            value["AccessAndMobilitySubscriptionData"]["gpsis"][0],
            "msisdn-"
        );
    }

    #[test]
    fn test_profile_round_trips_through_json() {
        let record = profile::map_from_dto(&ProfileDto::new_default());
        let json = serde_json::to_string(&record).unwrap();
        let parsed: Profile = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, record);
    }

    #[test]
    fn test_subscription_round_trips_through_json() {
        let record = subscription::map_from_dto(&SubscriptionDto::new_default());
        let json = serde_json::to_string(&record).unwrap();
        let parsed: Subscription = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, record);
    }

    #[test]
    fn test_dto_wire_keys() {
        let dto = SubscriptionDto::new_default();
        let value = serde_json::to_value(&dto).unwrap();

        assert!(value.get("SnssaiConfigurations").is_some());
        let slice = &value["SnssaiConfigurations"][0];
        assert_eq!(slice["isDefault"], true);
        assert_eq!(slice["chargingData"]["chargingMethod"], "Offline");

        let dnn = &slice["dnnConfigurations"]["internet"];
        assert_eq!(dnn["default5qi"], 9);
        assert_eq!(dnn["enableStaticIpv4Address"], false);
        assert_eq!(dnn["flowRules"][0]["gbrUL"], "108 Mbps");
        assert_eq!(dnn["flowRules"][0]["5qi"], 8);
    }

    #[test]
    fn test_qos_flow_rates_default_when_missing() {
        let json = r#"{"snssai":"01010203","dnn":"internet","qosRef":1}"#;
        let flow: crate::types::QosFlow = serde_json::from_str(json).unwrap();

        assert_eq!(flow.five_qi, crate::types::DEFAULT_5QI);
        assert_eq!(flow.mbr_ul, "");
        assert_eq!(flow.gbr_dl, "");
    }
}
