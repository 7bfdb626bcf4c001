use indexmap::IndexMap;

use crate::models::{AmbrDto, ChargingDataDto, DnnConfigurationDto, FlowRuleDto, SnssaiConfigurationDto, UpSecurityDto};
use crate::types::{
    AccessAndMobilitySubscriptionData, Ambr, AmPolicyData, Arp, ChargingData, DnnConfiguration,
    DnnInfo, FlowRule, IpAddress, Nssai, PduSessionType, PduSessionTypes, QosFlow,
    SessionManagementSubscriptionData, SmfSelectionSubscriptionData, SmPolicyData,
    SmPolicyDnnData, SmPolicySnssaiData, Snssai, SnssaiInfo, SscMode, SscModes,
    SubscribedDefaultQos, UpSecurity,
};

pub const POLICY_SUBSCRIPTION_CATEGORY: &str = "core-console";

pub fn build_nssai(slice: &SnssaiConfigurationDto) -> Snssai {
    Snssai {
        sst: slice.sst,
        sd: Some(slice.sd.clone()),
    }
}

pub fn build_ambr(ambr: &AmbrDto) -> Ambr {
    Ambr {
        uplink: ambr.uplink.clone(),
        downlink: ambr.downlink.clone(),
    }
}

pub fn build_nssai_partition(slices: &[SnssaiConfigurationDto]) -> Nssai {
    Nssai {
        default_single_nssais: Some(
            slices
                .iter()
                .filter(|s| s.is_default)
                .map(build_nssai)
                .collect(),
        ),
        single_nssais: Some(
            slices
                .iter()
                .filter(|s| !s.is_default)
                .map(build_nssai)
                .collect(),
        ),
    }
}

pub fn build_session_management_data(
    slice: &SnssaiConfigurationDto,
) -> SessionManagementSubscriptionData {
    SessionManagementSubscriptionData {
        single_nssai: build_nssai(slice),
        dnn_configurations: Some(
            slice
                .dnn_configurations
                .iter()
                .map(|(dnn, config)| (dnn.clone(), build_dnn_configuration(config)))
                .collect(),
        ),
    }
}

pub fn build_dnn_configuration(config: &DnnConfigurationDto) -> DnnConfiguration {
    DnnConfiguration {
        pdu_session_types: PduSessionTypes {
            default_session_type: PduSessionType::Ipv4,
            allowed_session_types: Some(vec![PduSessionType::Ipv4]),
        },
        ssc_modes: SscModes {
            default_ssc_mode: SscMode::SscMode1,
            allowed_ssc_modes: Some(vec![SscMode::SscMode2, SscMode::SscMode3]),
        },
        qos_profile_5g: Some(SubscribedDefaultQos {
            five_qi: config.default_5qi,
            arp: Some(Arp {
                priority_level: 8,
                preempt_cap: String::new(),
                preempt_vuln: String::new(),
            }),
            priority_level: Some(8),
        }),
        session_ambr: Some(build_ambr(&config.session_ambr)),
        static_ip_address: Some(if config.enable_static_ipv4_address {
            vec![IpAddress {
                ipv4_addr: config.static_ipv4_address.clone(),
                ipv6_addr: None,
                ipv6_prefix: None,
            }]
        } else {
            Vec::new()
        }),
        up_security: config.up_security.as_ref().map(build_up_security),
    }
}

pub fn build_up_security(security: &UpSecurityDto) -> UpSecurity {
    UpSecurity {
        up_integr: security.up_integr,
        up_confid: security.up_confid,
    }
}

pub fn build_smf_selection(slices: &[SnssaiConfigurationDto]) -> SmfSelectionSubscriptionData {
    SmfSelectionSubscriptionData {
        subscribed_snssai_infos: Some(
            slices
                .iter()
                .map(|slice| {
                    (
                        slice.snssai_key(),
                        SnssaiInfo {
                            dnn_infos: slice
                                .dnn_configurations
                                .keys()
                                .map(|dnn| DnnInfo { dnn: dnn.clone() })
                                .collect(),
                        },
                    )
                })
                .collect(),
        ),
    }
}

pub fn build_am_policy() -> AmPolicyData {
    AmPolicyData {
        subsc_cats: Some(vec![POLICY_SUBSCRIPTION_CATEGORY.to_string()]),
    }
}

pub fn build_sm_policy(slices: &[SnssaiConfigurationDto]) -> SmPolicyData {
    SmPolicyData {
        sm_policy_snssai_data: slices
            .iter()
            .map(|slice| {
                (
                    slice.snssai_key(),
                    SmPolicySnssaiData {
                        snssai: build_nssai(slice),
                        sm_policy_dnn_data: Some(
                            slice
                                .dnn_configurations
                                .keys()
                                .map(|dnn| (dnn.clone(), SmPolicyDnnData { dnn: dnn.clone() }))
                                .collect::<IndexMap<_, _>>(),
                        ),
                    },
                )
            })
            .collect(),
    }
}

pub fn read_ambr(ambr: Option<&Ambr>) -> AmbrDto {
    AmbrDto {
        uplink: ambr.map(|a| a.uplink.clone()).unwrap_or_default(),
        downlink: ambr.map(|a| a.downlink.clone()).unwrap_or_default(),
    }
}

pub fn read_up_security(security: &UpSecurity) -> UpSecurityDto {
    UpSecurityDto {
        up_integr: security.up_integr,
        up_confid: security.up_confid,
    }
}

pub fn slice_is_default(nssai: &Snssai, access_and_mobility: &AccessAndMobilitySubscriptionData) -> bool {
    access_and_mobility
        .nssai
        .as_ref()
        .and_then(|n| n.default_single_nssais.as_ref())
        .map(|defaults| defaults.iter().any(|d| d == nssai))
        .unwrap_or(false)
}

pub fn find_slice_charging_data(nssai: &Snssai, charging_datas: &[ChargingData]) -> ChargingDataDto {
    let key = nssai.key();
    let charging = charging_datas
        .iter()
        .find(|c| c.is_slice_level() && c.snssai == key);

    ChargingDataDto {
        charging_method: charging.map(|c| c.charging_method).unwrap_or_default(),
        quota: charging.map(|c| c.quota.clone()).unwrap_or_default(),
        unit_cost: charging.map(|c| c.unit_cost.clone()).unwrap_or_default(),
    }
}

pub fn collect_dnn_flow_rules(
    nssai: &Snssai,
    dnn: &str,
    flow_rules: &[FlowRule],
    qos_flows: &[QosFlow],
    charging_datas: &[ChargingData],
) -> Vec<FlowRuleDto> {
    let key = nssai.key();

    qos_flows
        .iter()
        .filter(|f| f.dnn == dnn && f.snssai == key)
        .map(|flow| {
            let rule = flow_rules.iter().find(|r| r.qos_ref == flow.qos_ref);
            let charging = charging_datas
                .iter()
                .find(|c| c.qos_ref == Some(flow.qos_ref));

            FlowRuleDto {
                filter: rule.map(|r| r.filter.clone()).unwrap_or_default(),
                precedence: rule.map(|r| r.precedence).unwrap_or(0),
                five_qi: flow.five_qi,
                gbr_ul: flow.gbr_ul.clone(),
                gbr_dl: flow.gbr_dl.clone(),
                mbr_ul: flow.mbr_ul.clone(),
                mbr_dl: flow.mbr_dl.clone(),
                charging_data: ChargingDataDto {
                    charging_method: charging.map(|c| c.charging_method).unwrap_or_default(),
                    quota: charging.map(|c| c.quota.clone()).unwrap_or_default(),
                    unit_cost: charging.map(|c| c.unit_cost.clone()).unwrap_or_default(),
                },
            }
        })
        .collect()
}

pub fn read_slice_configurations(
    session_management: &[SessionManagementSubscriptionData],
    access_and_mobility: &AccessAndMobilitySubscriptionData,
    flow_rules: &[FlowRule],
    qos_flows: &[QosFlow],
    charging_datas: &[ChargingData],
    include_static_ipv4: bool,
) -> Vec<SnssaiConfigurationDto> {
    session_management
        .iter()
        .map(|session| {
            let dnn_configurations = session
                .dnn_configurations
                .as_ref()
                .map(|dnns| {
                    dnns.iter()
                        .map(|(dnn, config)| {
                            (
                                dnn.clone(),
                                read_dnn_configuration(
                                    &session.single_nssai,
                                    dnn,
                                    config,
                                    flow_rules,
                                    qos_flows,
                                    charging_datas,
                                    include_static_ipv4,
                                ),
                            )
                        })
                        .collect()
                })
                .unwrap_or_default();

            SnssaiConfigurationDto {
                sst: session.single_nssai.sst,
                sd: session.single_nssai.sd.clone().unwrap_or_default(),
                is_default: slice_is_default(&session.single_nssai, access_and_mobility),
                charging_data: find_slice_charging_data(&session.single_nssai, charging_datas),
                dnn_configurations,
            }
        })
        .collect()
}

fn read_dnn_configuration(
    nssai: &Snssai,
    dnn: &str,
    config: &DnnConfiguration,
    flow_rules: &[FlowRule],
    qos_flows: &[QosFlow],
    charging_datas: &[ChargingData],
    include_static_ipv4: bool,
) -> DnnConfigurationDto {
    DnnConfigurationDto {
        default_5qi: config
            .qos_profile_5g
            .as_ref()
            .map(|q| q.five_qi)
            .unwrap_or(crate::types::DEFAULT_5QI),
        session_ambr: read_ambr(config.session_ambr.as_ref()),
        // an absent staticIpAddress list reads as enabled, only an empty one disables
        enable_static_ipv4_address: config
            .static_ip_address
            .as_ref()
            .map_or(true, |addresses| !addresses.is_empty()),
        static_ipv4_address: include_static_ipv4.then(|| {
            config
                .static_ip_address
                .as_ref()
                .and_then(|addresses| addresses.first())
                .and_then(|address| address.ipv4_addr.clone())
                .unwrap_or_default()
        }),
        flow_rules: collect_dnn_flow_rules(nssai, dnn, flow_rules, qos_flows, charging_datas),
        up_security: config.up_security.as_ref().map(read_up_security),
    }
}
