use crate::models::ProfileDto;
use crate::services::flows::flatten_flows;
use crate::services::mapper;
use crate::types::{AccessAndMobilitySubscriptionData, Profile};

pub fn map_from_dto(dto: &ProfileDto) -> Profile {
    let flows = flatten_flows(&dto.snssai_configurations);

    Profile {
        profile_name: dto.profile_name.clone(),
        access_and_mobility: AccessAndMobilitySubscriptionData {
            gpsis: None,
            subscribed_ue_ambr: Some(mapper::build_ambr(&dto.subscribed_ue_ambr)),
            nssai: Some(mapper::build_nssai_partition(&dto.snssai_configurations)),
        },
        session_management: dto
            .snssai_configurations
            .iter()
            .map(mapper::build_session_management_data)
            .collect(),
        smf_selection: mapper::build_smf_selection(&dto.snssai_configurations),
        am_policy: mapper::build_am_policy(),
        sm_policy: mapper::build_sm_policy(&dto.snssai_configurations),
        flow_rules: flows.flow_rules,
        qos_flows: flows.qos_flows,
        charging_datas: flows.charging_datas,
    }
}

pub fn map_from_profile(profile: &Profile) -> ProfileDto {
    ProfileDto {
        profile_name: profile.profile_name.clone(),
        subscribed_ue_ambr: mapper::read_ambr(profile.access_and_mobility.subscribed_ue_ambr.as_ref()),
        snssai_configurations: mapper::read_slice_configurations(
            &profile.session_management,
            &profile.access_and_mobility,
            &profile.flow_rules,
            &profile.qos_flows,
            &profile.charging_datas,
            false,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChargingData, ChargingMethod, SessionManagementSubscriptionData, Snssai};

    #[test]
    fn test_default_profile_round_trips_through_domain() {
        let dto = ProfileDto::new_default();
        let mapped = map_from_profile(&map_from_dto(&dto));

        assert_eq!(mapped, dto);
    }

    #[test]
    fn test_domain_round_trips_through_dto() {
        let domain = map_from_dto(&ProfileDto::new_default());
        let remapped = map_from_dto(&map_from_profile(&domain));

        assert_eq!(remapped.flow_rules, domain.flow_rules);
        assert_eq!(remapped.qos_flows, domain.qos_flows);
        assert_eq!(remapped.charging_datas, domain.charging_datas);
        assert_eq!(remapped, domain);
    }

    #[test]
    fn test_map_from_dto_partitions_default_slices() {
        let domain = map_from_dto(&ProfileDto::new_default());
        let nssai = domain.access_and_mobility.nssai.as_ref().unwrap();

        assert_eq!(
            nssai.default_single_nssais,
            Some(vec![Snssai::new(1, "010203")])
        );
        assert_eq!(nssai.single_nssais, Some(vec![Snssai::new(1, "112233")]));
    }

    #[test]
    fn test_map_from_dto_derives_policy_sections_per_slice() {
        let domain = map_from_dto(&ProfileDto::new_default());

        let snssai_infos = domain.smf_selection.subscribed_snssai_infos.as_ref().unwrap();
        assert_eq!(
            snssai_infos.keys().collect::<Vec<_>>(),
            vec!["01010203", "01112233"]
        );
        assert_eq!(snssai_infos["01010203"].dnn_infos[0].dnn, "internet");

        let policy = &domain.sm_policy.sm_policy_snssai_data;
        assert_eq!(policy["01112233"].snssai, Snssai::new(1, "112233"));
        assert!(policy["01112233"]
            .sm_policy_dnn_data
            .as_ref()
            .unwrap()
            .contains_key("internet"));
    }

    #[test]
    fn test_map_from_profile_defaults_missing_dnn_configurations() {
        let mut domain = map_from_dto(&ProfileDto::new_default());
        domain.session_management = vec![SessionManagementSubscriptionData {
            single_nssai: Snssai::new(1, "010203"),
            dnn_configurations: None,
        }];

        let dto = map_from_profile(&domain);

        assert_eq!(dto.snssai_configurations.len(), 1);
        assert!(dto.snssai_configurations[0].dnn_configurations.is_empty());
    }

    #[test]
    fn test_map_from_profile_defaults_missing_slice_charging() {
        let mut domain = map_from_dto(&ProfileDto::new_default());
        domain.charging_datas.retain(|c| !c.is_slice_level());

        let dto = map_from_profile(&domain);

        let charging = &dto.snssai_configurations[0].charging_data;
        assert_eq!(charging.charging_method, ChargingMethod::Offline);
        assert_eq!(charging.quota, "");
        assert_eq!(charging.unit_cost, "");
    }

    #[test]
    fn test_map_from_profile_defaults_unmatched_qos_refs() {
        let mut domain = map_from_dto(&ProfileDto::new_default());
        domain.flow_rules.clear();
        domain.charging_datas.retain(|c| c.qos_ref.is_none());

        let dto = map_from_profile(&domain);

        let flow = &dto.snssai_configurations[0].dnn_configurations["internet"].flow_rules[0];
        assert_eq!(flow.filter, "");
        assert_eq!(flow.precedence, 0);
        assert_eq!(flow.charging_data.charging_method, ChargingMethod::Offline);
        assert_eq!(flow.charging_data.quota, "");
    }

    #[test]
    fn test_map_from_profile_reads_slice_charging_by_snssai() {
        let domain = map_from_dto(&ProfileDto::new_default());
        let dto = map_from_profile(&domain);

        assert_eq!(
            dto.snssai_configurations[0].charging_data.charging_method,
            ChargingMethod::Offline
        );
        assert_eq!(
            dto.snssai_configurations[1].charging_data.charging_method,
            ChargingMethod::Online
        );
    }

    #[test]
    fn test_slice_charging_lookup_ignores_per_flow_entries() {
        let mut domain = map_from_dto(&ProfileDto::new_default());
        // shadow the slice entry with a per-flow one carrying a different method
        domain.charging_datas.insert(
            0,
            ChargingData {
                snssai: "01010203".to_string(),
                dnn: "internet".to_string(),
                qos_ref: Some(9),
                filter: "2.2.2.2/32".to_string(),
                charging_method: ChargingMethod::Online,
                quota: "1".to_string(),
                unit_cost: "1".to_string(),
            },
        );

        let dto = map_from_profile(&domain);
        assert_eq!(
            dto.snssai_configurations[0].charging_data.charging_method,
            ChargingMethod::Offline
        );
    }

    #[test]
    fn test_profile_dto_omits_static_ipv4_value_on_read() {
        let mut dto = ProfileDto::new_default();
        let config = &mut dto.snssai_configurations[0].dnn_configurations["internet"];
        config.enable_static_ipv4_address = true;
        config.static_ipv4_address = Some("10.0.0.5".to_string());

        let read_back = map_from_profile(&map_from_dto(&dto));
        let config = &read_back.snssai_configurations[0].dnn_configurations["internet"];

        assert!(config.enable_static_ipv4_address);
        assert_eq!(config.static_ipv4_address, None);
    }
}
