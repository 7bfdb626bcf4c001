use crate::models::{ChargingDataDto, FlowRuleDto, SnssaiConfigurationDto};
use crate::types::{ChargingData, FlowRule, QosFlow};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenedFlows {
    pub flow_rules: Vec<FlowRule>,
    pub qos_flows: Vec<QosFlow>,
    pub charging_datas: Vec<ChargingData>,
}

struct DnnEntry<'a> {
    snssai: String,
    dnn: &'a str,
    slice_charging_data: &'a ChargingDataDto,
    flow_rules: &'a [FlowRuleDto],
}

fn collect_dnn_entries(slices: &[SnssaiConfigurationDto]) -> Vec<DnnEntry<'_>> {
    slices
        .iter()
        .flat_map(|slice| {
            let snssai = slice.snssai_key();
            slice
                .dnn_configurations
                .iter()
                .map(move |(dnn, dnn_config)| DnnEntry {
                    snssai: snssai.clone(),
                    dnn,
                    slice_charging_data: &slice.charging_data,
                    flow_rules: &dnn_config.flow_rules,
                })
        })
        .collect()
}

pub fn flatten_flows(slices: &[SnssaiConfigurationDto]) -> FlattenedFlows {
    let mut acc = FlattenedFlows::default();
    // qosRef values are scoped to a single flattening pass, starting at 1
    let mut next_qos_ref: u32 = 1;

    for entry in collect_dnn_entries(slices) {
        acc.charging_datas.push(ChargingData {
            snssai: entry.snssai.clone(),
            dnn: String::new(),
            qos_ref: None,
            filter: String::new(),
            charging_method: entry.slice_charging_data.charging_method,
            quota: entry.slice_charging_data.quota.clone(),
            unit_cost: entry.slice_charging_data.unit_cost.clone(),
        });

        for flow in entry.flow_rules {
            let qos_ref = next_qos_ref;
            next_qos_ref += 1;

            acc.flow_rules.push(FlowRule {
                filter: flow.filter.clone(),
                precedence: flow.precedence,
                snssai: entry.snssai.clone(),
                dnn: entry.dnn.to_string(),
                qos_ref,
            });

            acc.qos_flows.push(QosFlow {
                snssai: entry.snssai.clone(),
                dnn: entry.dnn.to_string(),
                qos_ref,
                five_qi: flow.five_qi,
                mbr_ul: flow.mbr_ul.clone(),
                mbr_dl: flow.mbr_dl.clone(),
                gbr_ul: flow.gbr_ul.clone(),
                gbr_dl: flow.gbr_dl.clone(),
            });

            acc.charging_datas.push(ChargingData {
                snssai: entry.snssai.clone(),
                dnn: entry.dnn.to_string(),
                qos_ref: Some(qos_ref),
                filter: flow.filter.clone(),
                charging_method: flow.charging_data.charging_method,
                quota: flow.charging_data.quota.clone(),
                unit_cost: flow.charging_data.unit_cost.clone(),
            });
        }
    }

    acc
}
