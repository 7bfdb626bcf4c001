use crate::models::{OperatorCodeType, SubscriberAuthDto, SubscriptionDto};
use crate::services::flows::flatten_flows;
use crate::services::mapper;
use crate::types::{
    AccessAndMobilitySubscriptionData, AuthenticationSubscription, Milenage, Op, Opc,
    PermanentKey, Subscription,
};

const MSISDN_PREFIX: &str = "msisdn-";

pub fn map_from_dto(dto: &SubscriptionDto) -> Subscription {
    let flows = flatten_flows(&dto.snssai_configurations);

    Subscription {
        user_number: dto.user_number,
        ue_id: dto.ue_id.clone(),
        plmn_id: dto.plmn_id.clone(),
        authentication: build_subscriber_auth(&dto.auth),
        access_and_mobility: AccessAndMobilitySubscriptionData {
            gpsis: Some(vec![format!(
                "{}{}",
                MSISDN_PREFIX,
                dto.gpsi.as_deref().unwrap_or_default()
            )]),
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

pub fn map_from_subscription(subscription: &Subscription) -> SubscriptionDto {
    let (operator_code_type, operator_code) = read_operator_code(&subscription.authentication);

    SubscriptionDto {
        user_number: 1,
        ue_id: subscription.ue_id.clone(),
        plmn_id: subscription.plmn_id.clone(),
        gpsi: Some(read_gpsi(&subscription.access_and_mobility)),
        auth: SubscriberAuthDto {
            authentication_management_field: subscription
                .authentication
                .authentication_management_field
                .clone()
                .unwrap_or_default(),
            authentication_method: subscription.authentication.authentication_method,
            sequence_number: subscription.authentication.sequence_number.clone(),
            permanent_key: subscription
                .authentication
                .permanent_key
                .permanent_key_value
                .clone(),
            operator_code_type,
            operator_code,
        },
        subscribed_ue_ambr: mapper::read_ambr(
            subscription.access_and_mobility.subscribed_ue_ambr.as_ref(),
        ),
        snssai_configurations: mapper::read_slice_configurations(
            &subscription.session_management,
            &subscription.access_and_mobility,
            &subscription.flow_rules,
            &subscription.qos_flows,
            &subscription.charging_datas,
            true,
        ),
    }
}

fn build_subscriber_auth(auth: &SubscriberAuthDto) -> AuthenticationSubscription {
    // the wire schema always carries both operator-code variants, the
    // non-selected one with an empty value
    let op_value = match auth.operator_code_type {
        OperatorCodeType::Op => auth.operator_code.clone(),
        OperatorCodeType::Opc => String::new(),
    };
    let opc_value = match auth.operator_code_type {
        OperatorCodeType::Opc => auth.operator_code.clone(),
        OperatorCodeType::Op => String::new(),
    };

    AuthenticationSubscription {
        authentication_method: auth.authentication_method,
        permanent_key: PermanentKey {
            permanent_key_value: auth.permanent_key.clone(),
            encryption_key: 0,
            encryption_algorithm: 0,
        },
        sequence_number: auth.sequence_number.clone(),
        authentication_management_field: Some(auth.authentication_management_field.clone()),
        milenage: Some(Milenage {
            op: Some(Op {
                op_value,
                encryption_key: 0,
                encryption_algorithm: 0,
            }),
        }),
        opc: Some(Opc {
            opc_value,
            encryption_key: 0,
            encryption_algorithm: 0,
        }),
    }
}

// OP wins whenever a non-empty value is present, OPc is the fallback
fn read_operator_code(auth: &AuthenticationSubscription) -> (OperatorCodeType, String) {
    let op_value = auth
        .milenage
        .as_ref()
        .and_then(|m| m.op.as_ref())
        .map(|op| op.op_value.as_str())
        .unwrap_or_default();

    if !op_value.is_empty() {
        return (OperatorCodeType::Op, op_value.to_string());
    }

    let opc_value = auth
        .opc
        .as_ref()
        .map(|opc| opc.opc_value.clone())
        .unwrap_or_default();

    (OperatorCodeType::Opc, opc_value)
}

fn read_gpsi(access_and_mobility: &AccessAndMobilitySubscriptionData) -> String {
    access_and_mobility
        .gpsis
        .as_ref()
        .and_then(|gpsis| gpsis.first())
        .and_then(|gpsi| gpsi.get(MSISDN_PREFIX.len()..))
        .unwrap_or_default()
        .to_string()
}
