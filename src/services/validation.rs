use crate::types::{Profile, QosFlow, SessionManagementSubscriptionData, Subscription};
use crate::utils::{parse_data_rate, MALFORMED_RATE};

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
        }
    }
}

pub fn validate_profile(profile: &Profile) -> ValidationOutcome {
    let outcome = validate_dnn_ambr(&profile.session_management);
    if !outcome.is_valid {
        return outcome;
    }

    validate_mbr_greater_than_gbr(&profile.qos_flows)
}

pub fn validate_subscription(subscription: &Subscription) -> ValidationOutcome {
    let outcome = validate_supi_prefix_matches_plmn(subscription);
    if !outcome.is_valid {
        return outcome;
    }

    let outcome = validate_dnn_ambr(&subscription.session_management);
    if !outcome.is_valid {
        return outcome;
    }

    validate_mbr_greater_than_gbr(&subscription.qos_flows)
}

pub fn validate_supi_prefix_matches_plmn(subscription: &Subscription) -> ValidationOutcome {
    supi_prefix_matches_plmn(&subscription.ue_id, &subscription.plmn_id)
}

pub fn supi_prefix_matches_plmn(ue_id: &str, plmn_id: &str) -> ValidationOutcome {
    let supi_prefix = ue_id.get(5..10).unwrap_or_default();
    if supi_prefix != plmn_id {
        return ValidationOutcome::invalid("SUPI Prefix must be same as PLMN");
    }

    ValidationOutcome::valid()
}

pub fn validate_dnn_ambr(
    session_management: &[SessionManagementSubscriptionData],
) -> ValidationOutcome {
    for session in session_management {
        let Some(dnn_configurations) = &session.dnn_configurations else {
            // a record without DNN configurations is still being filled in
            return ValidationOutcome::valid();
        };

        for (dnn, config) in dnn_configurations {
            let Some(session_ambr) = &config.session_ambr else {
                return ValidationOutcome::valid();
            };

            let sd = session.single_nssai.sd.as_deref().unwrap_or_default();

            if parse_data_rate(Some(&session_ambr.uplink)) == MALFORMED_RATE {
                return ValidationOutcome::invalid(format!(
                    "In S-NSSAI {}'s DNN: {}\nuplink AMBR is invalid",
                    sd, dnn
                ));
            }

            if parse_data_rate(Some(&session_ambr.downlink)) == MALFORMED_RATE {
                return ValidationOutcome::invalid(format!(
                    "In S-NSSAI {}'s DNN: {}\ndownlink AMBR is invalid",
                    sd, dnn
                ));
            }
        }
    }

    ValidationOutcome::valid()
}

// TODO: also compare MBR against GBR numerically once the intended rule is
// confirmed; today only parseability of the four rates is checked
pub fn validate_mbr_greater_than_gbr(qos_flows: &[QosFlow]) -> ValidationOutcome {
    for flow in qos_flows {
        if parse_data_rate(Some(&flow.gbr_dl)) == MALFORMED_RATE {
            return ValidationOutcome::invalid(format!(
                "In S-NSSAI {}'s Flow Rule\nDownlink GBR is invalid",
                flow.snssai
            ));
        }

        if parse_data_rate(Some(&flow.mbr_dl)) == MALFORMED_RATE {
            return ValidationOutcome::invalid(format!(
                "In S-NSSAI {}'s Flow Rule\nDownlink MBR is invalid",
                flow.snssai
            ));
        }

        if parse_data_rate(Some(&flow.gbr_ul)) == MALFORMED_RATE {
            return ValidationOutcome::invalid(format!(
                "In S-NSSAI {}'s Flow Rule\nUplink GBR is invalid",
                flow.snssai
            ));
        }

        if parse_data_rate(Some(&flow.mbr_ul)) == MALFORMED_RATE {
            return ValidationOutcome::invalid(format!(
                "In S-NSSAI {}'s Flow Rule\nUplink MBR is invalid",
                flow.snssai
            ));
        }
    }

    ValidationOutcome::valid()
}
