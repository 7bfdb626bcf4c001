use axum::Json;

use crate::models::{
    FlowRuleDto, ProfileDto, SnssaiConfigurationDto, SubscriptionDto, UpSecurityDto,
};

pub async fn profile_template() -> Json<ProfileDto> {
    Json(ProfileDto::new_default())
}

pub async fn subscriber_template() -> Json<SubscriptionDto> {
    Json(SubscriptionDto::new_default())
}

pub async fn slice_template() -> Json<SnssaiConfigurationDto> {
    Json(SnssaiConfigurationDto::new_default())
}

pub async fn flow_rule_template() -> Json<FlowRuleDto> {
    Json(FlowRuleDto::new_default())
}

pub async fn up_security_template() -> Json<UpSecurityDto> {
    Json(UpSecurityDto::new_default())
}
