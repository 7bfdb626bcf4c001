use serde::{Deserialize, Serialize};

use super::{default_slice_configurations, AmbrDto, SnssaiConfigurationDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub profile_name: String,
    pub subscribed_ue_ambr: AmbrDto,
    #[serde(rename = "SnssaiConfigurations")]
    pub snssai_configurations: Vec<SnssaiConfigurationDto>,
}

impl ProfileDto {
    pub fn new_default() -> Self {
        Self {
            profile_name: "profile-1".to_string(),
            subscribed_ue_ambr: AmbrDto::new("1 Gbps", "2 Gbps"),
            snssai_configurations: default_slice_configurations(None),
        }
    }
}
