pub mod flows;
pub mod subscriber;

use serde::{Deserialize, Serialize};

pub use flows::*;
pub use subscriber::*;

pub const DEFAULT_5QI: u8 = 9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snssai {
    pub sst: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd: Option<String>,
}

impl Snssai {
    pub fn new(sst: u8, sd: impl Into<String>) -> Self {
        Self {
            sst,
            sd: Some(sd.into()),
        }
    }

    pub fn key(&self) -> String {
        format!("{:02}{}", self.sst, self.sd.as_deref().unwrap_or_default())
    }
}

pub fn snssai_key(sst: u8, sd: &str) -> String {
    format!("{:02}{}", sst, sd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snssai_key_pads_sst_to_two_digits() {
        assert_eq!(snssai_key(1, "010203"), "01010203");
        assert_eq!(snssai_key(0, "abcdef"), "00abcdef");
        assert_eq!(snssai_key(42, "112233"), "42112233");
    }

    #[test]
    fn test_snssai_key_keeps_wide_sst() {
        assert_eq!(snssai_key(255, "010203"), "255010203");
    }

    #[test]
    fn test_snssai_key_with_empty_sd() {
        assert_eq!(snssai_key(1, ""), "01");
    }

    #[test]
    fn test_snssai_key_matches_struct_key() {
        let snssai = Snssai::new(1, "010203");
        assert_eq!(snssai.key(), snssai_key(1, "010203"));

        let bare = Snssai { sst: 1, sd: None };
        assert_eq!(bare.key(), "01");
    }
}
