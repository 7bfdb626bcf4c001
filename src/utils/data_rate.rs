pub const MALFORMED_RATE: f64 = -1.0;

pub fn parse_data_rate(rate: Option<&str>) -> f64 {
    let Some(rate) = rate else {
        return 0.0;
    };

    if rate.is_empty() {
        return 0.0;
    }

    let lowered = rate.to_ascii_lowercase();

    let (numeric_part, factor) = if let Some(rest) = lowered.strip_suffix("gbps") {
        (rest, 1_000_000.0)
    } else if let Some(rest) = lowered.strip_suffix("mbps") {
        (rest, 1_000.0)
    } else if let Some(rest) = lowered.strip_suffix("kbps") {
        (rest, 1.0)
    } else if let Some(rest) = lowered.strip_suffix("bps") {
        (rest, 0.001)
    } else {
        return MALFORMED_RATE;
    };

    let numeric_part = numeric_part.trim_end();

    if numeric_part.is_empty() || !numeric_part.bytes().all(|b| b.is_ascii_digit()) {
        return MALFORMED_RATE;
    }

    match numeric_part.parse::<f64>() {
        Ok(value) => value * factor,
        Err(_) => MALFORMED_RATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_rate_is_zero() {
        assert_eq!(parse_data_rate(None), 0.0);
        assert_eq!(parse_data_rate(Some("")), 0.0);
    }

    #[test]
    fn test_rates_normalize_to_kbps() {
        assert_eq!(parse_data_rate(Some("100 Mbps")), 100_000.0);
        assert_eq!(parse_data_rate(Some("1 Gbps")), 1_000_000.0);
        assert_eq!(parse_data_rate(Some("64 Kbps")), 64.0);
        assert_eq!(parse_data_rate(Some("5 bps")), 0.005);
    }

    #[test]
    fn test_unit_is_case_insensitive() {
        assert_eq!(parse_data_rate(Some("208 mbps")), 208_000.0);
        assert_eq!(parse_data_rate(Some("2 GBPS")), 2_000_000.0);
    }

    #[test]
    fn test_whitespace_between_value_and_unit_is_optional() {
        assert_eq!(parse_data_rate(Some("100Mbps")), 100_000.0);
        assert_eq!(parse_data_rate(Some("100  Mbps")), 100_000.0);
    }

    #[test]
    fn test_malformed_rates_return_sentinel() {
        assert_eq!(parse_data_rate(Some("garbage")), MALFORMED_RATE);
        assert_eq!(parse_data_rate(Some("100")), MALFORMED_RATE);
        assert_eq!(parse_data_rate(Some("Mbps")), MALFORMED_RATE);
        assert_eq!(parse_data_rate(Some("1.5 Mbps")), MALFORMED_RATE);
        assert_eq!(parse_data_rate(Some("-1 Mbps")), MALFORMED_RATE);
        assert_eq!(parse_data_rate(Some(" 100 Mbps")), MALFORMED_RATE);
        assert_eq!(parse_data_rate(Some("100 Mbps ")), MALFORMED_RATE);
        assert_eq!(parse_data_rate(Some("100 Tbps")), MALFORMED_RATE);
    }
}
