//! Delivery areas served by the day-ahead market.

/// Area code to human readable region name.
pub const AREAS: &[(&str, &str)] = &[
    // Baltics
    ("EE", "Estonia"),
    ("LT", "Lithuania"),
    ("LV", "Latvia"),
    // CWE
    ("AT", "Austria"),
    ("BE", "Belgium"),
    ("FR", "France"),
    ("GER", "Germany"),
    ("NL", "Netherlands"),
    ("PL", "Poland"),
    // Nordic
    ("DK1", "Denmark 1"),
    ("DK2", "Denmark 2"),
    ("FI", "Finland"),
    ("NO1", "Norway 1"),
    ("NO2", "Norway 2"),
    ("NO3", "Norway 3"),
    ("NO4", "Norway 4"),
    ("NO5", "Norway 5"),
    ("SE1", "Sweden 1"),
    ("SE2", "Sweden 2"),
    ("SE3", "Sweden 3"),
    ("SE4", "Sweden 4"),
    // System
    ("SYS", "System price"),
];

/// Looks up the region name of an area code.
pub fn area_name(code: &str) -> Option<&'static str> {
    AREAS
        .iter()
        .find(|(area, _)| *area == code)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_area_name() {
        assert_eq!(area_name("SE3"), Some("Sweden 3"));
        assert_eq!(area_name("GER"), Some("Germany"));
        assert_eq!(area_name("SYS"), Some("System price"));
    }

    #[test]
    fn test_area_name_unknown() {
        assert_eq!(area_name("XX"), None);
        assert_eq!(area_name("se3"), None);
    }

    #[test]
    fn test_area_codes_unique() {
        let codes: HashSet<_> = AREAS.iter().map(|(code, _)| code).collect();
        assert_eq!(codes.len(), AREAS.len());
    }
}
