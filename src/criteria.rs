// Query normalization: loosely typed search input in, well-formed criteria out

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROOM_TYPE: &str = "single";
pub const DEFAULT_GUESTS: u32 = 2;

// Raw search input as it arrives from a query string; every field may be missing or malformed
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSearchQuery {
    pub location: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub room_type: Option<String>,
    pub guests: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub location: String,
    pub check_in: String,
    pub check_out: String,
    pub room_type: String,
    pub guests: u32,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            location: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            room_type: DEFAULT_ROOM_TYPE.to_string(),
            guests: DEFAULT_GUESTS,
        }
    }
}

impl SearchCriteria {
    // Never fails: defaults stand in for anything missing or unusable, and a bad
    // location or date surfaces later as a provider-side error
    pub fn normalize(raw: &RawSearchQuery) -> Self {
        let room_type = raw
            .room_type
            .as_deref()
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_ROOM_TYPE)
            .to_string();

        Self {
            location: raw.location.clone().unwrap_or_default(),
            check_in: raw.check_in.clone().unwrap_or_default(),
            check_out: raw.check_out.clone().unwrap_or_default(),
            room_type,
            guests: parse_guests(raw.guests.as_deref()),
        }
    }

    // Only "single" is distinguished
    pub fn room_count(&self) -> u32 {
        if self.room_type == DEFAULT_ROOM_TYPE {
            1
        } else {
            2
        }
    }

    pub fn adult_count(&self) -> u32 {
        if self.guests == 0 {
            DEFAULT_GUESTS
        } else {
            self.guests
        }
    }

    // Length of stay, when both dates are ISO calendar dates in the right order
    pub fn nights(&self) -> Option<i64> {
        let check_in = NaiveDate::parse_from_str(&self.check_in, "%Y-%m-%d").ok()?;
        let check_out = NaiveDate::parse_from_str(&self.check_out, "%Y-%m-%d").ok()?;
        let nights = (check_out - check_in).num_days();
        (nights > 0).then_some(nights)
    }
}

fn parse_guests(raw: Option<&str>) -> u32 {
    let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return DEFAULT_GUESTS;
    };

    match value.parse::<f64>() {
        Ok(number) if number.is_finite() && number >= 1.0 => {
            number.trunc().min(u32::MAX as f64) as u32
        }
        _ => DEFAULT_GUESTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn raw_with_guests(guests: Option<&str>) -> RawSearchQuery {
        RawSearchQuery {
            guests: guests.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_empty_input() {
        let criteria = SearchCriteria::normalize(&RawSearchQuery::default());
        assert_eq!(
            criteria,
            SearchCriteria {
                location: "".to_string(),
                check_in: "".to_string(),
                check_out: "".to_string(),
                room_type: "single".to_string(),
                guests: 2,
            }
        );
        assert_eq!(criteria, SearchCriteria::default());
    }

    #[test]
    fn test_normalize_passes_values_through() {
        let raw = RawSearchQuery {
            location: Some("Paris".to_string()),
            check_in: Some("2024-06-01".to_string()),
            check_out: Some("2024-06-03".to_string()),
            room_type: Some("double".to_string()),
            guests: Some("3".to_string()),
        };

        let criteria = SearchCriteria::normalize(&raw);
        assert_eq!(criteria.location, "Paris");
        assert_eq!(criteria.check_in, "2024-06-01");
        assert_eq!(criteria.check_out, "2024-06-03");
        assert_eq!(criteria.room_type, "double");
        assert_eq!(criteria.guests, 3);
    }

    #[test]
    fn test_normalize_does_not_validate_dates() {
        let raw = RawSearchQuery {
            check_in: Some("2024-06-10".to_string()),
            check_out: Some("not a date".to_string()),
            ..Default::default()
        };

        let criteria = SearchCriteria::normalize(&raw);
        assert_eq!(criteria.check_in, "2024-06-10");
        assert_eq!(criteria.check_out, "not a date");
        assert_eq!(criteria.nights(), None);
    }

    #[test_case(None, 2; "#1 absent")]
    #[test_case(Some(""), 2; "#2 empty")]
    #[test_case(Some("abc"), 2; "#3 non numeric")]
    #[test_case(Some("0"), 2; "#4 zero")]
    #[test_case(Some("-4"), 2; "#5 negative")]
    #[test_case(Some("NaN"), 2; "#6 not a number")]
    #[test_case(Some("inf"), 2; "#7 infinite")]
    #[test_case(Some("0.5"), 2; "#8 truncates to zero")]
    #[test_case(Some("5"), 5; "#9 five guests")]
    #[test_case(Some(" 4 "), 4; "#10 surrounding whitespace")]
    #[test_case(Some("3.7"), 3; "#11 fractional")]
    fn test_normalize_guests(guests: Option<&str>, expected: u32) {
        let criteria = SearchCriteria::normalize(&raw_with_guests(guests));
        assert_eq!(criteria.guests, expected);
        assert_eq!(criteria.adult_count(), expected);
    }

    #[test_case("single", 1; "#1 single room")]
    #[test_case("double", 2; "#2 double room")]
    #[test_case("suite", 2; "#3 any other token")]
    #[test_case("", 2; "#4 empty token")]
    #[test_case("SINGLE", 2; "#5 case sensitive")]
    fn test_room_count(room_type: &str, expected: u32) {
        let criteria = SearchCriteria {
            room_type: room_type.to_string(),
            ..Default::default()
        };
        assert_eq!(criteria.room_count(), expected);
    }

    #[test]
    fn test_normalize_empty_room_type_defaults_to_single() {
        let raw = RawSearchQuery {
            room_type: Some(String::new()),
            ..Default::default()
        };
        let criteria = SearchCriteria::normalize(&raw);
        assert_eq!(criteria.room_type, "single");
        assert_eq!(criteria.room_count(), 1);
    }

    #[test]
    fn test_adult_count_defaults_when_zero() {
        let criteria = SearchCriteria {
            guests: 0,
            ..Default::default()
        };
        assert_eq!(criteria.adult_count(), 2);
    }

    #[test_case("2024-06-01", "2024-06-03", Some(2); "#1 two nights")]
    #[test_case("2024-02-28", "2024-03-01", Some(2); "#2 across leap day")]
    #[test_case("2024-06-03", "2024-06-01", None; "#3 reversed")]
    #[test_case("2024-06-01", "2024-06-01", None; "#4 same day")]
    #[test_case("", "2024-06-01", None; "#5 missing check in")]
    fn test_nights(check_in: &str, check_out: &str, expected: Option<i64>) {
        let criteria = SearchCriteria {
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            ..Default::default()
        };
        assert_eq!(criteria.nights(), expected);
    }

    #[test]
    fn test_raw_query_from_query_string_names() {
        let raw: RawSearchQuery = serde_json::from_str(
            r#"{"location":"Rome","checkIn":"2024-07-01","checkOut":"2024-07-04","roomType":"double","guests":"4"}"#,
        )
        .unwrap();
        let criteria = SearchCriteria::normalize(&raw);
        assert_eq!(criteria.location, "Rome");
        assert_eq!(criteria.check_out, "2024-07-04");
        assert_eq!(criteria.guests, 4);
    }
}
