//! Serde helpers for the schedule wire format.
//!
//! Times serialize as `HH:MM`; a slot without an end (the social marker)
//! serializes as an empty string. Field names and enumerated values are a
//! compatibility surface for downstream renderers and must not drift.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%H:%M";

/// `NaiveTime` <-> `"HH:MM"`.
pub mod hhmm {
    use super::*;

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&text, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// `Option<NaiveTime>` <-> `"HH:MM"` or `""` for `None`.
pub mod hhmm_or_empty {
    use super::*;

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&t.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        if text.is_empty() {
            return Ok(None);
        }
        NaiveTime::parse_from_str(&text, FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Probe {
        #[serde(with = "super::hhmm")]
        at: NaiveTime,
        #[serde(with = "super::hhmm_or_empty")]
        until: Option<NaiveTime>,
    }

    #[test]
    fn times_render_as_hh_mm() {
        let probe = Probe {
            at: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            until: None,
        };
        let json = serde_json::to_string(&probe).unwrap();
        assert_eq!(json, r#"{"at":"09:05","until":""}"#);
    }

    #[test]
    fn empty_string_round_trips_to_none() {
        let probe: Probe = serde_json::from_str(r#"{"at":"19:00","until":""}"#).unwrap();
        assert_eq!(probe.at, NaiveTime::from_hms_opt(19, 0, 0).unwrap());
        assert!(probe.until.is_none());

        let probe: Probe = serde_json::from_str(r#"{"at":"19:00","until":"20:30"}"#).unwrap();
        assert_eq!(probe.until, NaiveTime::from_hms_opt(20, 30, 0));
    }
}
