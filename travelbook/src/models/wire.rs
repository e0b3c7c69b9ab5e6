//! Serde helpers for the backend's wire formats.

/// Timestamps arrive as ISO-8601, sometimes with an offset and sometimes naive.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn parse(s: &str) -> Option<NaiveDateTime> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.naive_local());
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    }

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(OUTPUT_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

/// Decimal amounts may be JSON numbers or decimal strings.
pub mod price {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| de::Error::custom(format!("invalid price: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::timestamp;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_naive_and_offset_timestamps() {
        let naive = timestamp::parse("2025-01-05T14:30:00").unwrap();
        assert_eq!((naive.day(), naive.hour(), naive.minute()), (5, 14, 30));

        let micros = timestamp::parse("2025-01-05T14:30:00.123456").unwrap();
        assert_eq!(micros.hour(), 14);

        let offset = timestamp::parse("2025-01-05T14:30:00+05:30").unwrap();
        assert_eq!(offset.hour(), 14);

        assert!(timestamp::parse("yesterday").is_none());
    }
}
