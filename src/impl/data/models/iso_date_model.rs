use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::ReportError;

/// Calendar date as stored by the backend (`YYYY-MM-DD`).
#[derive(Debug)]
pub(crate) struct IsoDateModel(pub(crate) NaiveDate);

impl FromStr for IsoDateModel {
    type Err = ReportError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            ReportError::InvalidIsoDate {
                value: s.to_string(),
            }
        })?;
        Ok(IsoDateModel(d))
    }
}

impl From<IsoDateModel> for NaiveDate {
    fn from(model: IsoDateModel) -> Self {
        model.0
    }
}

/// Row timestamp as stored by the backend (RFC 3339).
#[derive(Debug)]
pub(crate) struct UtcTimestampModel(pub(crate) DateTime<Utc>);

impl FromStr for UtcTimestampModel {
    type Err = ReportError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = DateTime::parse_from_rfc3339(s).map_err(|_| ReportError::InvalidTimestamp {
            value: s.to_string(),
        })?;
        Ok(UtcTimestampModel(t.with_timezone(&Utc)))
    }
}

impl From<UtcTimestampModel> for DateTime<Utc> {
    fn from(model: UtcTimestampModel) -> Self {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        let model: IsoDateModel = "2024-05-03".parse().unwrap();
        assert_eq!(
            NaiveDate::from(model),
            NaiveDate::from_ymd_opt(2024, 5, 3).unwrap()
        );
        assert!("03/05/2024".parse::<IsoDateModel>().is_err());
    }

    #[test]
    fn parses_rfc3339_timestamp() {
        assert!("2024-05-03T10:15:00Z".parse::<UtcTimestampModel>().is_ok());
        assert!("yesterday".parse::<UtcTimestampModel>().is_err());
    }
}
