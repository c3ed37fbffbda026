use serde::de::Error as _;

use crate::api::{FetchError, Transport};
use crate::models::{RawStatus, StatusSnapshot};

/// One read of the status endpoint.
pub async fn fetch_snapshot<T: Transport>(
    transport: &T,
    status_path: &str,
) -> Result<StatusSnapshot, FetchError> {
    let body = transport.get_text(status_path).await?;
    parse_snapshot(&body)
}

/// The body must be a single JSON object; absent keys are tolerated.
pub fn parse_snapshot(body: &str) -> Result<StatusSnapshot, FetchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|err| FetchError::parse("status snapshot", err))?;

    if !value.is_object() {
        return Err(FetchError::parse(
            "status snapshot",
            serde_json::Error::custom("expected a JSON object"),
        ));
    }

    let raw: RawStatus =
        serde_json::from_value(value).map_err(|err| FetchError::parse("status snapshot", err))?;
    Ok(raw.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SystemStatus;

    #[test]
    fn parses_full_payload() {
        let snapshot = parse_snapshot(
            r#"{
                "data": "NO CAR PRESENT - SPACE VACANT",
                "sysstatus": "Online",
                "streak": "N/A",
                "occupiedPercentage": "41.20",
                "unoccupiedPercentage": "58.80",
                "optimalTime": "14:45"
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.occupied_status, "NO CAR PRESENT");
        assert_eq!(snapshot.space_status, "SPACE VACANT");
        assert_eq!(snapshot.system_status, SystemStatus::Online);
        assert_eq!(snapshot.optimal_time, "14:45");
    }

    #[test]
    fn invalid_json_is_a_parse_failure() {
        let err = parse_snapshot("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::Parse { .. }));
    }

    #[test]
    fn non_object_json_is_a_parse_failure() {
        let err = parse_snapshot(r#"["Online"]"#).unwrap_err();
        assert!(matches!(err, FetchError::Parse { .. }));
    }
}
