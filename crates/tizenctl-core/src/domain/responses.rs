//! Response models for the companion HTTP management API.
//!
//! The TV's `/api/v2` endpoints return loosely structured JSON whose exact
//! shape varies between firmware generations (extra fields appear and
//! disappear; `device.PowerState` is absent on some models when the TV is
//! in standby-networking mode).  Each model is therefore built by explicit
//! per-field extraction from a [`serde_json::Value`]: a missing or mistyped
//! field produces a [`ResponseShapeError`] naming the field, never a panic
//! and never a silently defaulted value.

use serde_json::Value;
use thiserror::Error;

/// Error type for HTTP response body extraction.
#[derive(Debug, Error)]
pub enum ResponseShapeError {
    /// An expected field is absent from the response body.
    #[error("response missing field `{0}`")]
    MissingField(&'static str),

    /// The field exists but is not the expected JSON type.
    #[error("response field `{field}` is not a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

/// Device identity and power state, from `GET /api/v2/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Stable device identifier, e.g. `"uuid:..."`.
    pub id: String,
    /// Friendly device name as shown on the network, e.g. `"[TV] Living Room"`.
    pub name: String,
    /// Firmware API version string.
    pub version: String,
    /// `"on"` or `"standby"`, from the nested `device.PowerState` field.
    pub power_state: String,
}

impl DeviceInfo {
    /// Extracts a `DeviceInfo` from the `GET /` response body.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseShapeError`] naming the first absent or mistyped
    /// field.
    pub fn from_json(body: &Value) -> Result<Self, ResponseShapeError> {
        let device = body
            .get("device")
            .ok_or(ResponseShapeError::MissingField("device"))?;

        Ok(Self {
            id: required_str(body, "id")?,
            name: required_str(body, "name")?,
            version: required_str(body, "version")?,
            power_state: required_str_named(device, "PowerState", "device.PowerState")?,
        })
    }
}

/// Installed-application status, from `GET /api/v2/applications/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    /// Application identifier, e.g. `"111299001912"` (YouTube).
    pub id: String,
    /// Display name of the application.
    pub name: String,
    /// Whether the application is currently running.
    pub running: bool,
    /// Application version string.
    pub version: String,
    /// Whether the application is in the foreground.
    pub visible: bool,
}

impl AppInfo {
    /// Extracts an `AppInfo` from the application status response body.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseShapeError`] naming the first absent or mistyped
    /// field.
    pub fn from_json(body: &Value) -> Result<Self, ResponseShapeError> {
        Ok(Self {
            id: required_str(body, "id")?,
            name: required_str(body, "name")?,
            running: required_bool(body, "running")?,
            version: required_str(body, "version")?,
            visible: required_bool(body, "visible")?,
        })
    }
}

// ── Field extraction helpers ──────────────────────────────────────────────────

fn required_str(value: &Value, field: &'static str) -> Result<String, ResponseShapeError> {
    required_str_named(value, field, field)
}

/// Like [`required_str`] but reports `reported` in errors, so nested lookups
/// can name their full path (e.g. `device.PowerState`).
fn required_str_named(
    value: &Value,
    field: &'static str,
    reported: &'static str,
) -> Result<String, ResponseShapeError> {
    let v = value
        .get(field)
        .ok_or(ResponseShapeError::MissingField(reported))?;
    v.as_str()
        .map(str::to_owned)
        .ok_or(ResponseShapeError::WrongType {
            field: reported,
            expected: "string",
        })
}

fn required_bool(value: &Value, field: &'static str) -> Result<bool, ResponseShapeError> {
    let v = value
        .get(field)
        .ok_or(ResponseShapeError::MissingField(field))?;
    v.as_bool().ok_or(ResponseShapeError::WrongType {
        field,
        expected: "boolean",
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── DeviceInfo extraction ─────────────────────────────────────────────────

    #[test]
    fn test_device_info_extracts_all_fields() {
        // Arrange: a trimmed-down real response body
        let body = json!({
            "id": "uuid:df0296b2",
            "name": "[TV] Living Room",
            "version": "2.0.25",
            "device": {
                "PowerState": "on",
                "modelName": "QE55Q80"
            },
            "isSupport": "{\"DMP_available\":\"true\"}"
        });

        // Act
        let info = DeviceInfo::from_json(&body).unwrap();

        // Assert
        assert_eq!(info.id, "uuid:df0296b2");
        assert_eq!(info.name, "[TV] Living Room");
        assert_eq!(info.version, "2.0.25");
        assert_eq!(info.power_state, "on");
    }

    #[test]
    fn test_device_info_missing_power_state_names_nested_path() {
        let body = json!({
            "id": "uuid:x",
            "name": "tv",
            "version": "1.0",
            "device": {}
        });

        let err = DeviceInfo::from_json(&body).unwrap_err();
        assert!(matches!(
            err,
            ResponseShapeError::MissingField("device.PowerState")
        ));
    }

    #[test]
    fn test_device_info_missing_device_object_is_rejected() {
        let body = json!({"id": "uuid:x", "name": "tv", "version": "1.0"});
        let err = DeviceInfo::from_json(&body).unwrap_err();
        assert!(matches!(err, ResponseShapeError::MissingField("device")));
    }

    #[test]
    fn test_device_info_numeric_id_is_rejected() {
        let body = json!({
            "id": 7,
            "name": "tv",
            "version": "1.0",
            "device": {"PowerState": "on"}
        });
        let err = DeviceInfo::from_json(&body).unwrap_err();
        assert!(matches!(
            err,
            ResponseShapeError::WrongType {
                field: "id",
                expected: "string"
            }
        ));
    }

    // ── AppInfo extraction ────────────────────────────────────────────────────

    #[test]
    fn test_app_info_extracts_all_fields() {
        let body = json!({
            "id": "111299001912",
            "name": "YouTube",
            "running": true,
            "version": "3.4.1",
            "visible": false
        });

        let info = AppInfo::from_json(&body).unwrap();

        assert_eq!(info.id, "111299001912");
        assert_eq!(info.name, "YouTube");
        assert!(info.running);
        assert_eq!(info.version, "3.4.1");
        assert!(!info.visible);
    }

    #[test]
    fn test_app_info_missing_running_is_rejected() {
        let body = json!({
            "id": "111299001912",
            "name": "YouTube",
            "version": "3.4.1",
            "visible": true
        });
        let err = AppInfo::from_json(&body).unwrap_err();
        assert!(matches!(err, ResponseShapeError::MissingField("running")));
    }

    #[test]
    fn test_app_info_string_running_is_rejected() {
        // Some firmwares stringify booleans elsewhere; here it must be a real bool.
        let body = json!({
            "id": "x",
            "name": "y",
            "running": "true",
            "version": "1",
            "visible": false
        });
        let err = AppInfo::from_json(&body).unwrap_err();
        assert!(matches!(
            err,
            ResponseShapeError::WrongType {
                field: "running",
                expected: "boolean"
            }
        ));
    }
}
