use serde_json::Value;

use crate::error::AppError;

/// Treats missing, empty and whitespace-only strings as absent.
///
/// Anything else is returned as-is; the value is not trimmed.
pub fn valid_string(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

pub fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    valid_string(value)
        .ok_or_else(|| AppError::BadRequest(format!("Missing required field: {field}")))
}

/// Coerces the loosely typed `is_marked` flag sent by the dashboard.
///
/// Absent and `null` mean unmarked. Booleans, integral numbers and numeric
/// strings are accepted as long as they end up 0 or 1.
pub fn coerce_flag(value: Option<&Value>) -> Result<i64, AppError> {
    let flag = match value {
        None | Some(Value::Null) => Some(0),
        Some(Value::Bool(b)) => Some(i64::from(*b)),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    };

    match flag {
        Some(flag @ (0 | 1)) => Ok(flag),
        _ => Err(AppError::BadRequest("is_marked must be 0 or 1".to_string())),
    }
}
