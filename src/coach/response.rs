use serde_json::Value;
use tracing::warn;

use crate::coach::requests::PlanKind;
use crate::error::{Result, SnapError};

/// Parse a completion reply into a plan document.
///
/// The reply must be a JSON object carrying the kind's list (`meals`,
/// `sessions` or `categories`) as an array. Anything else is a
/// `MalformedResponse`, which callers may retry.
pub fn parse_plan(kind: PlanKind, content: &str) -> Result<Value> {
    let trimmed = strip_code_fence(content.trim());
    if trimmed.is_empty() {
        warn!(kind = kind.as_str(), "empty completion reply");
        return Err(SnapError::MalformedResponse("empty reply".to_string()));
    }

    let value: Value = serde_json::from_str(trimmed).map_err(|e| {
        warn!(kind = kind.as_str(), error = %e, "completion reply is not JSON");
        SnapError::MalformedResponse(e.to_string())
    })?;

    let Some(object) = value.as_object() else {
        return Err(SnapError::MalformedResponse(
            "reply is not a JSON object".to_string(),
        ));
    };

    if !object.get(kind.list_key()).is_some_and(Value::is_array) {
        warn!(kind = kind.as_str(), key = kind.list_key(), "completion reply missing list");
        return Err(SnapError::MalformedResponse(format!(
            "missing '{}' array",
            kind.list_key()
        )));
    }

    Ok(value)
}

/// Drop a surrounding Markdown code fence, which some models add.
fn strip_code_fence(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("```") else {
        return content;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
