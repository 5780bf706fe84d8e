//! Structured model output: `{ "answer": string, "action": [[field, value], ...] | null }`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CopilotError;

/// One proposed UI change, serialized as a two-element array `[field, value]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPair(pub String, pub Value);

impl ActionPair {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self(field.into(), value.into())
    }

    pub fn field(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> &Value {
        &self.1
    }
}

/// Validated reply of one turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredReply {
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Vec<ActionPair>>,
}

impl StructuredReply {
    pub fn answer_only(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            action: None,
        }
    }

    /// Proposed actions, empty when the model proposed none.
    pub fn actions(&self) -> &[ActionPair] {
        self.action.as_deref().unwrap_or_default()
    }
}

/// Parses and validates raw completion text against the reply shape.
///
/// A surrounding Markdown code fence is tolerated. Unknown top-level keys
/// are ignored.
///
/// # Errors
/// [`CopilotError::MalformedReply`] when the text is not a JSON object,
/// `answer` is missing or not a string, or `action` is neither null nor a
/// list of `[string, scalar]` pairs.
pub fn parse_reply(raw: &str) -> Result<StructuredReply, CopilotError> {
    let body = strip_code_fence(raw);
    let value: Value = serde_json::from_str(body)
        .map_err(|e| CopilotError::MalformedReply(format!("not valid JSON: {e}")))?;

    let Value::Object(mut obj) = value else {
        return Err(malformed("expected a JSON object"));
    };

    let answer = match obj.remove("answer") {
        Some(Value::String(s)) => s,
        Some(_) => return Err(malformed("`answer` must be a string")),
        None => return Err(malformed("missing `answer`")),
    };

    let action = match obj.remove("action") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| parse_pair(i, item))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Some(_) => return Err(malformed("`action` must be a list of [field, value] pairs")),
    };

    Ok(StructuredReply { answer, action })
}

fn parse_pair(index: usize, item: Value) -> Result<ActionPair, CopilotError> {
    let Value::Array(mut pair) = item else {
        return Err(malformed(format!("action[{index}] is not a [field, value] pair")));
    };
    if pair.len() != 2 {
        return Err(malformed(format!(
            "action[{index}] has {} elements, expected 2",
            pair.len()
        )));
    }
    let value = pair.pop().unwrap_or_default();
    let field = match pair.pop() {
        Some(Value::String(f)) => f,
        _ => return Err(malformed(format!("action[{index}] field must be a string"))),
    };
    if value.is_object() || value.is_array() {
        return Err(malformed(format!("action[{index}] value must be a scalar")));
    }
    Ok(ActionPair(field, value))
}

fn strip_code_fence(raw: &str) -> &str {
    let t = raw.trim();
    let Some(rest) = t.strip_prefix("```") else {
        return t;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn malformed(msg: impl Into<String>) -> CopilotError {
    CopilotError::MalformedReply(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn answer_only() {
        let r = parse_reply(r#"{"answer":"hello"}"#).unwrap();
        assert_eq!(r, StructuredReply::answer_only("hello"));
        assert!(r.actions().is_empty());
    }

    #[test]
    fn null_action_is_none() {
        let r = parse_reply(r#"{"answer":"a","action":null}"#).unwrap();
        assert_eq!(r.action, None);
    }

    #[test]
    fn pairs_are_kept_in_order() {
        let r = parse_reply(
            r#"{"answer":"done","action":[["employee","150"],["rate",0.5],["employee","160"]]}"#,
        )
        .unwrap();
        assert_eq!(
            r.actions(),
            &[
                ActionPair::new("employee", "150"),
                ActionPair::new("rate", 0.5),
                ActionPair::new("employee", "160"),
            ]
        );
    }

    #[test]
    fn fenced_json_is_accepted() {
        let r = parse_reply("```json\n{\"answer\":\"x\"}\n```").unwrap();
        assert_eq!(r.answer, "x");
    }

    #[test]
    fn extra_keys_are_ignored() {
        let r = parse_reply(r#"{"answer":"x","confidence":0.9}"#).unwrap();
        assert_eq!(r.answer, "x");
    }

    #[test]
    fn rejects_shape_violations() {
        for raw in [
            "plain text",
            "[1,2]",
            r#"{"action":[]}"#,
            r#"{"answer":42}"#,
            r#"{"answer":"x","action":"employee=1"}"#,
            r#"{"answer":"x","action":[["employee"]]}"#,
            r#"{"answer":"x","action":[["a","b","c"]]}"#,
            r#"{"answer":"x","action":[[1,"b"]]}"#,
            r#"{"answer":"x","action":[["a",{"nested":true}]]}"#,
            r#"{"answer":"x","action":["a"]}"#,
        ] {
            assert!(
                matches!(parse_reply(raw), Err(CopilotError::MalformedReply(_))),
                "accepted {raw}"
            );
        }
    }

    #[test]
    fn serializes_without_absent_action() {
        let v = serde_json::to_value(StructuredReply::answer_only("mocked response")).unwrap();
        assert_eq!(v, json!({"answer": "mocked response"}));

        let v = serde_json::to_value(StructuredReply {
            answer: "ok".into(),
            action: Some(vec![ActionPair::new("employee", "150")]),
        })
        .unwrap();
        assert_eq!(v, json!({"answer": "ok", "action": [["employee", "150"]]}));
    }
}
