//! Caller-supplied UI snapshot and the updater that applies model actions to it.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::reply::ActionPair;

/// Field name → value mapping in caller order.
///
/// Values are opaque: no type checks beyond the JSON shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UiContext(Map<String, Value>);

impl UiContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Overwrites known fields from `actions`, in order. Unknown fields are
    /// dropped silently. Returns how many pairs were applied.
    pub fn apply(&mut self, actions: &[ActionPair]) -> usize {
        let mut applied = 0;
        for pair in actions {
            if let Some(slot) = self.0.get_mut(pair.field()) {
                *slot = pair.value().clone();
                applied += 1;
            }
        }
        applied
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for UiContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl fmt::Display for UiContext {
    /// Compact JSON, fields in mapping order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

/// Returns `ctx` with `actions` applied; see [`UiContext::apply`].
pub fn apply_actions(actions: &[ActionPair], ctx: &UiContext) -> UiContext {
    let mut next = ctx.clone();
    next.apply(actions);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> UiContext {
        [("employee", "250"), ("company_name", "sathya")]
            .into_iter()
            .collect()
    }

    #[test]
    fn overwrites_known_fields_only() {
        let actions = vec![
            ActionPair::new("employee", "150"),
            ActionPair::new("unknown_field", "x"),
        ];
        let out = apply_actions(&actions, &base());

        assert_eq!(out.get("employee"), Some(&json!("150")));
        assert_eq!(out.get("company_name"), Some(&json!("sathya")));
        assert!(!out.contains("unknown_field"));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn last_pair_for_a_field_wins() {
        let actions = vec![
            ActionPair::new("employee", "1"),
            ActionPair::new("employee", "2"),
            ActionPair::new("employee", "3"),
        ];
        let mut ctx = base();
        assert_eq!(ctx.apply(&actions), 3);
        assert_eq!(ctx.get("employee"), Some(&json!("3")));
    }

    #[test]
    fn key_set_never_grows() {
        let before: Vec<String> = base().keys().map(str::to_string).collect();
        let actions: Vec<ActionPair> = (0..20)
            .map(|i| ActionPair::new(format!("f{i}"), i))
            .chain([ActionPair::new("company_name", json!(null))])
            .collect();
        let out = apply_actions(&actions, &base());
        let after: Vec<&str> = out.keys().collect();
        assert_eq!(after, before);
        assert_eq!(out.get("company_name"), Some(&Value::Null));
    }

    #[test]
    fn input_context_is_untouched() {
        let ctx = base();
        let _ = apply_actions(&[ActionPair::new("employee", "9")], &ctx);
        assert_eq!(ctx.get("employee"), Some(&json!("250")));
    }

    #[test]
    fn renders_in_caller_order() {
        let ctx: UiContext = serde_json::from_str(r#"{"zeta":1,"alpha":"a"}"#).unwrap();
        assert_eq!(ctx.to_string(), r#"{"zeta":1,"alpha":"a"}"#);
    }
}
