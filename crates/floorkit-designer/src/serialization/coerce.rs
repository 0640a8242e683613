//! Total field coercion for untrusted JSON.
//!
//! Every accessor returns a usable value for any input and counts the fields
//! it had to repair.

use serde_json::Value;

use crate::model::{new_id, ObjectId};

#[derive(Debug, Default)]
pub(crate) struct FieldCoercer {
    pub repaired: usize,
    pub generated_ids: usize,
}

impl FieldCoercer {
    /// Numbers pass through; numeric strings and booleans are converted;
    /// anything else yields `fallback`.
    pub fn number(&mut self, value: Option<&Value>, fallback: f64) -> f64 {
        match value {
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) if v.is_finite() => v,
                _ => self.repair(fallback),
            },
            Some(Value::String(s)) => match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => self.repair(v),
                _ => self.repair(fallback),
            },
            Some(Value::Bool(b)) => self.repair(if *b { 1.0 } else { 0.0 }),
            _ => self.repair(fallback),
        }
    }

    /// Strings pass through; numbers and `true` use their textual form;
    /// anything else yields an empty string.
    pub fn string(&mut self, value: Option<&Value>) -> String {
        match value {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => self.repair(n.to_string()),
            Some(Value::Bool(true)) => self.repair("true".to_string()),
            None | Some(Value::Null) => String::new(),
            Some(_) => self.repair(String::new()),
        }
    }

    /// A non-empty identifier, or a freshly generated one.
    pub fn id(&mut self, value: Option<&Value>) -> ObjectId {
        match self.optional_id(value) {
            Some(id) => id,
            None => {
                self.generated_ids += 1;
                new_id()
            }
        }
    }

    /// A non-empty identifier, or `None`.
    pub fn optional_id(&mut self, value: Option<&Value>) -> Option<ObjectId> {
        match value {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(self.repair(n.to_string())),
            _ => None,
        }
    }

    fn repair<T>(&mut self, value: T) -> T {
        self.repaired += 1;
        value
    }
}
