//! `serde_json::Value` key coercion.
//!
//! JSON values coerce the same way dynamic host values do. Inside arrays,
//! `null` elements contribute an empty segment (`[1, null, 2]` becomes
//! `"1,,2"`), while a top-level `null` becomes `"null"`.

use serde_json::{Map, Number, Value};

use super::{OBJECT_KEY, ToKeyString, format_f64};

impl ToKeyString for Value {
    fn to_key_string(&self) -> String {
        match self {
            Value::Null => "null".to_owned(),
            Value::Bool(flag) => flag.to_key_string(),
            Value::Number(number) => number.to_key_string(),
            Value::String(text) => text.clone(),
            Value::Array(items) => items
                .iter()
                .map(ToKeyString::to_element_key_string)
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => OBJECT_KEY.to_owned(),
        }
    }

    fn to_element_key_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            other => other.to_key_string(),
        }
    }
}

impl ToKeyString for Number {
    fn to_key_string(&self) -> String {
        if let Some(int) = self.as_i64() {
            int.to_string()
        } else if let Some(uint) = self.as_u64() {
            uint.to_string()
        } else {
            self.as_f64().map_or_else(|| self.to_string(), format_f64)
        }
    }
}

impl ToKeyString for Map<String, Value> {
    fn to_key_string(&self) -> String {
        OBJECT_KEY.to_owned()
    }
}
