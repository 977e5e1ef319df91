//! YAML loading and scalar type inference.
//!
//! [`yaml_type`] guesses what a bare token means the way a YAML reader
//! would. Query predicates like `[name:2]` run their right-hand side through
//! it, so `2` there means the number, and `'2'` means the string.
//!
//! ```
//! use nub::yaml::yaml_type;
//! use nub::Value;
//!
//! assert_eq!(yaml_type("2"), Value::Float(2.0));
//! assert_eq!(yaml_type("'2'"), Value::from("2"));
//! assert_eq!(yaml_type("true"), Value::Bool(true));
//! assert_eq!(yaml_type("two"), Value::from("two"));
//! ```

use crate::error::Error;
use crate::query::KeyVal;
use crate::slice::StrSlice;
use crate::value::Value;

/// Infer the scalar a raw token stands for.
///
/// Matching single or double quotes make a string, with the quotes removed.
/// `true` and `false` are booleans. Anything that parses as a float is a
/// float. Everything else is the token itself, as a string.
pub fn yaml_type(raw: &str) -> Value {
    if let Some(inner) = unquote(raw) {
        return Value::from(inner);
    }
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => match raw.parse::<f64>() {
            Ok(f) => Value::Float(f),
            Err(_) => Value::from(raw),
        },
    }
}

fn unquote(raw: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|q| {
        match raw.len() >= 2 && raw.starts_with(q) && raw.ends_with(q) {
            true => Some(&raw[1..raw.len() - 1]),
            false => None,
        }
    })
}

/// Decode a YAML document.
///
/// An empty document is `Value::Null`.
pub fn load(text: &str) -> Result<Value, Error> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_yml::from_str(text)?)
}

impl StrSlice {
    /// First element as is, second element through [`yaml_type`].
    ///
    /// Missing elements are an empty key or a null value.
    ///
    /// ```
    /// use nub::{Str, Value};
    ///
    /// let (k, v) = Str::from("retries=3").split("=").yaml_pair();
    /// assert_eq!(k, "retries");
    /// assert_eq!(v, Value::Float(3.0));
    /// ```
    pub fn yaml_pair(&self) -> (String, Value) {
        let key = self.first().cloned().unwrap_or_default();
        let val = self.at(1).map_or(Value::Null, |v| yaml_type(v));
        (key, val)
    }

    /// [`StrSlice::yaml_pair`] as a [`KeyVal`].
    pub fn yaml_key_val(&self) -> KeyVal {
        let (key, val) = self.yaml_pair();
        KeyVal::new(key, val)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::str::Str;
    use indoc::indoc;

    #[test]
    fn infer_quoted() {
        assert_eq!(yaml_type("\"2\""), Value::from("2"));
        assert_eq!(yaml_type("'two words'"), Value::from("two words"));
        assert_eq!(yaml_type("''"), Value::from(""));
    }

    #[test]
    fn infer_mismatched_quotes() {
        assert_eq!(yaml_type("'2\""), Value::from("'2\""));
        assert_eq!(yaml_type("'"), Value::from("'"));
    }

    #[test]
    fn infer_bool() {
        assert_eq!(yaml_type("true"), Value::Bool(true));
        assert_eq!(yaml_type("false"), Value::Bool(false));
        assert_eq!(yaml_type("True"), Value::from("True"));
    }

    #[test]
    fn infer_number() {
        assert_eq!(yaml_type("2"), Value::Float(2.0));
        assert_eq!(yaml_type("-1.5"), Value::Float(-1.5));
        assert!(yaml_type("2").loosely_eq(&Value::Int(2)));
    }

    #[test]
    fn infer_fallback() {
        assert_eq!(yaml_type("two"), Value::from("two"));
        assert_eq!(yaml_type(""), Value::from(""));
    }

    #[test]
    fn load_nested() -> Result<(), Error> {
        let v = load(indoc! {"
            1:
              2: two
            foo:
              - name: 1
              - name: 2
        "})?;
        assert_eq!(v.kind(), crate::Kind::Map);
        let one = v.as_map().and_then(|m| m.get("1")).cloned();
        assert_eq!(one.map(|o| o.to_string()), Some("{2: two}".to_string()));
        Ok(())
    }

    #[test]
    fn load_empty() -> Result<(), Error> {
        assert_eq!(load("")?, Value::Null);
        assert_eq!(load("  \n")?, Value::Null);
        Ok(())
    }

    #[test]
    fn load_invalid() {
        assert!(matches!(load("a: [1, 2"), Err(Error::Yaml(_))));
    }

    #[test]
    fn yaml_pair() {
        assert_eq!(
            Str::from("foo=bar").split("=").yaml_pair(),
            ("foo".to_string(), Value::from("bar"))
        );
        assert_eq!(
            Str::from("=bar").split("=").yaml_pair(),
            ("".to_string(), Value::from("bar"))
        );
        assert_eq!(
            Str::from("bar=").split("=").yaml_pair(),
            ("bar".to_string(), Value::from(""))
        );
        assert_eq!(
            Str::from("").split("=").yaml_pair(),
            ("".to_string(), Value::Null)
        );
    }

    #[test]
    fn yaml_key_val() {
        let kv = Str::from("on=true").split("=").yaml_key_val();
        assert_eq!(kv.key, Value::from("on"));
        assert_eq!(kv.val, Value::Bool(true));
    }
}
