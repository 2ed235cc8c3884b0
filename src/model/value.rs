// Tue Jan 13 2026 - Alex

use crate::utils::string::strip_hex_prefix;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use std::fmt;

/// An address as OOAnalyzer writes it. Kept as text so nothing is lost to
/// integer conversion; bare integers are accepted and shown in hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum HexAddress {
    Text(String),
    Number(u64),
}

impl HexAddress {
    /// Address digits without any `0x` prefix.
    pub fn digits(&self) -> String {
        match self {
            HexAddress::Text(s) => strip_hex_prefix(s.trim()).to_string(),
            HexAddress::Number(n) => format!("{:x}", n),
        }
    }
}

impl fmt::Display for HexAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.digits())
    }
}

/// A scalar field (`vfptr`, `offset`, `type`) that may come as a string or a
/// number. Numbers keep the text serde_json parsed them from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(Number),
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Text(String::new())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Field deserializer that turns a value of the wrong shape into `None`
/// instead of failing the whole document.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// List deserializer that keeps the items that parse and drops the rest.
/// Anything other than an array becomes `None`.
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        other => {
            log::debug!("expected a list, found {}", other);
            return Ok(None);
        }
    };

    let total = items.len();
    let parsed: Vec<T> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if parsed.len() < total {
        log::debug!("dropped {} unreadable list items", total - parsed.len());
    }
    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "lenient")]
        addr: Option<HexAddress>,
        #[serde(default, deserialize_with = "lenient_list")]
        list: Option<Vec<u32>>,
    }

    #[test]
    fn test_text_address_is_kept_verbatim() {
        let addr: HexAddress = serde_json::from_str("\"00401a2B\"").unwrap();
        assert_eq!(addr.to_string(), "0x00401a2B");
    }

    #[test]
    fn test_prefixed_address_is_not_doubled() {
        let addr: HexAddress = serde_json::from_str("\"0x401000\"").unwrap();
        assert_eq!(addr.to_string(), "0x401000");
    }

    #[test]
    fn test_numeric_address_renders_hex() {
        let addr: HexAddress = serde_json::from_str("4198400").unwrap();
        assert_eq!(addr.to_string(), "0x401000");
    }

    #[test]
    fn test_scalar_display() {
        let text: Scalar = serde_json::from_str("\"8\"").unwrap();
        let num: Scalar = serde_json::from_str("16").unwrap();
        let big: Scalar = serde_json::from_str("18446744073709551615").unwrap();
        let float: Scalar = serde_json::from_str("1.5").unwrap();
        assert_eq!(text.to_string(), "8");
        assert_eq!(num.to_string(), "16");
        assert_eq!(big.to_string(), "18446744073709551615");
        assert_eq!(float.to_string(), "1.5");
    }

    #[test]
    fn test_lenient_field() {
        let h: Holder = serde_json::from_str(r#"{"addr": true}"#).unwrap();
        assert!(h.addr.is_none());
        let h: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert!(h.addr.is_none());
        let h: Holder = serde_json::from_str(r#"{"addr": "401000"}"#).unwrap();
        assert_eq!(h.addr.map(|a| a.to_string()).as_deref(), Some("0x401000"));
    }

    #[test]
    fn test_lenient_list() {
        let h: Holder = serde_json::from_str(r#"{"list": [1, "x", 3, null]}"#).unwrap();
        assert_eq!(h.list, Some(vec![1, 3]));
        let h: Holder = serde_json::from_str(r#"{"list": null}"#).unwrap();
        assert!(h.list.is_none());
        let h: Holder = serde_json::from_str(r#"{"list": {"a": 1}}"#).unwrap();
        assert!(h.list.is_none());
    }
}
