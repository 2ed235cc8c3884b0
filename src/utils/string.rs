// Tue Jan 13 2026 - Alex

pub struct StringUtils;

impl StringUtils {
    /// Builds a radare2 flag name: `prefix` followed by the characters of `s`
    /// that are ASCII alphanumeric or `_`. Everything else is dropped.
    pub fn flag_name(prefix: &str, s: &str) -> String {
        let mut result = String::with_capacity(prefix.len() + s.len());
        result.push_str(prefix);
        result.extend(s.chars().filter(|c| Self::is_flag_char(*c)));
        result
    }

    pub fn is_flag_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    /// Strips a leading `0x`/`0X` so callers can re-prefix without doubling it.
    pub fn strip_hex_prefix(s: &str) -> &str {
        s.strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s)
    }
}

pub fn flag_name(prefix: &str, s: &str) -> String {
    StringUtils::flag_name(prefix, s)
}

pub fn strip_hex_prefix(s: &str) -> &str {
    StringUtils::strip_hex_prefix(s)
}
