//! Message formatting and coordinate rendering.
//!
//! Downstream tooling matches these strings, so every helper here is
//! positionally stable: an unset coordinate part is rendered as
//! [`PLACEHOLDER`], never dropped.

/// Rendered in place of a coordinate part that is absent or blank.
pub const PLACEHOLDER: &str = "null";

/// `true` when a value is absent or contains only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// The value itself, or [`PLACEHOLDER`] when it is blank.
pub fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => PLACEHOLDER,
    }
}

/// Joins coordinate parts with `:`, substituting [`PLACEHOLDER`] for blanks.
///
/// ```
/// use pomcheck::format::coordinate;
/// assert_eq!(coordinate(&[Some("groupId"), None, Some("jar")]), "groupId:null:jar");
/// ```
pub fn coordinate(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .map(|p| or_placeholder(*p))
        .collect::<Vec<_>>()
        .join(":")
}

/// `prefix[key]`, the path segment addressing one keyed list element.
pub fn keyed(prefix: &str, key: &str) -> String {
    format!("{}[{}]", prefix, key)
}

/// Builds a violation message: `'<field>'`, then ` for <hint>` when the
/// violation belongs to a coordinate, then the message text.
pub fn violation(field: &str, hint: Option<&str>, message: &str) -> String {
    let mut buffer = String::with_capacity(field.len() + message.len() + 32);
    buffer.push('\'');
    buffer.push_str(field);
    buffer.push('\'');
    if let Some(hint) = hint {
        buffer.push_str(" for ");
        buffer.push_str(hint);
    }
    buffer.push(' ');
    buffer.push_str(message);
    buffer
}

/// Renders allowed values the way enum violations cite them: `[a, b, c]`.
pub fn value_list(values: &[&str]) -> String {
    format!("[{}]", values.join(", "))
}
