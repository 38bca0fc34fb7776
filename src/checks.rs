//! Field-level checks shared by the raw and effective rule sets.

use regex::Regex;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use std::sync::LazyLock;

use crate::enums::ValidationLevel;
use crate::error::{DiagnosticSink, Severity};
use crate::format::{self, is_blank};
use crate::policy::{self, Check};

static ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\-.]+$").unwrap());

static EXPRESSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{.+?\}").unwrap());

/// Characters that cannot appear in anything that ends up in a file name.
pub const ILLEGAL_FS_CHARS: &str = "\\/:\"<>|?*";

pub const ILLEGAL_VERSION_CHARS: &str = ILLEGAL_FS_CHARS;

pub const ILLEGAL_REPO_ID_CHARS: &str = ILLEGAL_FS_CHARS;

/// `true` when `value` matches the id syntax `[A-Za-z0-9_\-.]+`.
pub fn is_valid_id(value: &str) -> bool {
    ID_RE.is_match(value)
}

/// `true` when `value` still contains an unresolved `${...}` expression.
pub fn has_expression(value: &str) -> bool {
    value.contains("${") && EXPRESSION_RE.is_match(value)
}

/// `true` for absolute paths in either Unix (`/opt/x`) or Windows
/// (`C:\x`, `\\host\share`) notation. Purely lexical; the filesystem is
/// never consulted.
pub fn is_absolute_path(path: &str) -> bool {
    let bytes = path.as_bytes();
    if path.starts_with('/') || path.starts_with('\\') {
        return true;
    }
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] == b'\\' || bytes[2] == b'/')
}

/// `true` when `version` is either a plain version or a well-formed range
/// such as `[1.0,2.0)`, `(,1.0],[1.2,)` or `[1.5]`.
pub fn is_well_formed_version(version: &str) -> bool {
    if has_expression(version) {
        return false;
    }
    if !version.contains(['[', ']', '(', ')']) {
        return true;
    }
    let mut rest = version.trim();
    while !rest.is_empty() {
        let Some(close) = rest.find([']', ')']) else {
            return false;
        };
        let open = rest.as_bytes()[0];
        if !matches!(open, b'[' | b'(') {
            return false;
        }
        let inner = &rest[1..close];
        let upper_inclusive = rest.as_bytes()[close] == b']';
        if inner.contains(['[', '(']) {
            return false;
        }
        match inner.split_once(',') {
            None => {
                // exact pin: [1.0]
                if open != b'[' || !upper_inclusive || inner.trim().is_empty() {
                    return false;
                }
            }
            Some((lower, upper)) => {
                let (lower, upper) = (lower.trim(), upper.trim());
                if upper.contains(',')
                    || (lower.is_empty() && upper.is_empty())
                    || (lower.is_empty() && open != b'(')
                    || (upper.is_empty() && upper_inclusive)
                {
                    return false;
                }
            }
        }
        rest = rest[close + 1..].trim_start();
        if let Some(next) = rest.strip_prefix(',') {
            rest = next.trim_start();
            if rest.is_empty() {
                return false;
            }
        } else if !rest.is_empty() {
            return false;
        }
    }
    true
}

/// Reporting context handed to every rule.
///
/// Rules describe a violation by its [`Check`]; the severity policy decides
/// whether and how it reaches the sink.
pub(crate) struct Problems<'a> {
    level: ValidationLevel,
    sink: &'a mut dyn DiagnosticSink,
    tally: [usize; 3],
}

impl<'a> Problems<'a> {
    pub(crate) fn new(level: ValidationLevel, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            level,
            sink,
            tally: [0; 3],
        }
    }

    /// Number of diagnostics that reached the sink so far.
    pub(crate) fn recorded(&self) -> usize {
        self.tally.iter().sum()
    }

    pub(crate) fn count(&self, severity: Severity) -> usize {
        self.tally[severity as usize]
    }

    pub(crate) fn add(&mut self, check: Check, field: &str, hint: Option<&str>, message: &str) {
        if let Some(severity) = policy::severity(check, self.level) {
            self.sink
                .record(severity, format::violation(field, hint, message));
            self.tally[severity as usize] += 1;
        }
    }

    /// Reports `is missing.` when `value` is blank. Returns whether it was
    /// present.
    pub(crate) fn not_blank(
        &mut self,
        check: Check,
        field: &str,
        hint: Option<&str>,
        value: Option<&str>,
    ) -> bool {
        if is_blank(value) {
            self.add(check, field, hint, "is missing.");
            return false;
        }
        true
    }

    /// Presence, then id syntax.
    pub(crate) fn id(
        &mut self,
        check: Check,
        field: &str,
        hint: Option<&str>,
        value: Option<&str>,
    ) -> bool {
        if !self.not_blank(check, field, hint, value) {
            return false;
        }
        let value = value.unwrap_or_default();
        if is_valid_id(value) {
            return true;
        }
        self.add(
            check,
            field,
            hint,
            &format!("with value '{}' does not match a valid id pattern.", value),
        );
        false
    }

    /// A set value must be one of `allowed`. Blank values pass.
    pub(crate) fn one_of(
        &mut self,
        check: Check,
        field: &str,
        hint: Option<&str>,
        value: Option<&str>,
        allowed: &[&str],
    ) -> bool {
        let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
            return true;
        };
        if allowed.contains(&value) {
            return true;
        }
        self.add(
            check,
            field,
            hint,
            &format!(
                "must be one of {} but is '{}'.",
                format::value_list(allowed),
                value
            ),
        );
        false
    }

    /// A set value must read `true` or `false`. Unset values pass.
    pub(crate) fn boolean(
        &mut self,
        field: &str,
        hint: Option<&str>,
        value: Option<&str>,
    ) -> bool {
        match value {
            None | Some("true") | Some("false") => true,
            Some(other) => {
                self.add(
                    Check::BooleanValue,
                    field,
                    hint,
                    &format!("must be 'true' or 'false' but is '{}'.", other),
                );
                false
            }
        }
    }

    /// A set value must not contain any character of `banned`. Reports the
    /// last offending character.
    pub(crate) fn banned_characters(
        &mut self,
        check: Check,
        field: &str,
        hint: Option<&str>,
        value: Option<&str>,
        banned: &str,
    ) -> bool {
        let Some(found) = value.and_then(|v| v.chars().rev().find(|c| banned.contains(*c))) else {
            return true;
        };
        self.add(
            check,
            field,
            hint,
            &format!(
                "must not contain any of these characters {} but found {}",
                banned, found
            ),
        );
        false
    }

    /// A set value must not contain `${...}`.
    pub(crate) fn no_expression(
        &mut self,
        check: Check,
        field: &str,
        value: Option<&str>,
    ) -> bool {
        if value.is_some_and(has_expression) {
            self.add(
                check,
                field,
                None,
                "contains an expression but should be a constant.",
            );
            return false;
        }
        true
    }
}

/// Remembers where each key was first seen so later occurrences can be
/// reported as duplicates.
pub(crate) struct FirstSeen<K> {
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash> FirstSeen<K> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
        }
    }

    /// Records `key` at `position`. Returns the earlier position when `key`
    /// was already seen; the stored position is never overwritten.
    pub(crate) fn insert(&mut self, key: K, position: usize) -> Option<usize> {
        match self.index.entry(key) {
            Entry::Occupied(first) => Some(*first.get()),
            Entry::Vacant(slot) => {
                slot.insert(position);
                None
            }
        }
    }
}
