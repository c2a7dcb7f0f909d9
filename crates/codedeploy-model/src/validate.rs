// ── Advisory constraint validation ──
//
// Shapes document server-side constraints (length bounds, collection
// sizes, required members). Building a shape never checks them; callers
// opt in through `Validate::validate()`, and the client applies the
// configured `ValidationMode` before sending.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::keyed::KeyedCollection;
use crate::scalar::{Double, Timestamp};

// ── Violations ──────────────────────────────────────────────────────

/// A single violated constraint, located by its JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Every violation found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if some violation is located at `path`.
    pub fn has_path(&self, path: &str) -> bool {
        self.0.iter().any(|v| v.path == path)
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

// ── Validate ────────────────────────────────────────────────────────

/// Checks documented constraints on a shape and everything it contains.
pub trait Validate {
    /// Push every violation under `path` into `out`.
    fn collect_violations(&self, path: &str, out: &mut Vec<Violation>) {
        let _ = (path, out);
    }

    fn validate(&self) -> Result<(), Violations> {
        let mut out = Vec::new();
        self.collect_violations("", &mut out);
        if out.is_empty() {
            Ok(())
        } else {
            Err(Violations(out))
        }
    }
}

impl Validate for String {}
impl Validate for bool {}
impl Validate for i32 {}
impl Validate for i64 {}
impl Validate for Timestamp {}
impl Validate for Double {}

impl<T: Validate> Validate for Vec<T> {
    fn collect_violations(&self, path: &str, out: &mut Vec<Violation>) {
        for (i, item) in self.iter().enumerate() {
            item.collect_violations(&format!("{path}[{i}]"), out);
        }
    }
}

impl<V: Validate> Validate for KeyedCollection<V> {
    fn collect_violations(&self, path: &str, out: &mut Vec<Violation>) {
        for (key, value) in self {
            value.collect_violations(&join_path(path, key), out);
        }
    }
}

// ── Rule checks (used by the shape macros) ──────────────────────────

pub(crate) fn join_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_owned()
    } else {
        format!("{parent}.{field}")
    }
}

pub(crate) fn check_required(is_set: bool, path: &str, out: &mut Vec<Violation>) {
    if !is_set {
        out.push(Violation {
            path: path.to_owned(),
            message: "is required".into(),
        });
    }
}

pub(crate) fn check_length(
    value: Option<&str>,
    min: usize,
    max: usize,
    path: &str,
    out: &mut Vec<Violation>,
) {
    let Some(value) = value else { return };
    let len = value.chars().count();
    if len < min || len > max {
        out.push(Violation {
            path: path.to_owned(),
            message: format!("length {len} is outside {min}..={max}"),
        });
    }
}

pub(crate) fn check_items(
    len: Option<usize>,
    min: usize,
    max: usize,
    path: &str,
    out: &mut Vec<Violation>,
) {
    let Some(len) = len else { return };
    if len < min || len > max {
        out.push(Violation {
            path: path.to_owned(),
            message: format!("{len} items is outside {min}..={max}"),
        });
    }
}

pub(crate) fn check_range(
    value: Option<i64>,
    min: i64,
    max: i64,
    path: &str,
    out: &mut Vec<Violation>,
) {
    let Some(value) = value else { return };
    if value < min || value > max {
        out.push(Violation {
            path: path.to_owned(),
            message: format!("value {value} is outside {min}..={max}"),
        });
    }
}

// ── ValidationMode ──────────────────────────────────────────────────

/// What a client does with constraint violations before sending a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Send without checking; the service is the only judge.
    Off,
    /// Log violations and send anyway.
    #[default]
    Warn,
    /// Refuse to send a request with violations.
    Strict,
}

impl ValidationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "warn" => Ok(Self::Warn),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "expected 'off', 'warn', or 'strict', got '{other}'"
            )),
        }
    }
}
