// ── Diagnostic projection ──
//
// Human-readable rendering for logs and test failures. Records list only
// their set fields, in declaration order: `{name: value,other: value}`.
// Lists render as `[a, b]`, keyed collections as `{k=v, k2=v2}`.

use std::fmt;

use crate::keyed::KeyedCollection;
use crate::scalar::{Double, Timestamp};

/// A value that knows how to render itself inside a record projection.
pub trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Adapter that lets any [`Render`] value be used with `format!`.
pub struct Rendered<'a, T: ?Sized>(pub &'a T);

impl<T: Render + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

impl Render for String {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

macro_rules! render_via_display {
    ($($ty:ty),+) => {
        $(
            impl Render for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

render_via_display!(bool, i32, i64, Timestamp, Double);

impl Render for serde_json::Value {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(text) => f.write_str(text),
            other => fmt::Display::fmt(other, f),
        }
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<V: Render> Render for KeyedCollection<V> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}=")?;
            value.render(f)?;
        }
        f.write_str("}")
    }
}

// ── Record writer ───────────────────────────────────────────────────

/// Writes the braces and separators of a record projection.
pub(crate) struct FieldWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    empty: bool,
}

impl<'a, 'b> FieldWriter<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, empty: true })
    }

    /// Write `name: value` if the field is set; unset fields produce nothing.
    pub(crate) fn field<T: Render + ?Sized>(
        &mut self,
        name: &str,
        value: Option<&T>,
    ) -> fmt::Result {
        let Some(value) = value else {
            return Ok(());
        };
        if !self.empty {
            self.f.write_str(",")?;
        }
        self.empty = false;
        write!(self.f, "{name}: ")?;
        value.render(self.f)
    }

    pub(crate) fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}
