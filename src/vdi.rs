//! Passive descriptors pairing a label with a value that would have been
//! logged.
//!
//! Both types exist purely to satisfy call-site syntax: the payload is stored
//! by value and never invoked, dereferenced, or otherwise read, so `T` may be
//! a plain value, a reference, a raw pointer, a function pointer, or a
//! closure. Instances are built as temporaries, handed to [`log!`] or
//! [`set_all!`], and dropped.
//!
//! [`log!`]: crate::log
//! [`set_all!`]: crate::set_all

use std::borrow::Cow;

/// Describes a per-cell quantity the caller would have logged.
///
/// The label is borrowed from the caller in the common case; owned labels
/// (e.g. built with `format!`) are supported through [`Cow::Owned`]. `T` is
/// inferred from the constructor argument, so call sites never spell it out.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CellVdi<'a, T> {
    pub name: Cow<'a, str>,
    pub value: T,
}

impl<'a, T> CellVdi<'a, T> {
    /// Pairs a label with a payload. The payload is held, never evaluated.
    pub fn new(name: impl Into<Cow<'a, str>>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Describes a per-point quantity the caller would have logged.
///
/// Structurally identical to [`CellVdi`]; the distinct type mirrors the
/// distinct kind of loggable site in the backend's vocabulary and keeps the
/// two from being mixed up at call sites.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PointVdi<'a, T> {
    pub name: Cow<'a, str>,
    pub value: T,
}

impl<'a, T> PointVdi<'a, T> {
    /// Pairs a label with a payload. The payload is held, never evaluated.
    pub fn new(name: impl Into<Cow<'a, str>>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
