//! Variadic entry points of the shim.
//!
//! Rust has no overloading, so the open-ended call surface of the real
//! backend (`log(label, value?, extras...)`, `setAll(states...)`) is rendered
//! as declarative macros: any number of arguments of any types match, and a
//! new call shape in consuming code needs no widening work here. Each
//! argument expression is evaluated exactly once, as a function call would,
//! and nothing else happens.

/// Records a labelled quantity or event. Does nothing.
///
/// Accepts a label followed by zero or more payload/extra arguments of
/// arbitrary types, including a trailing [`SectionType`] tag. Arguments are
/// evaluated once and discarded; the call returns `()` and cannot fail.
///
/// With the `trace` feature enabled, a `tracing::trace!` event carrying the
/// label is emitted instead (payloads are still never read), and the label
/// must implement `AsRef<str>`.
///
/// [`SectionType`]: crate::SectionType
#[cfg(not(feature = "trace"))]
#[macro_export]
macro_rules! log {
    ($label:expr $(, $arg:expr)* $(,)?) => {{
        let _ = &$label;
        $(let _ = &$arg;)*
    }};
}

/// Records a labelled quantity or event. Does nothing.
///
/// Accepts a label followed by zero or more payload/extra arguments of
/// arbitrary types, including a trailing [`SectionType`] tag. Arguments are
/// evaluated once and discarded; the call returns `()` and cannot fail.
///
/// With the `trace` feature enabled, a `tracing::trace!` event carrying the
/// label is emitted instead (payloads are still never read), and the label
/// must implement `AsRef<str>`.
///
/// [`SectionType`]: crate::SectionType
#[cfg(feature = "trace")]
#[macro_export]
macro_rules! log {
    ($label:expr $(, $arg:expr)* $(,)?) => {{
        let __label = &$label;
        let __label: &str = __label.as_ref();
        $(let _ = &$arg;)*
        $crate::tracing::trace!(target: "scripta", label = __label, "log");
    }};
}

/// Bulk-sets logger state ahead of a log line. Does nothing.
///
/// Accepts zero or more arguments of arbitrary types, typically
/// [`CellVdi`]/[`PointVdi`] descriptors. Arguments are evaluated once and
/// discarded; the call returns `()` and cannot fail.
///
/// With the `trace` feature enabled, a `tracing::trace!` event carrying the
/// argument count is emitted instead; the arguments themselves are still
/// never read.
///
/// [`CellVdi`]: crate::CellVdi
/// [`PointVdi`]: crate::PointVdi
#[cfg(not(feature = "trace"))]
#[macro_export]
macro_rules! set_all {
    ($($arg:expr),* $(,)?) => {{
        $(let _ = &$arg;)*
    }};
}

/// Bulk-sets logger state ahead of a log line. Does nothing.
///
/// Accepts zero or more arguments of arbitrary types, typically
/// [`CellVdi`]/[`PointVdi`] descriptors. Arguments are evaluated once and
/// discarded; the call returns `()` and cannot fail.
///
/// With the `trace` feature enabled, a `tracing::trace!` event carrying the
/// argument count is emitted instead; the arguments themselves are still
/// never read.
///
/// [`CellVdi`]: crate::CellVdi
/// [`PointVdi`]: crate::PointVdi
#[cfg(feature = "trace")]
#[macro_export]
macro_rules! set_all {
    ($($arg:expr),* $(,)?) => {{
        let __count = 0usize $(+ { let _ = &$arg; 1usize })*;
        $crate::tracing::trace!(target: "scripta", args = __count, "set_all");
    }};
}
