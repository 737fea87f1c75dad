//! Section categories attached to log calls as an opaque tag.

/// Conceptual region of the larger process a log call pertains to.
///
/// Callers pass a variant as a trailing tag argument where the real logging
/// backend would use it for filtering or labelling. The shim never inspects
/// it; the type exists so those call sites keep compiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SectionType {
    /// Not applicable to any particular section.
    #[default]
    Na,
    Infill,
    Support,
    Walls,
    Skin,
}
