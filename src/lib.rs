//! Call-compatible no-op stand-in for the scripta visual debug logging API.
//!
//! The real backend is a proprietary library that is unavailable in this
//! build environment. This crate exists so dependent code compiles and links
//! unchanged: every entry point accepts the call shapes those sites use and
//! has no observable effect. There is no pipeline, no filtering, no output;
//! the contract is "compiles, does nothing," and the accepted call-shape set
//! grows whenever consuming code introduces a shape not yet matched.
//!
//! ```
//! use scripta::{log, set_all, CellVdi, SectionType};
//!
//! let density = 0.2_f64;
//! log!("infill_density", density, SectionType::Infill);
//! set_all!(CellVdi::new("density", &density));
//! ```
//!
//! Two opt-in features exist, both off by default: `serde` derives
//! serialization for the descriptor types, and `trace` routes calls to a
//! `tracing` event (labels only, payloads are still never read).

mod macros;
pub mod section;
pub mod vdi;

// Expansion target for the `trace` arms of `log!`/`set_all!`: the macros
// reach tracing as `$crate::tracing`, so consumers enabling the feature do
// not need a direct tracing dependency of their own.
#[cfg(feature = "trace")]
#[doc(hidden)]
pub use tracing;

pub use section::SectionType;
pub use vdi::{CellVdi, PointVdi};
