//! Shared foundation types for the Core interpreter crates.
//!
//! `core-util` has no knowledge of Core's grammar or semantics. It provides
//! the arena-index pattern used to address symbol records (`index_vec`), a
//! small interned-string handle (`symbol`), a one-dimensional source
//! location (`span`), and the error/diagnostic types every other crate in
//! the workspace builds on (`error`, `diagnostic`).

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, Level};
pub use error::CoreError;
pub use index_vec::{Idx, IndexVec};
pub use span::Line;
pub use symbol::{Interner, Symbol};
