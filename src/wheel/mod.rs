//! Wheelhouse inventory layer
//!
//! Turns the files of an architecture-partitioned wheelhouse into a sorted
//! listing of wheels.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Collector  │────▶│   Latest    │────▶│    Sort     │────▶│   output    │
//! │   (walk)    │     │  (reduce)   │     │   (rows)    │     │  (render)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │                   │
//!        ▼                   ▼                   ▼
//! ┌─────────────┐     ┌─────────────────────────────────┐
//! │  Artifact   │     │          LooseVersion           │
//! │  + compat   │     │      (version ordering)         │
//! └─────────────┘     └─────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`artifact`]: Wheel filename parsing into an immutable [`Artifact`]
//! - [`compat`]: Python version to runtime tag compatibility
//! - [`collector`]: Wheelhouse traversal and filtering
//! - [`latest`]: Reduction of each group to its latest version
//! - [`sort`]: Row ordering and column selection
//! - [`version`]: Loose, segment-wise version ordering
//! - [`error`]: Error type shared by the layer

pub mod artifact;
pub mod collector;
pub mod compat;
pub mod error;
pub mod latest;
pub mod sort;
pub mod version;

use indexmap::IndexMap;

pub use artifact::{Artifact, WheelTags};
pub use collector::{DirectoryWheelSource, WheelFilter, WheelSource, collect, collect_from_dir};
pub use compat::{compatible_runtime, is_compatible};
pub use error::WheelError;
pub use latest::latest_versions;
pub use sort::{Column, Row, sort_wheels, to_rows};
pub use version::LooseVersion;

/// Wheels grouped by package name, in the order the names were first seen
pub type WheelGroups = IndexMap<String, Vec<Artifact>>;
