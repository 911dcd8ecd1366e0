//! Terminal presentation.
//!
//! This module provides:
//! - [`RtcheckTheme`] colors and [`should_use_colors`]
//! - [`StatusKind`] glyph and tag vocabulary
//! - [`ProbeProgress`], an indicatif bar driven by the check engine
//! - The interactive report viewer in [`viewer`]
//!
//! # Example
//!
//! ```
//! use rtcheck::ui::{RtcheckTheme, StatusKind};
//!
//! let theme = RtcheckTheme::plain();
//! assert_eq!(StatusKind::from_passed(false).styled(&theme), "✘");
//! ```

pub mod icons;
pub mod progress;
pub mod theme;
pub mod viewer;

pub use icons::StatusKind;
pub use progress::ProbeProgress;
pub use theme::{should_use_colors, RtcheckTheme};
pub use viewer::{render_panel, run_viewer, ViewerModel, ViewerTab};
