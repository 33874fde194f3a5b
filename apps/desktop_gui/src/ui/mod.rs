//! UI layer: app shell, panes, widgets, theme, and fold detection.

pub mod app;
pub mod layout;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::{AppPaths, CvViewerApp};
