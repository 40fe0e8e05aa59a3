//! Bar chart pipeline: label wrapping -> bar geometry -> SVG scene.
//!
//! Everything up to [`ChartScene`] is pure and platform-agnostic; the
//! [`BarChart`] component only injects the finished markup.

mod layout;
mod render;
mod view;
mod wrap;

pub use layout::{
    layout, BarLayout, ChartConfig, ChartDatum, ChartLayout, LabelPlacement, ValueFormat,
};
pub use render::{render, BarGlyph, ChartScene, RectShape, TextShape, TextSpan};
pub use view::BarChart;
pub use wrap::wrap_label;
