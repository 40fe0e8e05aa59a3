//! Bar geometry: widths follow each bar's own label footprint, heights are
//! normalized against the chart maximum, and the bottom margin grows with the
//! tallest wrapped label.

use super::wrap::wrap_label;

/// Rough average glyph width as a fraction of the font size.
const CHAR_WIDTH_RATIO: f64 = 0.6;
/// Horizontal breathing room added to every label estimate.
const LABEL_PADDING: f64 = 16.0;
/// Inset between a bar's slot and its rectangle, per side.
const BAR_INSET: f64 = 4.0;
/// Gap between a label baseline and the bottom edge.
const LABEL_BASELINE_OFFSET: f64 = 6.0;
/// Extra leading between stacked label lines.
const LINE_GAP: f64 = 2.0;
const ROTATED_LABEL_MARGIN: f64 = 40.0;
const MIN_BOTTOM_MARGIN: f64 = 24.0;
const MARGIN_PADDING: f64 = 12.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// How bar values are printed in tooltips and value captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueFormat {
    /// Integral values without a decimal point, everything else as-is.
    #[default]
    Plain,
    /// Plain value with a `%` suffix.
    Percent,
    /// Fixed number of decimals.
    Fixed(u8),
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            ValueFormat::Plain => plain_number(value),
            ValueFormat::Percent => format!("{}%", plain_number(value)),
            ValueFormat::Fixed(decimals) => format!("{value:.*}", decimals as usize),
        }
    }
}

fn plain_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Total SVG height in pixels, label margin included.
    pub height: f64,
    /// Fixed normalization ceiling. Values above it draw past the plot area.
    pub max: Option<f64>,
    pub color: String,
    pub show_values: bool,
    pub value_format: ValueFormat,
    /// Degrees. Non-zero rotates single-line labels and disables wrapping.
    pub label_angle: f64,
    /// Characters per label line; 0 disables wrapping.
    pub label_wrap_chars: usize,
    pub label_font_size: f64,
    pub min_bar_width: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: 180.0,
            max: None,
            color: "#1e88e5".to_string(),
            show_values: false,
            value_format: ValueFormat::Plain,
            label_angle: 0.0,
            label_wrap_chars: 0,
            label_font_size: 12.0,
            min_bar_width: 16.0,
        }
    }
}

impl ChartConfig {
    pub fn is_rotated(&self) -> bool {
        self.label_angle != 0.0
    }

    /// Rotation and wrapping are mutually exclusive; rotation wins.
    pub fn wraps_labels(&self) -> bool {
        self.label_wrap_chars > 0 && !self.is_rotated()
    }

    pub fn line_step(&self) -> f64 {
        self.label_font_size + LINE_GAP
    }

    fn effective_wrap_chars(&self) -> usize {
        if self.is_rotated() {
            0
        } else {
            self.label_wrap_chars
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LabelPlacement {
    /// Wrapped lines; the first baseline sits at `y`, each following line
    /// `line_step` lower. Blocks shorter than the tallest one are pushed down
    /// so the last lines of all bars share a baseline.
    Stacked { x: f64, y: f64, line_step: f64 },
    /// One line, optionally rotated by `rotation` degrees about (`x`, `y`).
    Single {
        x: f64,
        y: f64,
        rotation: Option<f64>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub label: String,
    pub value: f64,
    pub lines: Vec<String>,
    /// Left edge of this bar's slot (prefix sum of earlier widths).
    pub x_offset: f64,
    /// Slot width.
    pub width: f64,
    pub rect_x: f64,
    pub rect_y: f64,
    pub rect_width: f64,
    pub rect_height: f64,
    pub label_placement: LabelPlacement,
}

impl BarLayout {
    pub fn center_x(&self) -> f64 {
        self.rect_x + self.rect_width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub bars: Vec<BarLayout>,
    pub chart_width: f64,
    pub height: f64,
    pub bottom_margin: f64,
    /// Normalization ceiling actually used.
    pub max_value: f64,
    /// Tallest wrapped label, never below 1.
    pub max_lines: usize,
}

impl ChartLayout {
    pub fn plot_height(&self) -> f64 {
        self.height - self.bottom_margin
    }
}

/// Compute bar geometry. Input order is preserved; degenerate input (empty
/// data, negative values) produces degenerate geometry rather than an error.
pub fn layout(data: &[ChartDatum], config: &ChartConfig) -> ChartLayout {
    let max_value = config
        .max
        .unwrap_or_else(|| data.iter().map(|d| d.value).fold(1.0, f64::max));

    let wrap_chars = config.effective_wrap_chars();
    let wrapped: Vec<Vec<String>> = data
        .iter()
        .map(|d| wrap_label(&d.label, wrap_chars))
        .collect();
    let max_lines = wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1);

    let char_width = config.label_font_size * CHAR_WIDTH_RATIO;
    let widths: Vec<f64> = data
        .iter()
        .zip(&wrapped)
        .map(|(datum, lines)| {
            let longest = lines
                .iter()
                .map(|line| line.chars().count())
                .max()
                .unwrap_or_else(|| datum.label.chars().count());
            let estimate = (longest as f64 * char_width).ceil() + LABEL_PADDING;
            estimate.max(config.min_bar_width)
        })
        .collect();

    let bottom_margin = if config.is_rotated() {
        ROTATED_LABEL_MARGIN
    } else {
        (max_lines as f64 * config.line_step() + MARGIN_PADDING).max(MIN_BOTTOM_MARGIN)
    };
    let plot_height = config.height - bottom_margin;
    let label_y = config.height - LABEL_BASELINE_OFFSET;

    let mut x_offset = 0.0;
    let mut bars = Vec::with_capacity(data.len());
    for ((datum, lines), width) in data.iter().zip(wrapped).zip(widths) {
        let rect_height = datum.value / max_value * plot_height;
        let rect_x = x_offset + BAR_INSET;
        let rect_width = width - 2.0 * BAR_INSET;
        let center_x = rect_x + rect_width / 2.0;

        let label_placement = if config.wraps_labels() {
            let missing_lines = (max_lines - lines.len()) as f64;
            LabelPlacement::Stacked {
                x: center_x,
                y: config.height - (bottom_margin - config.line_step() * missing_lines)
                    - LABEL_BASELINE_OFFSET,
                line_step: config.line_step(),
            }
        } else {
            LabelPlacement::Single {
                x: center_x,
                y: label_y,
                rotation: config.is_rotated().then_some(config.label_angle),
            }
        };

        bars.push(BarLayout {
            label: datum.label.clone(),
            value: datum.value,
            lines,
            x_offset,
            width,
            rect_x,
            rect_y: config.height - rect_height - bottom_margin,
            rect_width,
            rect_height,
            label_placement,
        });
        x_offset += width;
    }

    ChartLayout {
        bars,
        chart_width: x_offset,
        height: config.height,
        bottom_margin,
        max_value,
        max_lines,
    }
}
