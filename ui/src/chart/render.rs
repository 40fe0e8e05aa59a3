//! Turns a [`ChartLayout`] into drawable primitives and SVG markup.

use std::fmt::Write;

use super::layout::{ChartConfig, ChartLayout, LabelPlacement};

const CORNER_RADIUS: f64 = 4.0;
/// Gap between a bar's top and its value caption.
const VALUE_CAPTION_GAP: f64 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub corner_radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub text: String,
    /// Vertical offset from the previous line.
    pub dy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pub x: f64,
    pub y: f64,
    pub class: &'static str,
    pub font_size: Option<f64>,
    /// `(degrees, cx, cy)` rotation about the anchor point.
    pub rotation: Option<(f64, f64, f64)>,
    pub spans: Vec<TextSpan>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGlyph {
    pub tooltip: String,
    pub rect: RectShape,
    pub value: Option<TextShape>,
    pub label: TextShape,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub width: f64,
    pub height: f64,
    pub bars: Vec<BarGlyph>,
}

pub fn render(layout: &ChartLayout, config: &ChartConfig) -> ChartScene {
    let bars = layout
        .bars
        .iter()
        .map(|bar| {
            let formatted = config.value_format.format(bar.value);
            let center_x = bar.center_x();

            let value = config.show_values.then(|| TextShape {
                x: center_x,
                y: bar.rect_y - VALUE_CAPTION_GAP,
                class: "barchart__value",
                font_size: None,
                rotation: None,
                spans: vec![TextSpan {
                    text: formatted.clone(),
                    dy: 0.0,
                }],
            });

            let label = match bar.label_placement {
                LabelPlacement::Stacked { x, y, line_step } => TextShape {
                    x,
                    y,
                    class: "barchart__label",
                    font_size: Some(config.label_font_size),
                    rotation: None,
                    spans: bar
                        .lines
                        .iter()
                        .enumerate()
                        .map(|(idx, line)| TextSpan {
                            text: line.clone(),
                            dy: if idx == 0 { 0.0 } else { line_step },
                        })
                        .collect(),
                },
                LabelPlacement::Single { x, y, rotation } => TextShape {
                    x,
                    y,
                    class: "barchart__label",
                    font_size: Some(config.label_font_size),
                    rotation: rotation.map(|deg| (deg, x, y)),
                    spans: vec![TextSpan {
                        text: bar.label.clone(),
                        dy: 0.0,
                    }],
                },
            };

            BarGlyph {
                tooltip: format!("{}: {formatted}", bar.label),
                rect: RectShape {
                    x: bar.rect_x,
                    y: bar.rect_y,
                    width: bar.rect_width,
                    height: bar.rect_height,
                    fill: config.color.clone(),
                    corner_radius: CORNER_RADIUS,
                },
                value,
                label,
            }
        })
        .collect();

    ChartScene {
        width: layout.chart_width,
        height: layout.height,
        bars,
    }
}

impl ChartScene {
    /// Standalone SVG document for the scene.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns='http://www.w3.org/2000/svg' class='barchart__svg' width='{}' height='{}'>",
            self.width, self.height
        );

        for bar in &self.bars {
            out.push_str("<g>");
            let _ = write!(out, "<title>{}</title>", escape_xml(&bar.tooltip));

            // Negative heights are not valid SVG; draw them as empty bars.
            let rect = &bar.rect;
            let _ = write!(
                out,
                "<rect x='{}' y='{}' width='{}' height='{}' fill='{}' rx='{}'/>",
                rect.x,
                rect.y,
                rect.width,
                rect.height.max(0.0),
                escape_xml(&rect.fill),
                rect.corner_radius
            );

            if let Some(value) = &bar.value {
                write_text(&mut out, value);
            }
            write_text(&mut out, &bar.label);
            out.push_str("</g>");
        }

        out.push_str("</svg>");
        out
    }
}

fn write_text(out: &mut String, text: &TextShape) {
    let _ = write!(
        out,
        "<text x='{}' y='{}' text-anchor='middle' class='{}'",
        text.x, text.y, text.class
    );
    if let Some(size) = text.font_size {
        let _ = write!(out, " font-size='{size}'");
    }
    if let Some((deg, cx, cy)) = text.rotation {
        let _ = write!(out, " transform='rotate({deg} {cx} {cy})'");
    }
    out.push('>');

    match text.spans.as_slice() {
        [single] => out.push_str(&escape_xml(&single.text)),
        spans => {
            for span in spans {
                let _ = write!(
                    out,
                    "<tspan x='{}' dy='{}'>{}</tspan>",
                    text.x,
                    span.dy,
                    escape_xml(&span.text)
                );
            }
        }
    }
    out.push_str("</text>");
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{layout, ChartDatum, ValueFormat};

    #[test]
    fn tooltip_uses_formatter() {
        let config = ChartConfig {
            value_format: ValueFormat::Percent,
            ..ChartConfig::default()
        };
        let data = [ChartDatum::new("Shaving (n=4)", 75.0)];
        let scene = render(&layout(&data, &config), &config);
        assert_eq!(scene.bars[0].tooltip, "Shaving (n=4): 75%");
        assert!(scene.bars[0].value.is_none());
    }

    #[test]
    fn value_caption_sits_above_bar() {
        let config = ChartConfig {
            show_values: true,
            ..ChartConfig::default()
        };
        let chart = layout(&[ChartDatum::new("10", 3.0)], &config);
        let scene = render(&chart, &config);
        let caption = scene.bars[0].value.as_ref().unwrap();
        assert_eq!(caption.y, chart.bars[0].rect_y - 4.0);
        assert_eq!(caption.x, chart.bars[0].center_x());
        assert_eq!(caption.spans[0].text, "3");
    }

    #[test]
    fn stacked_label_spans_step_down() {
        let config = ChartConfig {
            label_wrap_chars: 8,
            ..ChartConfig::default()
        };
        let scene = render(
            &layout(&[ChartDatum::new("Hair and Scalp Care", 1.0)], &config),
            &config,
        );
        let dys: Vec<f64> = scene.bars[0].label.spans.iter().map(|s| s.dy).collect();
        assert_eq!(dys, vec![0.0, 14.0, 14.0]);
    }

    #[test]
    fn svg_markup_carries_tooltip_rect_and_rotation() {
        let config = ChartConfig {
            label_angle: -35.0,
            color: "#2e7d32".into(),
            ..ChartConfig::default()
        };
        let scene = render(&layout(&[ChartDatum::new("Tools & <Equipment>", 5.0)], &config), &config);
        let svg = scene.to_svg();

        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("<title>Tools &amp; &lt;Equipment&gt;: 5</title>"));
        assert!(svg.contains("fill='#2e7d32' rx='4'"));
        assert!(svg.contains("transform='rotate(-35 "));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn negative_bars_render_empty() {
        let config = ChartConfig::default();
        let scene = render(&layout(&[ChartDatum::new("x", -2.0)], &config), &config);
        assert!(scene.bars[0].rect.height < 0.0);
        assert!(scene.to_svg().contains("height='0'"));
    }
}
