//! Shapes analytics responses into chart series.

use api::models::{CategoryRow, DistributionBucket};

use crate::chart::{ChartConfig, ChartDatum, ValueFormat};
use crate::core::categories;

pub use crate::core::format::percent;

/// Bucket lower bounds reported by the server.
const BUCKET_STEP: u32 = 10;
const BUCKET_MAX: u32 = 100;

/// One bar per percent bucket `0, 10, ..., 100`; buckets the server left out
/// count as zero.
pub fn distribution_series(buckets: &[DistributionBucket]) -> Vec<ChartDatum> {
    (0..=BUCKET_MAX)
        .step_by(BUCKET_STEP as usize)
        .map(|bucket| {
            let count: u32 = buckets
                .iter()
                .filter(|b| b.bucket == bucket)
                .map(|b| b.count)
                .sum();
            ChartDatum::new(bucket.to_string(), f64::from(count))
        })
        .collect()
}

/// Accuracy per category, labelled with its sample size. `ordered` sorts by
/// the fixed category list; otherwise server order is kept.
pub fn category_series(rows: &[CategoryRow], ordered: bool) -> Vec<ChartDatum> {
    let mut rows: Vec<&CategoryRow> = rows.iter().collect();
    if ordered {
        rows.sort_by_key(|row| categories::rank(&row.category));
    }
    rows.into_iter()
        .map(|row| {
            ChartDatum::new(
                format!("{} (n={})", row.category, row.total),
                row.accuracy.round(),
            )
        })
        .collect()
}

pub fn distribution_chart() -> ChartConfig {
    ChartConfig {
        show_values: true,
        ..ChartConfig::default()
    }
}

fn accuracy_chart() -> ChartConfig {
    ChartConfig {
        max: Some(100.0),
        color: "#2e7d32".to_string(),
        show_values: true,
        value_format: ValueFormat::Percent,
        ..ChartConfig::default()
    }
}

/// Admin dashboard: many categories, so labels are rotated.
pub fn admin_category_chart() -> ChartConfig {
    ChartConfig {
        label_angle: -35.0,
        ..accuracy_chart()
    }
}

/// Student insights: fewer bars, so labels wrap instead.
pub fn student_category_chart() -> ChartConfig {
    ChartConfig {
        height: 220.0,
        label_wrap_chars: 16,
        label_font_size: 12.0,
        min_bar_width: 72.0,
        ..accuracy_chart()
    }
}
