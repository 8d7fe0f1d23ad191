//! Grade statistics over the primary mapped column.

use gsync_model::{GradeBand, GradeStats, MergedRecord, Table};

/// Fixed distribution bands; the last is inclusive of 100.
const BANDS: [(u32, u32); 5] = [(0, 60), (60, 70), (70, 80), (80, 90), (90, 100)];

/// Compute statistics over matched records of `primary_column`.
///
/// Non-numeric and non-finite values ("NaN", "inf") are dropped; no usable
/// grades means no stats. The
/// median is the upper-middle element for even counts (index `n / 2` of
/// the ascending sort), kept verbatim rather than interpolated. Values
/// above 100 land only in the `>100` overflow band, which is omitted when
/// empty.
pub fn compute_stats(records: &[MergedRecord], primary_column: &str) -> Option<GradeStats> {
    let grades: Vec<f64> = records
        .iter()
        .filter(|record| record.matched)
        .filter_map(|record| {
            Table::value(&record.merged, primary_column)
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|grade| grade.is_finite())
        })
        .collect();
    if grades.is_empty() {
        return None;
    }

    let mut sorted = grades.clone();
    sorted.sort_by(f64::total_cmp);
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let average = sorted.iter().sum::<f64>() / sorted.len() as f64;
    let median = sorted[sorted.len() / 2];

    let mut distribution: Vec<GradeBand> = BANDS
        .iter()
        .enumerate()
        .map(|(idx, (low, high))| {
            let last = idx == BANDS.len() - 1;
            let count = grades
                .iter()
                .filter(|g| {
                    **g >= f64::from(*low)
                        && if last {
                            **g <= f64::from(*high)
                        } else {
                            **g < f64::from(*high)
                        }
                })
                .count();
            GradeBand {
                range: format!("{low}-{high}"),
                count,
            }
        })
        .collect();
    let over_100 = grades.iter().filter(|g| **g > 100.0).count();
    if over_100 > 0 {
        distribution.push(GradeBand {
            range: ">100".to_string(),
            count: over_100,
        });
    }

    Some(GradeStats {
        average,
        median,
        min,
        max,
        distribution,
    })
}

/// The opaque text payload handed to the advisory service. No structured
/// data crosses that boundary.
pub fn stats_summary(stats: &GradeStats) -> String {
    let distribution =
        serde_json::to_string(&stats.distribution).unwrap_or_else(|_| "[]".to_string());
    format!(
        "Average: {:.2}, Median: {}, Min: {}, Max: {}. Distribution: {}",
        stats.average, stats.median, stats.min, stats.max, distribution
    )
}
