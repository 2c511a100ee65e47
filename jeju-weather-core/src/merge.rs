//! Merging per-region series into one comparison table.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::RegionSeries;

/// One row of the comparison table: a date plus one cell per region,
/// aligned with [`MergedTable::regions`]. `None` marks a missing cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRow {
    pub date: NaiveDate,
    pub values: Vec<Option<f64>>,
}

/// Date-keyed comparison table with one column per region.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MergedTable {
    pub regions: Vec<String>,
    pub rows: Vec<MergedRow>,
}

/// Merge per-region series into one table.
///
/// Row order follows the first region's dates. A region without a point
/// for a row's date gets a `None` cell; missing data is not an error —
/// renderers and the analysis report treat it as "no data".
pub fn merge_series(series: &[RegionSeries]) -> MergedTable {
    let Some(first) = series.first() else {
        return MergedTable::default();
    };

    let by_date: Vec<HashMap<NaiveDate, f64>> = series
        .iter()
        .map(|rs| rs.points.iter().map(|p| (p.date, p.value)).collect())
        .collect();

    let rows = first
        .points
        .iter()
        .map(|p| MergedRow {
            date: p.date,
            values: by_date.iter().map(|m| m.get(&p.date).copied()).collect(),
        })
        .collect();

    MergedTable {
        regions: series.iter().map(|rs| rs.region.clone()).collect(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SeriesPoint;

    fn points(values: &[(u32, f64)]) -> Vec<SeriesPoint> {
        values
            .iter()
            .map(|&(day, value)| SeriesPoint {
                date: NaiveDate::from_ymd_opt(2024, 1, day).expect("valid test date"),
                value,
            })
            .collect()
    }

    #[test]
    fn two_regions_over_the_same_range_fill_every_cell() {
        let series = vec![
            RegionSeries {
                region: "제주시".to_string(),
                points: points(&[(1, 10.0), (2, 11.5), (3, 12.0)]),
            },
            RegionSeries {
                region: "성산".to_string(),
                points: points(&[(1, 9.0), (2, 10.5), (3, 11.0)]),
            },
        ];

        let table = merge_series(&series);

        assert_eq!(table.regions, vec!["제주시", "성산"]);
        assert_eq!(table.rows.len(), 3);
        for row in &table.rows {
            assert_eq!(row.values.len(), 2);
            assert!(row.values.iter().all(Option::is_some));
        }
        assert_eq!(table.rows[1].values, vec![Some(11.5), Some(10.5)]);
    }

    #[test]
    fn truncated_region_yields_null_cells() {
        let series = vec![
            RegionSeries {
                region: "제주시".to_string(),
                points: points(&[(1, 10.0), (2, 11.5), (3, 12.0)]),
            },
            RegionSeries {
                region: "우도".to_string(),
                points: points(&[(1, 9.0), (2, 10.5)]),
            },
        ];

        let table = merge_series(&series);

        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[2].values[0], Some(12.0));
        assert_eq!(table.rows[2].values[1], None);
        assert_eq!(table.rows[0].values[1], Some(9.0));
    }

    #[test]
    fn no_series_yields_an_empty_table() {
        let table = merge_series(&[]);
        assert!(table.regions.is_empty());
        assert!(table.rows.is_empty());
    }
}
