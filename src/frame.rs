//! Thin layer over polars: read the raw table and pull typed arrays out of it.

use std::path::Path;

use ndarray::prelude::*;
use polars::prelude::*;

use crate::category::Category;
use crate::error::{DatasetError, Result};
use crate::options::LoadOptions;

/// Number of numeric measurement columns.
pub const FEATURE_COLUMNS: usize = 4;
/// Measurement columns plus the trailing label column.
pub const TABLE_COLUMNS: usize = FEATURE_COLUMNS + 1;

/// Reads a CSV file into a DataFrame of exactly [`TABLE_COLUMNS`] columns.
pub fn dataframe_from_csv(file_path: &Path, options: &LoadOptions) -> Result<DataFrame> {
    let df = CsvReader::from_path(file_path)?
        .has_header(options.has_header)
        .with_separator(options.separator)
        .finish()?;

    if df.width() != TABLE_COLUMNS {
        return Err(DatasetError::Shape {
            expected: format!("{TABLE_COLUMNS} columns"),
            found: format!("{} columns", df.width()),
        });
    }
    Ok(df)
}

/// Converts the feature columns of the table into a `rows x 4` array.
///
/// Every feature column must be numeric and complete; polars reads a
/// non-numeric cell as a string column and a missing cell as null.
pub fn features_from_dataframe(df: &DataFrame) -> Result<Array2<f64>> {
    // a header-only file gives untyped columns
    if df.height() == 0 {
        return Ok(Array2::zeros((0, FEATURE_COLUMNS)));
    }
    let columns = &df.get_columns()[..FEATURE_COLUMNS];
    for (i, series) in columns.iter().enumerate() {
        if !series.dtype().is_numeric() {
            return Err(DatasetError::Shape {
                expected: format!("numeric feature column {i}"),
                found: format!("{}", series.dtype()),
            });
        }
        if series.null_count() > 0 {
            return Err(DatasetError::Shape {
                expected: format!("no missing values in feature column {i}"),
                found: format!("{} missing", series.null_count()),
            });
        }
    }
    let features = DataFrame::new(columns.to_vec())?;
    Ok(features.to_ndarray::<Float64Type>(IndexOrder::C)?)
}

/// Maps the label column of the table through the category table.
pub fn labels_from_dataframe(df: &DataFrame) -> Result<Array1<i64>> {
    let labels = df.get_columns()[FEATURE_COLUMNS].cast(&DataType::Utf8)?;
    let labels = labels.utf8()?;

    let ids = labels
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value
                .and_then(Category::from_name)
                .map(Category::id)
                .ok_or_else(|| DatasetError::UnknownCategory {
                    row: Some(row),
                    value: value.unwrap_or_default().to_string(),
                })
        })
        .collect::<Result<Vec<i64>>>()?;

    Ok(Array1::from_vec(ids))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DataFrame {
        df![
            "a" => [5.1, 7.0],
            "b" => [3.5, 3.2],
            "c" => [1.4, 4.7],
            "d" => [0.2, 1.4],
            "label" => ["Iris-setosa", "Iris-versicolor"],
        ]
        .unwrap()
    }

    #[test]
    fn features_keep_row_order() {
        let features = features_from_dataframe(&table()).unwrap();
        assert_eq!(features.dim(), (2, 4));
        assert_eq!(features.row(0), array![5.1, 3.5, 1.4, 0.2]);
        assert_eq!(features.row(1), array![7.0, 3.2, 4.7, 1.4]);
    }

    #[test]
    fn labels_map_through_table() {
        assert_eq!(labels_from_dataframe(&table()).unwrap(), array![0, 1]);
    }

    #[test]
    fn unknown_label_reports_row() {
        let df = df![
            "a" => [1.0, 2.0],
            "b" => [1.0, 2.0],
            "c" => [1.0, 2.0],
            "d" => [1.0, 2.0],
            "label" => ["Iris-virginica", "Iris-sibirica"],
        ]
        .unwrap();
        match labels_from_dataframe(&df) {
            Err(DatasetError::UnknownCategory { row, value }) => {
                assert_eq!(row, Some(1));
                assert_eq!(value, "Iris-sibirica");
            }
            other => panic!("expected unknown category, got {other:?}"),
        }
    }

    #[test]
    fn string_feature_column_is_rejected() {
        let df = df![
            "a" => ["x", "y"],
            "b" => [1.0, 2.0],
            "c" => [1.0, 2.0],
            "d" => [1.0, 2.0],
            "label" => ["Iris-setosa", "Iris-setosa"],
        ]
        .unwrap();
        assert!(matches!(
            features_from_dataframe(&df),
            Err(DatasetError::Shape { .. })
        ));
    }

    #[test]
    fn missing_feature_is_rejected() {
        let df = df![
            "a" => [Some(1.0), None],
            "b" => [1.0, 2.0],
            "c" => [1.0, 2.0],
            "d" => [1.0, 2.0],
            "label" => ["Iris-setosa", "Iris-setosa"],
        ]
        .unwrap();
        assert!(matches!(
            features_from_dataframe(&df),
            Err(DatasetError::Shape { .. })
        ));
    }
}
