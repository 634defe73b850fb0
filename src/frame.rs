//! Whole-frame helpers built on polars.
//!
//! Wraps the cell standardizers for use on a `DataFrame`: trimming every
//! string cell, cleaning headers, and replacing string columns with their
//! standardized form. These functions mutate or consume the frame they are
//! given and are meant for a single writer.

use crate::config::CleaningConfig;
use crate::error::{DfUtilsError, Result};
use crate::models::{ColumnKind, Standardized, Strictness};
use crate::standardize::{standardize_date, standardize_id, standardize_money};
use deunicode::deunicode;
use polars::prelude::*;
use std::collections::HashSet;
use tracing::{debug, info};

/// Remove surrounding whitespace from every string cell
///
/// Non-string columns and null cells are left untouched.
pub fn strip_dataframe(mut df: DataFrame) -> Result<DataFrame> {
    let string_columns: Vec<PlSmallStr> = df
        .get_columns()
        .iter()
        .filter(|column| column.dtype() == &DataType::String)
        .map(|column| column.name().clone())
        .collect();

    for name in string_columns {
        let stripped: StringChunked = df
            .column(name.as_str())?
            .as_materialized_series()
            .str()?
            .into_iter()
            .map(|value| value.map(str::trim))
            .collect();
        df.with_column(stripped.with_name(name).into_series())?;
    }

    debug!("Stripped string cells in {} columns", df.width());
    Ok(df)
}

/// Trim, lowercase and accent-fold a single header
pub fn clean_header(header: &str) -> String {
    deunicode(&header.trim().to_lowercase())
}

/// Trim, lowercase and accent-fold a list of headers, keeping their order
pub fn clean_headers<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    headers.iter().map(|header| clean_header(header.as_ref())).collect()
}

/// Rename the frame's columns to their cleaned form
///
/// Fails without renaming anything if two headers clean to the same name.
pub fn clean_frame_headers(df: &mut DataFrame) -> Result<()> {
    let cleaned: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| clean_header(name.as_str()))
        .collect();

    let mut seen = HashSet::new();
    if let Some(duplicate) = cleaned.iter().find(|name| !seen.insert(name.as_str())) {
        return Err(DfUtilsError::DuplicateHeader {
            header: duplicate.clone(),
        });
    }

    df.set_column_names(cleaned)?;
    Ok(())
}

/// Replace a string column with its standardized form
///
/// Money becomes `Float64` and dates become `Date`, with Missing cells
/// stored as null. IDs stay `String`; absent cells become empty strings as
/// they do for [`standardize_id`]. In Strict mode the first unrecognized
/// cell aborts the call and the frame is left unchanged.
pub fn standardize_column(
    df: &mut DataFrame,
    column: &str,
    kind: ColumnKind,
    strictness: Strictness,
) -> Result<()> {
    let source = df
        .column(column)
        .map_err(|_| DfUtilsError::ColumnNotFound {
            column: column.to_string(),
        })?;

    if source.dtype() != &DataType::String {
        return Err(DfUtilsError::UnsupportedColumnType {
            column: column.to_string(),
            dtype: source.dtype().to_string(),
        });
    }

    let cells = source.as_materialized_series().str()?;
    let name = PlSmallStr::from(column);

    let standardized = match kind {
        ColumnKind::Money => {
            let amounts = cells
                .into_iter()
                .map(|cell| standardize_money(cell, strictness).map(Standardized::into_option))
                .collect::<Result<Vec<Option<f64>>>>()?;
            Series::new(name, amounts)
        }
        ColumnKind::Date => {
            let dates = cells
                .into_iter()
                .map(|cell| standardize_date(cell, strictness).map(Standardized::into_option))
                .collect::<Result<Vec<_>>>()?;
            Series::new(name, dates)
        }
        ColumnKind::Id => {
            let ids: Vec<String> = cells
                .into_iter()
                .map(|cell| standardize_id(cell, strictness))
                .collect();
            Series::new(name, ids)
        }
    };

    info!(
        "Standardized column '{}' as {}: {} of {} cells missing",
        column,
        kind,
        standardized.null_count(),
        standardized.len()
    );

    df.with_column(standardized)?;
    Ok(())
}

/// Strip cells, clean headers and standardize the configured columns
pub fn clean_frame(mut df: DataFrame, config: &CleaningConfig) -> Result<DataFrame> {
    config.validate()?;

    if config.strip_cells {
        df = strip_dataframe(df)?;
    }

    if config.clean_headers {
        clean_frame_headers(&mut df)?;
    }

    for rule in &config.columns {
        standardize_column(&mut df, &rule.column, rule.kind, config.strictness)?;
    }

    info!(
        "Cleaned frame: {} rows, {} columns, {} standardized",
        df.height(),
        df.width(),
        config.columns.len()
    );

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_frame() -> DataFrame {
        df!(
            "Col_A" => [Some("123"), Some("456"), None],
            "Col_B" => [Some("  sample"), Some(""), Some("dataframe   ")],
            "Col_C" => [None, Some("hello"), Some("  world  ")],
            "Count" => [1i64, 2, 3],
        )
        .unwrap()
    }

    fn strings(df: &DataFrame, column: &str) -> Vec<Option<String>> {
        df.column(column)
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .into_iter()
            .map(|value| value.map(str::to_string))
            .collect()
    }

    #[test]
    fn test_strip_dataframe() {
        let df = strip_dataframe(sample_frame()).unwrap();

        assert_eq!(
            strings(&df, "Col_B"),
            vec![Some("sample".into()), Some("".into()), Some("dataframe".into())]
        );
        assert_eq!(
            strings(&df, "Col_C"),
            vec![None, Some("hello".into()), Some("world".into())]
        );
        assert_eq!(strings(&df, "Col_A")[2], None);
        assert_eq!(df.column("Count").unwrap().dtype(), &DataType::Int64);
    }

    #[test]
    fn test_clean_headers() {
        let headers = ["Aa", "Èé", "Àà", "Ôô", "Ãã", "Çç", "  Aa  "];
        let expected = ["aa", "ee", "aa", "oo", "aa", "cc", "aa"];

        assert_eq!(clean_headers(&headers), expected);
    }

    #[test]
    fn test_clean_frame_headers() {
        let mut df = df!(
            "  Descrição " => ["a"],
            "VALOR" => ["1"],
        )
        .unwrap();

        clean_frame_headers(&mut df).unwrap();

        let names: Vec<&str> = df.get_column_names().into_iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["descricao", "valor"]);
    }

    #[test]
    fn test_clean_frame_headers_rejects_duplicates() {
        let mut df = df!("Valor" => ["1"], "valor " => ["2"]).unwrap();

        let err = clean_frame_headers(&mut df).unwrap_err();
        assert!(matches!(err, DfUtilsError::DuplicateHeader { ref header } if header == "valor"));
        assert_eq!(df.get_column_names()[0].as_str(), "Valor");
    }

    #[test]
    fn test_standardize_money_column() {
        let mut df = df!("valor" => [Some("1.234,56"), Some("1.23,45"), None]).unwrap();

        standardize_column(&mut df, "valor", ColumnKind::Money, Strictness::Lenient).unwrap();

        let amounts: Vec<Option<f64>> = df
            .column("valor")
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(amounts, vec![Some(1234.56), None, None]);
    }

    #[test]
    fn test_standardize_date_column() {
        let mut df = df!("data" => [Some("01/02/2000"), Some("2000-02-01"), Some("01//20")]).unwrap();

        standardize_column(&mut df, "data", ColumnKind::Date, Strictness::Lenient).unwrap();

        let expected = NaiveDate::from_ymd_opt(2000, 2, 1);
        let dates: Vec<Option<NaiveDate>> = df
            .column("data")
            .unwrap()
            .as_materialized_series()
            .date()
            .unwrap()
            .as_date_iter()
            .collect();
        assert_eq!(dates, vec![expected, expected, None]);
    }

    #[test]
    fn test_standardize_id_column() {
        let mut df = df!("cpf" => [Some("'123.456.789-10"), None]).unwrap();

        standardize_column(&mut df, "cpf", ColumnKind::Id, Strictness::Strict).unwrap();

        assert_eq!(
            strings(&df, "cpf"),
            vec![Some("12345678910".into()), Some("".into())]
        );
    }

    #[test]
    fn test_standardize_column_strict_leaves_frame_unchanged() {
        let mut df = df!("valor" => ["1,00", "abc"]).unwrap();

        let err =
            standardize_column(&mut df, "valor", ColumnKind::Money, Strictness::Strict).unwrap_err();

        assert!(err.is_irrecognizable());
        assert_eq!(df.column("valor").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_standardize_column_errors() {
        let mut df = sample_frame();

        let missing = standardize_column(&mut df, "nope", ColumnKind::Id, Strictness::Lenient);
        assert!(matches!(missing, Err(DfUtilsError::ColumnNotFound { .. })));

        let wrong_type = standardize_column(&mut df, "Count", ColumnKind::Money, Strictness::Lenient);
        assert!(matches!(
            wrong_type,
            Err(DfUtilsError::UnsupportedColumnType { .. })
        ));
    }

    #[test]
    fn test_clean_frame_runs_all_steps() {
        let df = df!(
            " Valor (R$) " => [" R$ 1.234,56 ", "12,34"],
            "Data" => ["01/02/2000 10:00", " 36526 "],
        )
        .unwrap();
        let config = CleaningConfig::default()
            .with_column("valor (r$)", ColumnKind::Money)
            .with_column("data", ColumnKind::Date);

        let df = clean_frame(df, &config).unwrap();

        assert_eq!(df.column("valor (r$)").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("data").unwrap().dtype(), &DataType::Date);
        assert_eq!(df.column("data").unwrap().null_count(), 0);
    }
}
