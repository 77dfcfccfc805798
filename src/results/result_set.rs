use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

use super::row::{Row, index_columns};
use crate::error::SqlInterpolateError;
use crate::types::DecodedValue;

/// Metadata a driver reports alongside the rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultInfo {
    /// Total row count, when the backend knows it without counting the rows here
    pub count: Option<usize>,
    /// Rows changed by a DML statement
    pub affected_rows: Option<u64>,
    /// Key generated by an insert
    pub insert_id: Option<i64>,
    pub execution_time: Option<Duration>,
    /// Anything else the driver wants to report
    pub extra: BTreeMap<String, String>,
}

/// The result of executing a statement: rows plus `ResultInfo`.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    rows: Vec<Row>,
    info: ResultInfo,
    column_names: Option<Arc<Vec<String>>>,
    column_index: Arc<HashMap<String, usize>>,
}

impl ResultSet {
    /// An empty result carrying only metadata, e.g. for DML.
    #[must_use]
    pub fn from_info(info: ResultInfo) -> Self {
        Self {
            info,
            ..Self::default()
        }
    }

    /// An empty result whose rows will have `column_names`.
    #[must_use]
    pub fn with_columns(column_names: Vec<String>) -> Self {
        let mut rs = Self::default();
        rs.set_column_names(Arc::new(column_names));
        rs
    }

    /// Set the column names for this result set (to be shared by all rows)
    pub fn set_column_names(&mut self, column_names: Arc<Vec<String>>) {
        self.column_index = Arc::new(index_columns(&column_names));
        self.column_names = Some(column_names);
    }

    #[must_use]
    pub fn get_column_names(&self) -> Option<&Arc<Vec<String>>> {
        self.column_names.as_ref()
    }

    /// Append a row of values in column order.
    ///
    /// # Errors
    /// Returns `SqlInterpolateError::ExecutionError` if no column names were set or the
    /// value count differs from the column count.
    pub fn add_row_values(&mut self, values: Vec<DecodedValue>) -> Result<(), SqlInterpolateError> {
        let Some(column_names) = &self.column_names else {
            return Err(SqlInterpolateError::ExecutionError(
                "column names must be set before adding rows".to_string(),
            ));
        };
        if values.len() != column_names.len() {
            return Err(SqlInterpolateError::ExecutionError(format!(
                "row has {} value(s) for {} column(s)",
                values.len(),
                column_names.len()
            )));
        }
        self.rows.push(Row::with_index(
            column_names.clone(),
            self.column_index.clone(),
            values,
        ));
        Ok(())
    }

    pub fn info(&self) -> &ResultInfo {
        &self.info
    }

    pub fn info_mut(&mut self) -> &mut ResultInfo {
        &mut self.info
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row count reported by the driver, else the number of rows held.
    #[must_use]
    pub fn count(&self) -> usize {
        self.info.count.unwrap_or(self.rows.len())
    }

    /// Generated key reported by the driver, else an integer `id` column of the first row.
    #[must_use]
    pub fn insert_id(&self) -> Option<i64> {
        self.info.insert_id.or_else(|| {
            self.rows
                .first()
                .and_then(|row| row.get("id"))
                .and_then(DecodedValue::as_int)
        })
    }

    #[must_use]
    pub fn affected_rows(&self) -> Option<u64> {
        self.info.affected_rows
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl IntoIterator for ResultSet {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> ResultSet {
        let mut rs = ResultSet::with_columns(vec!["id".into(), "name".into()]);
        rs.add_row_values(vec![DecodedValue::Int(7), DecodedValue::Text("bob".into())])
            .unwrap();
        rs.add_row_values(vec![DecodedValue::Int(42), DecodedValue::Null])
            .unwrap();
        rs
    }

    #[test]
    fn rows_share_columns() {
        let rs = people();
        let names: Vec<_> = rs.iter().map(|r| r.get("name").cloned()).collect();
        assert_eq!(
            names,
            vec![Some(DecodedValue::Text("bob".into())), Some(DecodedValue::Null)]
        );
        assert!(Arc::ptr_eq(&rs.rows()[0].column_names, &rs.rows()[1].column_names));
        assert_eq!(rs.rows()[1].get_by_index(0), Some(&DecodedValue::Int(42)));
        assert_eq!(rs.rows()[0].get("missing"), None);
    }

    #[test]
    fn count_prefers_info() {
        let mut rs = people();
        assert_eq!(rs.count(), 2);
        rs.info_mut().count = Some(50);
        assert_eq!(rs.count(), 50);
    }

    #[test]
    fn insert_id_falls_back_to_first_row() {
        let mut rs = people();
        assert_eq!(rs.insert_id(), Some(7));
        rs.info_mut().insert_id = Some(21);
        assert_eq!(rs.insert_id(), Some(21));
        assert_eq!(ResultSet::default().insert_id(), None);
    }

    #[test]
    fn affected_rows_only_from_info() {
        let rs = ResultSet::from_info(ResultInfo {
            affected_rows: Some(3),
            ..ResultInfo::default()
        });
        assert_eq!(rs.affected_rows(), Some(3));
        assert_eq!(people().affected_rows(), None);
    }

    #[test]
    fn rejects_misshapen_rows() {
        let mut rs = ResultSet::default();
        assert!(rs.add_row_values(vec![DecodedValue::Null]).is_err());
        let mut rs = ResultSet::with_columns(vec!["a".into()]);
        assert!(rs.add_row_values(vec![]).is_err());
    }
}
