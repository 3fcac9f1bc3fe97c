//! Calendar helpers shared by aggregation and filtering.

use chrono::{Datelike, NaiveDate};

/// Returns `true` when both dates fall in the same calendar month of the same year.
pub fn same_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}
