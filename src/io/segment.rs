use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// Sub-directory of the storage root that holds debt segments.
pub const DEBT_DIR: &str = "debt";

/// Year-month label of the segment a timestamp belongs to, e.g. `2024-04`.
pub fn month_label(at: &NaiveDateTime) -> String {
    at.format("%Y-%m").to_string()
}

/// Path of the segment for the month of `at`:
/// `<root>/debt/<YYYY>/debt_<YYYY-MM>.csv`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use chrono::NaiveDate;
/// use debt_ledger::io::segment::segment_path;
///
/// let at = NaiveDate::from_ymd_opt(2024, 4, 5).unwrap().and_hms_opt(9, 30, 0).unwrap();
/// let path = segment_path(Path::new("data"), &at);
/// assert_eq!(path, Path::new("data/debt/2024/debt_2024-04.csv"));
/// ```
pub fn segment_path(root: &Path, at: &NaiveDateTime) -> PathBuf {
    root.join(DEBT_DIR)
        .join(at.format("%Y").to_string())
        .join(format!("debt_{}.csv", month_label(at)))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn same_month_maps_to_same_segment() {
        let root = Path::new("/srv/bot");
        assert_eq!(
            segment_path(root, &at(2024, 4, 1)),
            segment_path(root, &at(2024, 4, 30))
        );
    }

    #[test]
    fn month_and_year_rollover_change_segment() {
        let root = Path::new("/srv/bot");
        assert_eq!(
            segment_path(root, &at(2024, 12, 31)),
            Path::new("/srv/bot/debt/2024/debt_2024-12.csv")
        );
        assert_eq!(
            segment_path(root, &at(2025, 1, 1)),
            Path::new("/srv/bot/debt/2025/debt_2025-01.csv")
        );
    }

    #[test]
    fn label_is_zero_padded() {
        assert_eq!(month_label(&at(2024, 3, 9)), "2024-03");
    }
}
