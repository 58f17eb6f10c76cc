//! Folder path tokenization.
//!
//! Folder placement strings are split into segments on `/`. There is no
//! normalization beyond dropping empty tokens: `.` and `..` are ordinary
//! folder names, and dots inside a segment carry no meaning. These are
//! display paths inside a document, not filesystem paths.

/// Splits a raw folder path into its segments.
///
/// Empty tokens produced by leading, trailing, or repeated separators are
/// dropped, so `""` and `"/"` both tokenize to nothing and `"/A//B/"` names
/// the same chain as `"A/B"`.
///
/// # Examples
///
/// ```
/// use gateway_postman_collection::path::segments;
///
/// assert_eq!(segments("/A/B"), ["A", "B"]);
/// assert_eq!(segments("A/B"), ["A", "B"]);
/// assert_eq!(segments("/A//B/"), ["A", "B"]);
/// assert!(segments("/").is_empty());
/// assert_eq!(segments("../../A/B/"), ["..", "..", "A", "B"]);
/// ```
#[must_use]
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}
