//! Sheet URL validation and normalization.

use reqwest::Url;

/// Error validating a source sheet URL.
///
/// The only caller-input failure class in the service: everything
/// downstream of a valid URL is the upstream document's fault.
#[derive(Debug, thiserror::Error)]
pub enum SheetUrlError {
    #[error("invalid URL: {0}")]
    Invalid(String),

    #[error("URL scheme must be http or https")]
    Scheme,

    #[error("URL path must end with /export")]
    NotExport,

    #[error("URL must carry the format=csv query parameter")]
    NotCsv,
}

/// Validate a sheet URL, rewriting the Google Sheets `/edit` form into
/// its CSV export equivalent.
///
/// Existing query parameters (such as `gid`) are preserved. The result
/// is guaranteed to end in `/export` and carry `format=csv`.
pub fn normalize_sheet_url(raw: &str) -> Result<Url, SheetUrlError> {
    let mut url = Url::parse(raw).map_err(|error| SheetUrlError::Invalid(error.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(SheetUrlError::Scheme);
    }

    let edit_base = url.path().strip_suffix("/edit").map(str::to_owned);
    if let Some(base) = edit_base {
        url.set_path(&format!("{}/export", base));

        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(name, _)| name != "format")
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (name, value) in &kept {
            pairs.append_pair(name, value);
        }
        pairs.append_pair("format", "csv");
    }

    if !url.path().trim_end_matches('/').ends_with("/export") {
        return Err(SheetUrlError::NotExport);
    }
    let has_csv_format = url
        .query_pairs()
        .any(|(name, value)| name == "format" && value == "csv");
    if !has_csv_format {
        return Err(SheetUrlError::NotCsv);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_url_is_rewritten_to_export() {
        let url = normalize_sheet_url("https://docs.google.com/spreadsheets/d/abc123/edit")
            .expect("edit URL accepted");
        assert_eq!(url.path(), "/spreadsheets/d/abc123/export");
        assert_eq!(url.query(), Some("format=csv"));
    }

    #[test]
    fn test_edit_url_keeps_other_query_params() {
        let url = normalize_sheet_url("https://docs.google.com/spreadsheets/d/abc123/edit?gid=42")
            .expect("edit URL accepted");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        assert!(pairs.contains(&("gid".to_owned(), "42".to_owned())));
        assert!(pairs.contains(&("format".to_owned(), "csv".to_owned())));
    }

    #[test]
    fn test_export_url_passes_through() {
        let raw = "https://docs.google.com/spreadsheets/d/abc123/export?format=csv&gid=0";
        let url = normalize_sheet_url(raw).expect("export URL accepted");
        assert_eq!(url.as_str(), raw);
    }

    #[test]
    fn test_export_without_csv_format_is_rejected() {
        let result =
            normalize_sheet_url("https://docs.google.com/spreadsheets/d/abc123/export?format=xlsx");
        assert!(matches!(result, Err(SheetUrlError::NotCsv)));

        let result = normalize_sheet_url("https://docs.google.com/spreadsheets/d/abc123/export");
        assert!(matches!(result, Err(SheetUrlError::NotCsv)));
    }

    #[test]
    fn test_non_export_path_is_rejected() {
        let result =
            normalize_sheet_url("https://docs.google.com/spreadsheets/d/abc123/view?format=csv");
        assert!(matches!(result, Err(SheetUrlError::NotExport)));
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        let result = normalize_sheet_url("ftp://example.com/export?format=csv");
        assert!(matches!(result, Err(SheetUrlError::Scheme)));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            normalize_sheet_url("not a url"),
            Err(SheetUrlError::Invalid(_))
        ));
    }
}
