//! Export formats, kinds, and the artifact they produce.

use std::str::FromStr;

use serde::Serialize;

use super::error::ExportError;

/// Output format selected by the `format` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-delimited text.
    Csv,
    /// Single-sheet workbook.
    Spreadsheet,
    /// Paginated document with charts.
    Document,
}

impl ExportFormat {
    /// Parses an optional format token; absent or blank means CSV.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnsupportedFormat`] for unknown tokens.
    pub fn from_param(token: Option<&str>) -> Result<Self, ExportError> {
        match token.map(str::trim).filter(|t| !t.is_empty()) {
            Some(t) => t.parse(),
            None => Ok(Self::Csv),
        }
    }

    /// MIME type sent as `Content-Type`.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv; charset=utf-8",
            Self::Spreadsheet => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            Self::Document => "application/pdf",
        }
    }

    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Spreadsheet => "xlsx",
            Self::Document => "pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "excel" => Ok(Self::Spreadsheet),
            "pdf" => Ok(Self::Document),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// What is being exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    /// One row per transaction.
    Transactions,
    /// One row per month bucket.
    Monthly,
    /// One row per expense category.
    Expenses,
}

impl ExportKind {
    /// Literal that starts every file name of this kind.
    #[must_use]
    pub const fn base_name(self) -> &'static str {
        match self {
            Self::Transactions => "transactions",
            Self::Monthly => "monthly",
            Self::Expenses => "expenses",
        }
    }

    /// Worksheet name.
    #[must_use]
    pub const fn sheet_name(self) -> &'static str {
        match self {
            Self::Transactions => "Transactions",
            Self::Monthly => "Monthly",
            Self::Expenses => "Expenses",
        }
    }
}

/// A rendered export, ready to stream.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    /// Value for `Content-Type`.
    pub mime_type: &'static str,
    /// File name including extension.
    pub filename: String,
    /// Encoded bytes.
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Value for `Content-Disposition`.
    #[must_use]
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, ExportFormat::Csv)]
    #[case(Some(""), ExportFormat::Csv)]
    #[case(Some("CSV"), ExportFormat::Csv)]
    #[case(Some("xlsx"), ExportFormat::Spreadsheet)]
    #[case(Some("Excel"), ExportFormat::Spreadsheet)]
    #[case(Some(" pdf "), ExportFormat::Document)]
    fn test_format_tokens(#[case] token: Option<&str>, #[case] expected: ExportFormat) {
        assert_eq!(ExportFormat::from_param(token).unwrap(), expected);
    }

    #[rstest]
    #[case("docx")]
    #[case("json")]
    #[case("xls")]
    fn test_unknown_format_is_rejected(#[case] token: &str) {
        let err = ExportFormat::from_param(Some(token)).unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedFormat(_)));
        assert!(matches!(
            cardledger_shared::AppError::from(err),
            cardledger_shared::AppError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn test_content_disposition_quotes_name() {
        let artifact = ExportArtifact {
            mime_type: ExportFormat::Csv.mime_type(),
            filename: "monthly-2024-01-01-00-00-00.csv".to_string(),
            bytes: Vec::new(),
        };
        assert_eq!(
            artifact.content_disposition(),
            "attachment; filename=\"monthly-2024-01-01-00-00-00.csv\""
        );
    }
}
