//! Request parameters resolved into a single row predicate.
//!
//! Listing, report, and export paths all go through [`TransactionFilter::resolve`]
//! so the same parameters always select the same rows.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use cardledger_shared::AppError;
use cardledger_shared::types::CardId;

use crate::records::{TransactionKind, TransactionRecord};

/// Errors raised while resolving filter parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A date bound is not a recognised date or timestamp.
    #[error("{field}: malformed date bound {value:?}")]
    MalformedBound {
        /// Parameter name (`start` or `end`).
        field: &'static str,
        /// Raw value received.
        value: String,
    },

    /// The kind parameter is neither `credit` nor `debit`.
    #[error("kind: unknown transaction kind {0:?}")]
    UnknownKind(String),

    /// The card parameter is not a UUID.
    #[error("cardId: malformed card id {0:?}")]
    MalformedCardId(String),
}

impl From<FilterError> for AppError {
    fn from(err: FilterError) -> Self {
        Self::InvalidFilter(err.to_string())
    }
}

/// Raw filter parameters as received on the query string.
///
/// Empty or whitespace-only values are treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    /// Inclusive lower date bound.
    pub start: Option<String>,
    /// Inclusive upper date bound.
    pub end: Option<String>,
    /// Card to restrict to.
    #[serde(rename = "cardId")]
    pub card_id: Option<String>,
    /// `credit` or `debit`.
    #[serde(alias = "type")]
    pub kind: Option<String>,
    /// Free-text search term.
    pub q: Option<String>,
}

impl FilterParams {
    /// Returns the start bound, if present.
    #[must_use]
    pub fn start(&self) -> Option<&str> {
        present(self.start.as_deref())
    }

    /// Returns the end bound, if present.
    #[must_use]
    pub fn end(&self) -> Option<&str> {
        present(self.end.as_deref())
    }

    /// Returns the card id, if present.
    #[must_use]
    pub fn card_id(&self) -> Option<&str> {
        present(self.card_id.as_deref())
    }

    /// Returns the kind, if present.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        present(self.kind.as_deref())
    }

    /// Returns the search term, if present.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        present(self.q.as_deref())
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Which side of the date range a bound sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Start,
    End,
}

impl Side {
    const fn field(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Resolved row predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Earliest matching instant, inclusive.
    pub occurred_from: Option<DateTime<Utc>>,
    /// Latest matching instant, inclusive.
    pub occurred_until: Option<DateTime<Utc>>,
    /// Exact card match.
    pub card_id: Option<CardId>,
    /// Exact kind match.
    pub kind: Option<TransactionKind>,
    /// Case-insensitive substring over vendor, counterparty, and description.
    pub search: Option<String>,
}

impl TransactionFilter {
    /// Resolves raw parameters into a predicate.
    ///
    /// A bare date as `end` covers the whole day.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] when any present parameter is malformed.
    pub fn resolve(params: &FilterParams) -> Result<Self, FilterError> {
        let occurred_from = params
            .start()
            .map(|raw| parse_bound(raw, Side::Start))
            .transpose()?;
        let occurred_until = params
            .end()
            .map(|raw| parse_bound(raw, Side::End))
            .transpose()?;
        let card_id = params
            .card_id()
            .map(|raw| {
                raw.parse::<CardId>()
                    .map_err(|_| FilterError::MalformedCardId(raw.to_string()))
            })
            .transpose()?;
        let kind = params
            .kind()
            .map(|raw| {
                raw.parse::<TransactionKind>()
                    .map_err(|_| FilterError::UnknownKind(raw.to_string()))
            })
            .transpose()?;

        Ok(Self {
            occurred_from,
            occurred_until,
            card_id,
            kind,
            search: params.query().map(str::to_string),
        })
    }

    /// Tests a record against every active constraint.
    #[must_use]
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        if self.occurred_from.is_some_and(|from| record.occurred_at < from) {
            return false;
        }
        if self.occurred_until.is_some_and(|until| record.occurred_at > until) {
            return false;
        }
        if self.card_id.is_some_and(|id| record.card.id != id) {
            return false;
        }
        if self.kind.is_some_and(|kind| record.kind != kind) {
            return false;
        }
        match &self.search {
            Some(term) => {
                let needle = term.to_lowercase();
                [&record.vendor, &record.counterparty, &record.description]
                    .into_iter()
                    .flatten()
                    .any(|text| text.to_lowercase().contains(&needle))
            }
            None => true,
        }
    }
}

fn parse_bound(raw: &str, side: Side) -> Result<DateTime<Utc>, FilterError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Ok(naive.and_utc());
        }
    }

    let malformed = || FilterError::MalformedBound {
        field: side.field(),
        value: raw.to_string(),
    };
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| malformed())?;
    let naive = match side {
        Side::Start => date.and_hms_opt(0, 0, 0),
        Side::End => date.and_hms_nano_opt(23, 59, 59, 999_999_999),
    };
    naive.map(|n| n.and_utc()).ok_or_else(malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::records::CardRef;

    fn params() -> FilterParams {
        FilterParams::default()
    }

    fn record(at: DateTime<Utc>, kind: TransactionKind) -> TransactionRecord {
        TransactionRecord {
            id: cardledger_shared::types::TransactionId::from_uuid(Uuid::nil()),
            kind,
            amount: dec!(10),
            occurred_at: at,
            category: None,
            vendor: Some("Coffee Corner".to_string()),
            counterparty: None,
            description: Some("Team lunch, downtown".to_string()),
            card: CardRef::bare(CardId::from_uuid(Uuid::from_u128(7))),
        }
    }

    #[test]
    fn test_empty_params_resolve_to_empty_filter() {
        let filter = TransactionFilter::resolve(&params()).unwrap();
        assert_eq!(filter, TransactionFilter::default());
    }

    #[test]
    fn test_blank_params_count_as_absent() {
        let p = FilterParams {
            start: Some("  ".to_string()),
            kind: Some(String::new()),
            q: Some(" ".to_string()),
            ..params()
        };
        assert_eq!(
            TransactionFilter::resolve(&p).unwrap(),
            TransactionFilter::default()
        );
    }

    #[rstest]
    #[case("2024-01-15", Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())]
    #[case("2024-01-15T08:30", Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap())]
    #[case("2024-01-15T08:30:05", Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 5).unwrap())]
    #[case("2024-01-15T08:30:05+02:00", Utc.with_ymd_and_hms(2024, 1, 15, 6, 30, 5).unwrap())]
    fn test_start_bound_formats(#[case] raw: &str, #[case] expected: DateTime<Utc>) {
        let p = FilterParams {
            start: Some(raw.to_string()),
            ..params()
        };
        let filter = TransactionFilter::resolve(&p).unwrap();
        assert_eq!(filter.occurred_from, Some(expected));
    }

    #[test]
    fn test_bare_end_date_covers_whole_day() {
        let p = FilterParams {
            end: Some("2024-01-31".to_string()),
            ..params()
        };
        let filter = TransactionFilter::resolve(&p).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap();
        let next = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        assert!(filter.matches(&record(late, TransactionKind::Debit)));
        assert!(!filter.matches(&record(next, TransactionKind::Debit)));
    }

    #[rstest]
    #[case(FilterParams { start: Some("yesterday".into()), ..FilterParams::default() })]
    #[case(FilterParams { end: Some("2024-13-01".into()), ..FilterParams::default() })]
    #[case(FilterParams { kind: Some("refund".into()), ..FilterParams::default() })]
    #[case(FilterParams { card_id: Some("not-a-uuid".into()), ..FilterParams::default() })]
    fn test_malformed_params_are_rejected(#[case] p: FilterParams) {
        let err = TransactionFilter::resolve(&p).unwrap_err();
        assert!(matches!(AppError::from(err), AppError::InvalidFilter(_)));
    }

    #[test]
    fn test_malformed_bound_names_field() {
        let p = FilterParams {
            end: Some("soon".to_string()),
            ..params()
        };
        assert_eq!(
            TransactionFilter::resolve(&p).unwrap_err(),
            FilterError::MalformedBound {
                field: "end",
                value: "soon".to_string()
            }
        );
    }

    #[test]
    fn test_kind_and_card_match_exactly() {
        let p = FilterParams {
            card_id: Some(Uuid::from_u128(7).to_string()),
            kind: Some("Credit".to_string()),
            ..params()
        };
        let filter = TransactionFilter::resolve(&p).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert!(filter.matches(&record(at, TransactionKind::Credit)));
        assert!(!filter.matches(&record(at, TransactionKind::Debit)));

        let mut other_card = record(at, TransactionKind::Credit);
        other_card.card = CardRef::bare(CardId::from_uuid(Uuid::from_u128(8)));
        assert!(!filter.matches(&other_card));
    }

    #[rstest]
    #[case("coffee", true)]
    #[case("DOWNTOWN", true)]
    #[case("lunch, down", true)]
    #[case("airline", false)]
    fn test_search_is_case_insensitive_substring(#[case] term: &str, #[case] hit: bool) {
        let p = FilterParams {
            q: Some(term.to_string()),
            ..params()
        };
        let filter = TransactionFilter::resolve(&p).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(filter.matches(&record(at, TransactionKind::Debit)), hit);
    }

    #[test]
    fn test_type_alias_deserializes_into_kind() {
        let p: FilterParams = serde_json::from_str(r#"{"type":"debit","cardId":"x"}"#).unwrap();
        assert_eq!(p.kind(), Some("debit"));
        assert_eq!(p.card_id(), Some("x"));
    }
}
