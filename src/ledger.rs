// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use csv::ReaderBuilder;

use crate::error::LedgerError;

/// Closed classification of a ledger row. Anything outside the four known
/// categories lands in `Unrecognized`, which contributes to no total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Asset,
    Liability,
    Revenue,
    Expense,
    Unrecognized,
}

impl RowKind {
    fn classify(raw: &str) -> RowKind {
        match raw.trim().to_lowercase().as_str() {
            "asset" => RowKind::Asset,
            "liability" => RowKind::Liability,
            "revenue" => RowKind::Revenue,
            "expense" => RowKind::Expense,
            _ => RowKind::Unrecognized,
        }
    }
}

/// Whether the row settles within one operating cycle. Only the literal
/// subtype "non-current" selects `NonCurrent`; everything else, including a
/// missing subtype column, is treated as current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifespan {
    Current,
    NonCurrent,
}

impl Lifespan {
    fn classify(raw: &str) -> Lifespan {
        if raw.trim().to_lowercase() == "non-current" {
            Lifespan::NonCurrent
        } else {
            Lifespan::Current
        }
    }
}

/// One validated line of an uploaded ledger table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerRow {
    pub kind: RowKind,
    pub lifespan: Lifespan,
    pub amount: f64,
    pub depreciation: f64,
}

struct Columns {
    kind: usize,
    subtype: Option<usize>,
    amount: usize,
    depreciation: Option<usize>,
}

fn resolve_columns(headers: &csv::StringRecord) -> Result<Columns, LedgerError> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };

    let (kind, amount) = match (find("type"), find("amount")) {
        (Some(kind), Some(amount)) => (kind, amount),
        (kind, amount) => {
            let mut missing: Vec<&str> = Vec::new();
            if amount.is_none() {
                missing.push("amount");
            }
            if kind.is_none() {
                missing.push("type");
            }
            missing.sort_unstable();
            return Err(LedgerError::MissingColumns {
                missing: missing.join(", "),
            });
        }
    };

    Ok(Columns {
        kind,
        subtype: find("subtype"),
        amount,
        depreciation: find("depreciation"),
    })
}

fn parse_amount(raw: &str, row: usize) -> Result<f64, LedgerError> {
    let err = || LedgerError::InvalidAmount {
        row,
        value: raw.trim().to_string(),
    };
    let value = raw.trim().parse::<f64>().map_err(|_| err())?;
    if value.is_nan() {
        return Err(err());
    }
    Ok(value)
}

fn parse_depreciation(raw: &str, row: usize) -> Result<f64, LedgerError> {
    let err = || LedgerError::InvalidDepreciation {
        row,
        value: raw.trim().to_string(),
    };
    let value = raw.trim().parse::<f64>().map_err(|_| err())?;
    if value < 0.0 || value.is_nan() {
        return Err(err());
    }
    Ok(value)
}

/// Validate a headered CSV table into canonical ledger rows.
///
/// The schema is resolved up front: `type` and `amount` columns are
/// mandatory, `subtype` and `depreciation` optional. Every `amount` cell
/// must be numeric; when the `depreciation` column exists every one of its
/// cells must be a non-negative number. The input bytes are only read,
/// never rewritten.
pub fn normalize(input: &[u8]) -> Result<Vec<LedgerRow>, LedgerError> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(input);
    let columns = resolve_columns(rdr.headers()?)?;

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let rec = result?;
        // Row numbers in errors are 1-based data rows, header excluded.
        let row = idx + 1;

        let kind = RowKind::classify(rec.get(columns.kind).unwrap_or(""));
        let lifespan = match columns.subtype {
            Some(i) => Lifespan::classify(rec.get(i).unwrap_or("")),
            None => Lifespan::Current,
        };
        let amount = parse_amount(rec.get(columns.amount).unwrap_or(""), row)?;
        let depreciation = match columns.depreciation {
            Some(i) => parse_depreciation(rec.get(i).unwrap_or(""), row)?,
            None => 0.0,
        };

        rows.push(LedgerRow {
            kind,
            lifespan,
            amount,
            depreciation,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_case_insensitive_and_trimmed() {
        assert_eq!(RowKind::classify("  ASSET "), RowKind::Asset);
        assert_eq!(RowKind::classify("Liability"), RowKind::Liability);
        assert_eq!(RowKind::classify("goodwill"), RowKind::Unrecognized);
        assert_eq!(Lifespan::classify(" NON-CURRENT "), Lifespan::NonCurrent);
        assert_eq!(Lifespan::classify("current"), Lifespan::Current);
        assert_eq!(Lifespan::classify(""), Lifespan::Current);
    }

    #[test]
    fn missing_columns_are_listed_sorted() {
        let err = normalize(b"category,value\nasset,10\n").unwrap_err();
        match err {
            LedgerError::MissingColumns { missing } => assert_eq!(missing, "amount, type"),
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn absent_optional_columns_take_defaults() {
        let rows = normalize(b"type,amount\nasset,10.5\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].lifespan, Lifespan::Current);
        assert_eq!(rows[0].depreciation, 0.0);
        assert_eq!(rows[0].amount, 10.5);
    }

    #[test]
    fn blank_amount_is_invalid() {
        let err = normalize(b"type,amount\nasset,\n").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount { row: 1, .. }));
    }
}
