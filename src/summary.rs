// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

use crate::ledger::{LedgerRow, Lifespan, RowKind};

/// Balance-sheet-style totals for one analyzed ledger.
///
/// Sums are plain f64 accumulation with no currency rounding; that is a
/// known limitation of the product, not a defect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub revenue: f64,
    pub expenses: f64,
    pub current_assets: f64,
    pub non_current_assets_gross: f64,
    pub accumulated_depreciation: f64,
    pub net_non_current_assets: f64,
    pub total_assets: f64,
    pub current_liabilities: f64,
    pub non_current_liabilities: f64,
    pub total_liabilities: f64,
}

/// Fold normalized ledger rows into a summary.
///
/// Pure and total: no I/O, deterministic, never fails on normalized input.
/// Unrecognized row kinds contribute to no total. Depreciation is netted
/// against gross non-current assets and clamped so net book value never
/// goes below zero; over-depreciation is absorbed silently.
pub fn summarize(rows: &[LedgerRow]) -> FinancialSummary {
    let mut s = FinancialSummary::default();

    for row in rows {
        match (row.kind, row.lifespan) {
            (RowKind::Asset, Lifespan::Current) => s.current_assets += row.amount,
            (RowKind::Asset, Lifespan::NonCurrent) => {
                s.non_current_assets_gross += row.amount;
                s.accumulated_depreciation += row.depreciation;
            }
            (RowKind::Liability, Lifespan::Current) => s.current_liabilities += row.amount,
            (RowKind::Liability, Lifespan::NonCurrent) => s.non_current_liabilities += row.amount,
            (RowKind::Revenue, _) => s.revenue += row.amount,
            (RowKind::Expense, _) => s.expenses += row.amount,
            (RowKind::Unrecognized, _) => {}
        }
    }

    s.net_non_current_assets =
        (s.non_current_assets_gross - s.accumulated_depreciation).max(0.0);
    s.total_assets = s.current_assets + s.net_non_current_assets;
    s.total_liabilities = s.current_liabilities + s.non_current_liabilities;
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(kind: RowKind, lifespan: Lifespan, amount: f64, depreciation: f64) -> LedgerRow {
        LedgerRow {
            kind,
            lifespan,
            amount,
            depreciation,
        }
    }

    #[test]
    fn depreciation_nets_only_non_current_assets() {
        let rows = [
            row(RowKind::Asset, Lifespan::NonCurrent, 1000.0, 200.0),
            row(RowKind::Asset, Lifespan::Current, 500.0, 0.0),
        ];
        let s = summarize(&rows);
        assert_eq!(s.current_assets, 500.0);
        assert_eq!(s.non_current_assets_gross, 1000.0);
        assert_eq!(s.accumulated_depreciation, 200.0);
        assert_eq!(s.net_non_current_assets, 800.0);
        assert_eq!(s.total_assets, 1300.0);
    }

    #[test]
    fn over_depreciation_clamps_to_zero() {
        let rows = [row(RowKind::Asset, Lifespan::NonCurrent, 1000.0, 1500.0)];
        let s = summarize(&rows);
        assert_eq!(s.net_non_current_assets, 0.0);
        assert_eq!(s.total_assets, 0.0);
    }

    #[test]
    fn revenue_and_expense_ignore_lifespan() {
        let rows = [
            row(RowKind::Revenue, Lifespan::NonCurrent, 100.0, 0.0),
            row(RowKind::Expense, Lifespan::Current, 40.0, 0.0),
        ];
        let s = summarize(&rows);
        assert_eq!(s.revenue, 100.0);
        assert_eq!(s.expenses, 40.0);
        assert_eq!(s.total_assets, 0.0);
        assert_eq!(s.total_liabilities, 0.0);
    }

    #[test]
    fn unrecognized_kinds_change_nothing() {
        let base = [row(RowKind::Liability, Lifespan::Current, 75.0, 0.0)];
        let with_noise = [
            row(RowKind::Liability, Lifespan::Current, 75.0, 0.0),
            row(RowKind::Unrecognized, Lifespan::Current, 9999.0, 0.0),
            row(RowKind::Unrecognized, Lifespan::NonCurrent, -50.0, 0.0),
        ];
        assert_eq!(summarize(&base), summarize(&with_noise));
    }

    #[test]
    fn summarize_is_deterministic() {
        let rows = [
            row(RowKind::Asset, Lifespan::NonCurrent, 0.1, 0.03),
            row(RowKind::Revenue, Lifespan::Current, 0.2, 0.0),
        ];
        let a = summarize(&rows);
        let b = summarize(&rows);
        assert_eq!(a, b);
    }
}
