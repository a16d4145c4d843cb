// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerdesk::ledger::normalize;
use ledgerdesk::summary::{summarize, FinancialSummary};

fn run(csv: &[u8]) -> FinancialSummary {
    summarize(&normalize(csv).unwrap())
}

#[test]
fn revenue_and_expense_only_ledger() {
    let s = run(b"type,amount\nrevenue,100\nexpense,40\n");
    assert_eq!(s.revenue, 100.0);
    assert_eq!(s.expenses, 40.0);
    assert_eq!(s.total_assets, 0.0);
    assert_eq!(s.total_liabilities, 0.0);
}

#[test]
fn depreciation_netting_on_non_current_assets() {
    let s = run(
        b"type,subtype,amount,depreciation\n\
          asset,non-current,1000,200\n\
          asset,,500,0\n",
    );
    assert_eq!(s.current_assets, 500.0);
    assert_eq!(s.non_current_assets_gross, 1000.0);
    assert_eq!(s.accumulated_depreciation, 200.0);
    assert_eq!(s.net_non_current_assets, 800.0);
    assert_eq!(s.total_assets, 1300.0);
}

#[test]
fn excess_depreciation_clamps_net_assets_at_zero() {
    let s = run(b"type,subtype,amount,depreciation\nasset,non-current,1000,1500\n");
    assert_eq!(s.net_non_current_assets, 0.0);
    assert_eq!(s.total_assets, 0.0);
}

#[test]
fn liability_split_by_subtype() {
    let s = run(
        b"type,subtype,amount\n\
          liability,,120\n\
          liability,non-current,300\n\
          liability,current,80\n",
    );
    assert_eq!(s.current_liabilities, 200.0);
    assert_eq!(s.non_current_liabilities, 300.0);
    assert_eq!(s.total_liabilities, 500.0);
}

#[test]
fn totals_always_reconcile() {
    let ledgers: [&[u8]; 4] = [
        b"type,amount\nrevenue,5\n",
        b"type,subtype,amount,depreciation\nasset,non-current,10,25\nasset,,3,0\n",
        b"type,subtype,amount\nliability,non-current,7\nliability,,2\nasset,,9\n",
        b"type,amount\nplumbing,42\n",
    ];
    for csv in ledgers {
        let s = run(csv);
        assert_eq!(s.total_assets, s.current_assets + s.net_non_current_assets);
        assert_eq!(
            s.total_liabilities,
            s.current_liabilities + s.non_current_liabilities
        );
        assert!(s.net_non_current_assets >= 0.0);
    }
}

#[test]
fn unrecognized_rows_leave_every_total_unchanged() {
    let base = run(b"type,amount\nrevenue,100\nasset,50\n");
    let noisy = run(b"type,amount\nrevenue,100\nasset,50\nequity,9999\nmisc,-77\n");
    assert_eq!(base, noisy);
}

#[test]
fn aggregation_is_bit_identical_across_calls() {
    let rows = normalize(
        b"type,subtype,amount,depreciation\n\
          asset,non-current,0.1,0.03\n\
          revenue,,0.2,0\n\
          expense,,0.1,0\n",
    )
    .unwrap();
    let a = summarize(&rows);
    let b = summarize(&rows);
    assert_eq!(a.revenue.to_bits(), b.revenue.to_bits());
    assert_eq!(a.total_assets.to_bits(), b.total_assets.to_bits());
    assert_eq!(a, b);
}

#[test]
fn serialized_report_uses_the_canonical_field_set() {
    let s = run(b"type,amount\nrevenue,100\n");
    let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&s).unwrap()).unwrap();
    let obj = json.as_object().unwrap();
    for field in [
        "revenue",
        "expenses",
        "current_assets",
        "non_current_assets_gross",
        "accumulated_depreciation",
        "net_non_current_assets",
        "total_assets",
        "current_liabilities",
        "non_current_liabilities",
        "total_liabilities",
    ] {
        assert!(obj.contains_key(field), "missing field {field}");
    }
    assert_eq!(obj.len(), 10);
    assert_eq!(obj["revenue"], 100.0);
}
