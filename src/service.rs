// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;

use crate::error::AnalysisError;
use crate::ledger;
use crate::models::User;
use crate::store;
use crate::summary::{self, FinancialSummary};

/// Analyses an organization may run before payment is required.
pub const FREE_USAGE_LIMIT: i64 = 5;

/// Fixed ceiling on uploaded ledger size, to bound aggregation cost.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Run one billable analysis for `user`'s organization.
///
/// Order matters: the quota is checked before any parsing is attempted, and
/// the successful path commits the usage increment, the Report row, and the
/// audit entry in a single transaction. The increment re-checks the limit
/// inside that transaction (`usage < limit` in the UPDATE itself), so two
/// concurrent requests racing past the read check cannot both bill the last
/// free unit.
///
/// Re-submitting the same file consumes another unit and stores another
/// Report; each call is billable.
pub fn analyze_ledger(
    conn: &mut Connection,
    user: &User,
    input: &[u8],
) -> Result<FinancialSummary, AnalysisError> {
    let org = store::get_organization(conn, user.org_id)?
        .ok_or(AnalysisError::OrgNotFound(user.org_id))?;
    if org.usage >= FREE_USAGE_LIMIT {
        return Err(AnalysisError::QuotaExceeded);
    }
    if input.len() as u64 > MAX_UPLOAD_BYTES {
        return Err(AnalysisError::UploadTooLarge {
            size: input.len() as u64,
            cap: MAX_UPLOAD_BYTES,
        });
    }

    let rows = ledger::normalize(input)?;
    let summary = summary::summarize(&rows);
    let data = serde_json::to_string(&summary)?;

    let tx = conn.transaction()?;
    if !store::increment_usage_if_below(&tx, org.id, FREE_USAGE_LIMIT)? {
        return Err(AnalysisError::QuotaExceeded);
    }
    store::append_report(&tx, org.id, &data)?;
    store::append_audit(&tx, user.id, "generated report")?;
    tx.commit()?;

    Ok(summary)
}
