// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Validation failures raised while normalizing an uploaded ledger table.
/// All of these are user-correctable: the upload produced no summary and
/// no side effects.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("missing required columns: {missing}")]
    MissingColumns { missing: String },

    #[error("amount column must contain numeric values (row {row}: '{value}')")]
    InvalidAmount { row: usize, value: String },

    #[error("depreciation column must contain non-negative numeric values (row {row}: '{value}')")]
    InvalidDepreciation { row: usize, value: String },

    #[error("invalid csv: {0}")]
    Malformed(#[from] csv::Error),
}

/// Everything that can stop an analysis request. Validation problems keep
/// their `LedgerError` identity; quota and storage exits are distinct so the
/// request layer can map them to different status codes.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("limit reached")]
    QuotaExceeded,

    #[error("upload of {size} bytes exceeds the {cap} byte cap")]
    UploadTooLarge { size: u64, cap: u64 },

    #[error("organization {0} not found")]
    OrgNotFound(i64),

    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AnalysisError {
    /// True for errors the caller can fix by correcting the upload.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AnalysisError::Ledger(_) | AnalysisError::UploadTooLarge { .. }
        )
    }
}
