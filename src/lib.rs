// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod cli;
pub mod db;
pub mod error;
pub mod ledger;
pub mod models;
pub mod service;
pub mod store;
pub mod summary;
pub mod utils;
pub mod commands;
