// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod users;
pub mod analyze;
pub mod apikey;
pub mod analytics;
pub mod doctor;
