// Copyright (c) 2025 Ledgerdesk Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow, bail};
use chrono::{Duration, Utc};
use rand::RngCore;
use rusqlite::Connection;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::models::User;
use crate::store;

/// Sessions outlive a working day, not much more.
const SESSION_TTL_HOURS: i64 = 12;

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

pub fn hash_password(password: &str) -> Result<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).context("Hash password")
}

pub fn verify_password(password: &str, password_hash: &str) -> bool {
    bcrypt::verify(password, password_hash).unwrap_or(false)
}

/// SHA-256 hex digest, used for API keys and session tokens. One-way: the
/// stored column can never be turned back into the secret.
pub fn digest(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}

/// 24 random bytes as lowercase hex.
pub fn generate_secret() -> String {
    let mut buf = [0u8; 24];
    rand::thread_rng().fill_bytes(&mut buf);
    hex::encode(buf)
}

/// Mint a session for `user_id` and return the raw token. Only its digest
/// is persisted.
pub fn issue_session(conn: &Connection, user_id: i64) -> Result<String> {
    let token = generate_secret();
    let expires_at = Utc::now() + Duration::hours(SESSION_TTL_HOURS);
    store::insert_session(conn, user_id, &digest(&token), expires_at)
        .context("Record session")?;
    Ok(token)
}

pub fn user_for_token(conn: &Connection, token: &str) -> Result<Option<User>> {
    store::session_user(conn, &digest(token.trim())).context("Look up session")
}

/// Resolve a session token or fail the way every authenticated command
/// reports it.
pub fn require_user(conn: &Connection, token: &str) -> Result<User> {
    user_for_token(conn, token)?.ok_or_else(|| anyhow!("invalid token"))
}

/// Claims returned by Google's tokeninfo endpoint. Everything arrives as
/// strings.
#[derive(Debug, Deserialize)]
pub struct GoogleClaims {
    #[serde(default)]
    pub aud: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Verify a Google ID token against the tokeninfo endpoint. Enforces the
/// GOOGLE_CLIENT_ID audience when that variable is set, and requires a
/// verified email.
pub fn verify_google_credential(credential: &str) -> Result<GoogleClaims> {
    let client = crate::utils::http_client()?;
    let claims: GoogleClaims = client
        .get(TOKENINFO_URL)
        .query(&[("id_token", credential)])
        .send()
        .context("Reach Google tokeninfo")?
        .json()
        .context("Decode tokeninfo response")?;

    if claims.error.is_some() || claims.error_description.is_some() {
        bail!("invalid google credential");
    }

    let expected = std::env::var("GOOGLE_CLIENT_ID").unwrap_or_default();
    let expected = expected.trim();
    let audience = claims.aud.as_deref().unwrap_or("").trim();
    if !expected.is_empty() && audience != expected {
        bail!("google client mismatch");
    }

    match claims.email_verified.as_deref() {
        Some("true") | Some("True") => {}
        _ => bail!("google email is not verified"),
    }

    Ok(claims)
}
