use crate::errors::ServerError;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use rusqlite::{params, Connection, OptionalExtension};
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

/// Sessions live for a week; after that the agent signs in again.
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7;

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// URL-safe random token. Only its SHA-256 hash is ever stored; the
/// raw value exists in the cookie and nowhere else.
fn generate_token() -> String {
    let mut raw = [0u8; 32];
    OsRng.fill_bytes(&mut raw);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw)
}

fn hash_token(token: &str) -> [u8; 32] {
    let digest = Sha256::digest(token.as_bytes());
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Compares two digests without short-circuiting on the first
/// mismatching byte.
fn digests_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Checks a submitted agent password against the configured one.
/// Both sides are hashed first and compared as digests.
pub fn verify_password(submitted: &str, configured: &str) -> bool {
    digests_equal(&hash_token(submitted), &hash_token(configured))
}

/// Creates a session row and returns the raw token for the cookie.
pub fn create_session(conn: &Connection, now: i64) -> Result<String, ServerError> {
    let token = generate_token();
    let hash = hash_token(&token);
    conn.execute(
        "INSERT INTO sessions (token_hash, created_at, expires_at) VALUES (?1, ?2, ?3)",
        params![hash.as_slice(), now, now + SESSION_TTL_SECS],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;
    Ok(token)
}

/// True when the token maps to an unexpired, unrevoked session.
pub fn session_is_live(conn: &Connection, raw_token: &str, now: i64) -> Result<bool, ServerError> {
    let hash = hash_token(raw_token);
    let found: Option<i64> = conn
        .query_row(
            "SELECT id FROM sessions
             WHERE token_hash = ?1 AND expires_at > ?2 AND revoked_at IS NULL",
            params![hash.as_slice(), now],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))?;
    Ok(found.is_some())
}

/// Marks the session revoked; the cookie stops working immediately.
pub fn revoke_session(conn: &Connection, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let hash = hash_token(raw_token);
    conn.execute(
        "UPDATE sessions SET revoked_at = ?1 WHERE token_hash = ?2 AND revoked_at IS NULL",
        params![now, hash.as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;
    Ok(())
}
