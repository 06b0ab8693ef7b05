//! SQLite identity store.
//!
//! Single source of truth for accounts and their progression state.
//! WAL mode for concurrent read access; all writes go through `save`.
//! Credentials are salted SHA-256 — one random salt per account.

use rand::RngCore;
use rusqlite::{Connection, OptionalExtension, params};
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::{Achievement, Profile, PromptAnalysisResult, ResultId};
use crate::progress::catalog;

/// Storage backend. Owns the SQLite connection.
pub struct IdentityStore {
    conn: Connection,
}

impl IdentityStore {
    /// Open or create a database at the given path.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.init()?;
        Ok(store)
    }

    /// Create an in-memory database (for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { conn };
        store.init()?;
        Ok(store)
    }

    fn init(&mut self) -> Result<()> {
        // WAL mode for concurrent readers
        self.conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        self.conn.execute_batch("PRAGMA foreign_keys=ON;")?;

        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS accounts (
                id              TEXT PRIMARY KEY,
                username        TEXT NOT NULL UNIQUE,
                email           TEXT NOT NULL UNIQUE,
                password_hash   TEXT NOT NULL,
                salt            TEXT NOT NULL,
                created_at      TEXT NOT NULL,
                total_xp        INTEGER NOT NULL DEFAULT 0,
                level           INTEGER NOT NULL DEFAULT 1,
                current_streak  INTEGER NOT NULL DEFAULT 0,
                best_streak     INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS unlocked_achievements (
                account_id      TEXT NOT NULL REFERENCES accounts(id),
                achievement_id  TEXT NOT NULL,
                unlocked_at     TEXT NOT NULL,
                PRIMARY KEY (account_id, achievement_id)
            );

            CREATE TABLE IF NOT EXISTS prompt_history (
                id              TEXT PRIMARY KEY,
                account_id      TEXT NOT NULL REFERENCES accounts(id),
                position        INTEGER NOT NULL,
                prompt          TEXT NOT NULL,
                analysis        TEXT NOT NULL,
                timestamp       TEXT NOT NULL,
                xp_earned       INTEGER NOT NULL,
                unlocked_ids    TEXT NOT NULL DEFAULT '[]'
            );

            CREATE INDEX IF NOT EXISTS idx_history_account
                ON prompt_history(account_id, position);
            ",
        )?;

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Accounts
    // -----------------------------------------------------------------------

    /// Create a new account with a fresh progression state.
    pub fn create_account(
        &mut self,
        username: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<Profile> {
        if username.is_empty() || email.is_empty() || password.expose_secret().is_empty() {
            return Err(Error::Contract("all fields are required".to_string()));
        }
        if password.expose_secret().len() < 6 {
            return Err(Error::Contract(
                "password must be at least 6 characters".to_string(),
            ));
        }

        if self.username_exists(username)? {
            return Err(Error::Duplicate("username already exists".to_string()));
        }
        if self.email_exists(email)? {
            return Err(Error::Duplicate("email already registered".to_string()));
        }

        let profile = Profile::new(username, email);
        let salt = random_salt();
        let hash = hash_password(&salt, password);

        self.conn.execute(
            "INSERT INTO accounts (
                id, username, email, password_hash, salt, created_at,
                total_xp, level, current_streak, best_streak
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                profile.id.to_string(),
                profile.username,
                profile.email,
                hash,
                salt,
                profile.created_at.to_rfc3339(),
                profile.total_xp,
                profile.level,
                profile.current_streak,
                profile.best_streak,
            ],
        )?;

        Ok(profile)
    }

    /// Verify credentials and load the full profile.
    pub fn verify(&self, username: &str, password: &SecretString) -> Result<Profile> {
        let row: Option<(String, String, String)> = self
            .conn
            .query_row(
                "SELECT id, password_hash, salt FROM accounts WHERE username = ?1",
                params![username],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        let Some((id, stored_hash, salt)) = row else {
            return Err(Error::InvalidCredentials);
        };

        if hash_password(&salt, password) != stored_hash {
            return Err(Error::InvalidCredentials);
        }

        let uuid = parse_uuid(&id)?;
        self.load(uuid)?
            .ok_or_else(|| Error::NotFound(username.to_string()))
    }

    /// Load a profile by account id. Returns None when absent.
    pub fn load(&self, id: Uuid) -> Result<Option<Profile>> {
        let row = self
            .conn
            .query_row(
                "SELECT username, email, created_at, total_xp, level,
                        current_streak, best_streak
                 FROM accounts WHERE id = ?1",
                params![id.to_string()],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, u32>(3)?,
                        row.get::<_, u32>(4)?,
                        row.get::<_, u32>(5)?,
                        row.get::<_, u32>(6)?,
                    ))
                },
            )
            .optional()?;

        let Some((username, email, created_at, total_xp, level, current_streak, best_streak)) = row
        else {
            return Ok(None);
        };

        Ok(Some(Profile {
            id,
            username,
            email,
            created_at: created_at
                .parse()
                .map_err(|e| Error::Other(format!("bad created_at row: {e}")))?,
            total_xp,
            level,
            current_streak,
            best_streak,
            achievements: self.load_achievements(id)?,
            prompt_history: self.load_history(id)?,
        }))
    }

    /// Look up a profile by username. Returns None when absent.
    pub fn find_by_username(&self, username: &str) -> Result<Option<Profile>> {
        let id: Option<String> = self
            .conn
            .query_row(
                "SELECT id FROM accounts WHERE username = ?1",
                params![username],
                |row| row.get(0),
            )
            .optional()?;

        match id {
            Some(id) => self.load(parse_uuid(&id)?),
            None => Ok(None),
        }
    }

    /// Persist a profile: account counters overwritten, achievements
    /// and history rows appended idempotently (both are append-only).
    pub fn save(&mut self, profile: &Profile) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "UPDATE accounts SET total_xp = ?1, level = ?2,
                    current_streak = ?3, best_streak = ?4
             WHERE id = ?5",
            params![
                profile.total_xp,
                profile.level,
                profile.current_streak,
                profile.best_streak,
                profile.id.to_string(),
            ],
        )?;

        for achievement in &profile.achievements {
            tx.execute(
                "INSERT OR IGNORE INTO unlocked_achievements
                    (account_id, achievement_id, unlocked_at)
                 VALUES (?1, ?2, ?3)",
                params![
                    profile.id.to_string(),
                    achievement.id,
                    achievement.unlocked_at.to_rfc3339(),
                ],
            )?;
        }

        for (position, entry) in profile.prompt_history.iter().enumerate() {
            let unlocked_ids: Vec<&str> = entry
                .achievements_unlocked
                .iter()
                .map(|a| a.id.as_str())
                .collect();

            tx.execute(
                "INSERT OR IGNORE INTO prompt_history
                    (id, account_id, position, prompt, analysis,
                     timestamp, xp_earned, unlocked_ids)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    entry.id.0.to_string(),
                    profile.id.to_string(),
                    position as i64,
                    entry.prompt,
                    serde_json::to_string(&entry.analysis)
                        .map_err(|e| Error::Other(format!("serialize analysis: {e}")))?,
                    entry.timestamp.to_rfc3339(),
                    entry.xp_earned,
                    serde_json::to_string(&unlocked_ids)
                        .map_err(|e| Error::Other(format!("serialize unlock ids: {e}")))?,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Row loading
    // -----------------------------------------------------------------------

    fn load_achievements(&self, account_id: Uuid) -> Result<Vec<Achievement>> {
        let mut stmt = self.conn.prepare(
            "SELECT achievement_id, unlocked_at FROM unlocked_achievements
             WHERE account_id = ?1 ORDER BY unlocked_at ASC",
        )?;

        let rows = stmt
            .query_map(params![account_id.to_string()], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        // Definitions live in the catalog; the store only keeps the id
        // and unlock time. Ids no longer in the catalog are dropped.
        let mut achievements = Vec::new();
        for (id, unlocked_at) in rows {
            if let Some(def) = catalog::by_id(&id) {
                let at = unlocked_at
                    .parse()
                    .map_err(|e| Error::Other(format!("bad unlocked_at row: {e}")))?;
                achievements.push(def.unlock(at));
            }
        }
        Ok(achievements)
    }

    fn load_history(&self, account_id: Uuid) -> Result<Vec<PromptAnalysisResult>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, prompt, analysis, timestamp, xp_earned, unlocked_ids
             FROM prompt_history WHERE account_id = ?1 ORDER BY position ASC",
        )?;

        let rows = stmt
            .query_map(params![account_id.to_string()], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, u32>(4)?,
                    row.get::<_, String>(5)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut history = Vec::new();
        for (id, prompt, analysis, timestamp, xp_earned, unlocked_ids) in rows {
            let analysis = serde_json::from_str(&analysis)
                .map_err(|e| Error::Other(format!("bad analysis row: {e}")))?;
            let timestamp = timestamp
                .parse()
                .map_err(|e| Error::Other(format!("bad timestamp row: {e}")))?;

            let ids: Vec<String> = serde_json::from_str(&unlocked_ids).unwrap_or_default();
            let achievements_unlocked = ids
                .iter()
                .filter_map(|aid| catalog::by_id(aid))
                .map(|def| def.unlock(timestamp))
                .collect();

            history.push(PromptAnalysisResult {
                id: ResultId(parse_uuid(&id)?),
                prompt,
                analysis,
                timestamp,
                xp_earned,
                achievements_unlocked,
            });
        }
        Ok(history)
    }

    fn username_exists(&self, username: &str) -> Result<bool> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM accounts WHERE username = ?1",
                params![username],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn email_exists(&self, email: &str) -> Result<bool> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM accounts WHERE email = ?1",
                params![email],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }
}

// ---------------------------------------------------------------------------
// Credential helpers
// ---------------------------------------------------------------------------

fn random_salt() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

fn hash_password(salt: &str, password: &SecretString) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.expose_secret().as_bytes());
    hex::encode(hasher.finalize())
}

fn parse_uuid(s: &str) -> Result<Uuid> {
    s.parse()
        .map_err(|e: uuid::Error| Error::Other(format!("bad uuid in store: {e}")))
}
