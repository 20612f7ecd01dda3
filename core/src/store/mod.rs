//! SQLite persistence layer, the data sink.
//!
//! RULE: Only the store talks to the database. Generators produce
//! in-memory batches and never execute SQL; every cross-entity
//! reference is resolved before the write phase begins, so the batch
//! insert is one flat transaction with no mid-transaction lookups.

use crate::catalog::{Plan, PlanCatalog};
use crate::error::GenResult;
use rusqlite::{params, Connection};

mod batch;

pub struct DataStore {
    conn: Connection,
}

impl DataStore {
    pub fn open(path: &str) -> GenResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only matters for real files (:memory: ignores it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> GenResult<Self> {
        let conn = Connection::open(":memory:")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply the schema.
    pub fn migrate(&self) -> GenResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_schema.sql"))?;
        Ok(())
    }

    // ── Run bookkeeping ────────────────────────────────────────

    pub fn insert_run(&self, run_id: &str, seed: u64, version: &str) -> GenResult<()> {
        self.conn.execute(
            "INSERT INTO generation_run (run_id, seed, version, started_at)
             VALUES (?1, ?2, ?3, datetime('now'))",
            params![run_id, seed as i64, version],
        )?;
        Ok(())
    }

    // ── Plan catalog ───────────────────────────────────────────

    /// Seed the two standard tiers when the table is empty, so a fresh
    /// database is immediately usable.
    pub fn seed_default_plans(&self) -> GenResult<()> {
        let existing: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM plans", [], |row| row.get(0))?;
        if existing > 0 {
            return Ok(());
        }
        self.conn.execute(
            "INSERT INTO plans (id, label, monthly_price) VALUES
             (1, 'Canalbox Start 50 Mbps', 15000),
             (2, 'Canalbox Max 200 Mbps', 30000)",
            [],
        )?;
        log::info!("seeded default plan catalog");
        Ok(())
    }

    pub fn load_catalog(&self) -> GenResult<PlanCatalog> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, label, monthly_price FROM plans ORDER BY id")?;
        let plans = stmt
            .query_map([], |row| {
                Ok(Plan {
                    id: row.get(0)?,
                    label: row.get(1)?,
                    monthly_price: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        PlanCatalog::new(plans)
    }

    // ── Counts (run summary and tests) ─────────────────────────

    pub fn agent_count(&self) -> GenResult<i64> {
        self.count("SELECT COUNT(*) FROM agents")
    }

    pub fn technician_count(&self) -> GenResult<i64> {
        self.count("SELECT COUNT(*) FROM technicians")
    }

    pub fn client_count(&self) -> GenResult<i64> {
        self.count("SELECT COUNT(*) FROM clients")
    }

    pub fn installation_count(&self) -> GenResult<i64> {
        self.count("SELECT COUNT(*) FROM installations")
    }

    pub fn subscription_count(&self) -> GenResult<i64> {
        self.count("SELECT COUNT(*) FROM subscriptions")
    }

    pub fn payment_count(&self) -> GenResult<i64> {
        self.count("SELECT COUNT(*) FROM payments")
    }

    pub fn feedback_count(&self) -> GenResult<i64> {
        self.count("SELECT COUNT(*) FROM feedback")
    }

    pub fn payment_total(&self) -> GenResult<i64> {
        self.count("SELECT COALESCE(SUM(amount), 0) FROM payments")
    }

    fn count(&self, sql: &str) -> GenResult<i64> {
        Ok(self.conn.query_row(sql, [], |row| row.get(0))?)
    }
}
