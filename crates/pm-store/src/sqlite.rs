//! SQLite summary backend (feature `sqlite`).
//!
//! Creates `markings.db` in the output directory with two tables:
//! `marking_summaries` and `marked_points`.

use std::path::Path;

use pm_nav::MarkingSummary;
use rusqlite::Connection;

use crate::StoreResult;
use crate::writer::SummaryWriter;

pub struct SqliteSummaryWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteSummaryWriter {
    /// Open (or create) `markings.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> StoreResult<Self> {
        let conn = Connection::open(dir.join("markings.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS marking_summaries (
                 summary_id      INTEGER PRIMARY KEY AUTOINCREMENT,
                 pitch_name      TEXT    NOT NULL,
                 rotation_deg    INTEGER NOT NULL,
                 completed_at_ms INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS marked_points (
                 summary_id   INTEGER NOT NULL REFERENCES marking_summaries(summary_id),
                 seq          INTEGER NOT NULL,
                 waypoint     TEXT    NOT NULL,
                 kind         TEXT    NOT NULL,
                 target_lat   REAL    NOT NULL,
                 target_lng   REAL    NOT NULL,
                 actual_lat   REAL    NOT NULL,
                 actual_lng   REAL    NOT NULL,
                 accuracy_m   REAL    NOT NULL,
                 timestamp_ms INTEGER NOT NULL,
                 PRIMARY KEY (summary_id, seq)
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl SummaryWriter for SqliteSummaryWriter {
    fn write_summary(&mut self, summary: &MarkingSummary) -> StoreResult<u64> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO marking_summaries (pitch_name, rotation_deg, completed_at_ms) \
             VALUES (?1, ?2, ?3)",
            rusqlite::params![
                summary.pitch_name,
                summary.rotation.degrees(),
                summary.completed_at.0,
            ],
        )?;
        let id = tx.last_insert_rowid();
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO marked_points \
                 (summary_id, seq, waypoint, kind, target_lat, target_lng, \
                  actual_lat, actual_lng, accuracy_m, timestamp_ms) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for (seq, point) in summary.marked_points.iter().enumerate() {
                let actual = &point.actual_location;
                stmt.execute(rusqlite::params![
                    id,
                    seq as i64,
                    point.waypoint.name,
                    point.waypoint.kind.as_str(),
                    point.waypoint.lat,
                    point.waypoint.lng,
                    actual.lat,
                    actual.lng,
                    actual.accuracy,
                    point.timestamp.0,
                ])?;
            }
        }
        tx.commit()?;
        Ok(id as u64)
    }

    fn finish(&mut self) -> StoreResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
