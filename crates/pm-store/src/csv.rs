//! CSV summary backend.
//!
//! Creates two files in the output directory:
//! - `marking_summaries.csv`: one row per finished session
//! - `marked_points.csv`: one row per marked point, joined on `summary_id`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use pm_nav::MarkingSummary;

use crate::StoreResult;
use crate::writer::SummaryWriter;

pub const SUMMARY_HEADERS: [&str; 6] = [
    "summary_id",
    "pitch_name",
    "rotation_deg",
    "completed_at_ms",
    "point_count",
    "average_accuracy_m",
];

pub const POINT_HEADERS: [&str; 11] = [
    "summary_id",
    "waypoint",
    "type",
    "target_lat",
    "target_lng",
    "actual_lat",
    "actual_lng",
    "accuracy_m",
    "offset_m",
    "timestamp_ms",
    "seq",
];

pub struct CsvSummaryWriter {
    summaries: Writer<File>,
    points:    Writer<File>,
    next_id:   u64,
    finished:  bool,
}

impl CsvSummaryWriter {
    /// Create (truncating) both files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> StoreResult<Self> {
        let mut summaries = Writer::from_path(dir.join("marking_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        let mut points = Writer::from_path(dir.join("marked_points.csv"))?;
        points.write_record(POINT_HEADERS)?;

        Ok(Self { summaries, points, next_id: 1, finished: false })
    }
}

impl SummaryWriter for CsvSummaryWriter {
    fn write_summary(&mut self, summary: &MarkingSummary) -> StoreResult<u64> {
        let id = self.next_id;
        self.next_id += 1;

        self.summaries.write_record(&[
            id.to_string(),
            summary.pitch_name.clone(),
            summary.rotation.degrees().to_string(),
            summary.completed_at.0.to_string(),
            summary.marked_points.len().to_string(),
            summary.average_accuracy().map(|a| format!("{a:.2}")).unwrap_or_default(),
        ])?;

        for (seq, point) in summary.marked_points.iter().enumerate() {
            let actual = &point.actual_location;
            self.points.write_record(&[
                id.to_string(),
                point.waypoint.name.clone(),
                point.waypoint.kind.to_string(),
                format!("{:.7}", point.waypoint.lat),
                format!("{:.7}", point.waypoint.lng),
                format!("{:.7}", actual.lat),
                format!("{:.7}", actual.lng),
                format!("{:.2}", actual.accuracy),
                format!("{:.2}", point.offset_m()),
                point.timestamp.0.to_string(),
                seq.to_string(),
            ])?;
        }
        Ok(id)
    }

    fn finish(&mut self) -> StoreResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.points.flush()?;
        Ok(())
    }
}
