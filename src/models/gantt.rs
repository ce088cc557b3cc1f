//! Gantt chart model.
//!
//! A Gantt segment records that one process held the CPU during a
//! half-open interval `[start, end)`. Idle time is never represented.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Time;

/// A contiguous interval during which one process occupies the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    /// Executing process.
    pub process_id: String,
    /// Start instant (inclusive).
    pub start: Time,
    /// End instant (exclusive).
    pub end: Time,
}

impl GanttSegment {
    /// Creates a new segment.
    pub fn new(process_id: impl Into<String>, start: Time, end: Time) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> Time {
        self.end - self.start
    }

    /// Whether two segments share any instant.
    #[inline]
    pub fn overlaps(&self, other: &GanttSegment) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Renders the chart label, e.g. `P1 (0-5)`.
impl fmt::Display for GanttSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{})", self.process_id, self.start, self.end)
    }
}

/// Builder for the ordered segment list of one run.
///
/// Segments must be appended in chronological order.
#[derive(Debug, Clone, Default)]
pub struct GanttChart {
    segments: Vec<GanttSegment>,
}

impl GanttChart {
    /// Creates an empty chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment as-is.
    ///
    /// Zero-length intervals are dropped.
    pub fn push(&mut self, process_id: &str, start: Time, end: Time) {
        debug_assert!(
            self.segments.last().map_or(true, |last| last.end <= start),
            "segment {process_id} ({start}-{end}) overlaps the previous one"
        );
        if end > start {
            self.segments.push(GanttSegment::new(process_id, start, end));
        }
    }

    /// Appends a segment, merging it into the previous one when the same
    /// process continues without a gap.
    ///
    /// Returns `true` if the segment was merged.
    pub fn extend_or_push(&mut self, process_id: &str, start: Time, end: Time) -> bool {
        if let Some(last) = self.segments.last_mut() {
            if last.process_id == process_id && last.end == start {
                last.end = end;
                return true;
            }
        }
        self.push(process_id, start, end);
        false
    }

    /// Segments recorded so far.
    pub fn segments(&self) -> &[GanttSegment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no segment has been recorded.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Consumes the chart.
    pub fn into_segments(self) -> Vec<GanttSegment> {
        self.segments
    }
}
