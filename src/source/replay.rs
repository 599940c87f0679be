//! JSONL session replay
//!
//! Reads recorded landmark sessions, one frame object per line:
//!
//! ```text
//! {"t_ms": 0, "landmarks": [[812.0, 402.5], ...]}
//! {"t_ms": 33, "landmarks": null}
//! ```
//!
//! `landmarks` carries exactly 21 `[x, y]` pairs in frame pixels, or null
//! for frames where no hand was visible. Blank lines are skipped.

use super::{HandSource, Result, SourceError, SourceFrame};
use crate::hand::{HandObservation, Point, LANDMARK_COUNT};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// One recorded frame as it appears on disk
#[derive(Debug, Deserialize)]
struct FrameRecord {
    t_ms: u64,
    landmarks: Option<Vec<[f64; 2]>>,
}

/// Replays a recorded landmark session.
pub struct ReplaySource<R> {
    reader: R,
    line: usize,
}

impl ReplaySource<BufReader<File>> {
    /// Open a recorded session file.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        debug!("Replaying landmark session from {}", path.display());
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> ReplaySource<R> {
    /// Replay from any buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader, line: 0 }
    }
}

impl<R: BufRead> HandSource for ReplaySource<R> {
    fn next_frame(&mut self) -> Result<Option<SourceFrame>> {
        loop {
            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let trimmed = buf.trim();
            if trimmed.is_empty() {
                continue;
            }

            let record: FrameRecord = serde_json::from_str(trimmed).map_err(|source| {
                SourceError::MalformedRecord {
                    line: self.line,
                    source,
                }
            })?;

            let hand = match record.landmarks {
                None => None,
                Some(pairs) => {
                    if pairs.len() != LANDMARK_COUNT {
                        return Err(SourceError::LandmarkCount {
                            line: self.line,
                            count: pairs.len(),
                            expected: LANDMARK_COUNT,
                        });
                    }
                    let points: Vec<Point> =
                        pairs.iter().map(|&[x, y]| Point::new(x, y)).collect();
                    HandObservation::from_points(&points)
                }
            };

            return Ok(Some(SourceFrame {
                t_ms: record.t_ms,
                hand,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::landmarks::INDEX_TIP;
    use std::io::Cursor;

    /// 21 landmark pairs [10i, 5i] as a JSON array.
    fn landmarks_json() -> String {
        let pairs: Vec<String> = (0..LANDMARK_COUNT)
            .map(|i| format!("[{}.0,{}.0]", i * 10, i * 5))
            .collect();
        format!("[{}]", pairs.join(","))
    }

    fn replay(input: &str) -> ReplaySource<Cursor<Vec<u8>>> {
        ReplaySource::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_reads_frames_in_order() {
        let input = format!(
            "{{\"t_ms\": 0, \"landmarks\": {}}}\n{{\"t_ms\": 33, \"landmarks\": null}}\n",
            landmarks_json()
        );
        let mut source = replay(&input);

        let frame = source.next_frame().unwrap().unwrap();
        assert_eq!(frame.t_ms, 0);
        let hand = frame.hand.unwrap();
        assert_eq!(hand.point(INDEX_TIP), Point::new(80.0, 40.0));

        let frame = source.next_frame().unwrap().unwrap();
        assert_eq!(frame.t_ms, 33);
        assert!(frame.hand.is_none());

        assert!(source.next_frame().unwrap().is_none());
        // Exhausted source stays exhausted
        assert!(source.next_frame().unwrap().is_none());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let input = format!(
            "\n{{\"t_ms\": 10, \"landmarks\": {}}}\n\n   \n",
            landmarks_json()
        );
        let mut source = replay(&input);

        let frame = source.next_frame().unwrap().unwrap();
        assert_eq!(frame.t_ms, 10);
        assert!(source.next_frame().unwrap().is_none());
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let input = format!(
            "{{\"t_ms\": 0, \"landmarks\": null}}\n{{not json}}\n{}\n",
            landmarks_json()
        );
        let mut source = replay(&input);

        assert!(source.next_frame().is_ok());
        match source.next_frame() {
            Err(SourceError::MalformedRecord { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_landmark_count_is_error() {
        let input = "{\"t_ms\": 0, \"landmarks\": [[1.0, 2.0], [3.0, 4.0]]}\n";
        let mut source = replay(input);

        match source.next_frame() {
            Err(SourceError::LandmarkCount {
                line,
                count,
                expected,
            }) => {
                assert_eq!(line, 1);
                assert_eq!(count, 2);
                assert_eq!(expected, LANDMARK_COUNT);
            }
            other => panic!("Expected LandmarkCount, got {:?}", other),
        }
    }

    #[test]
    fn test_open_missing_file_is_error() {
        let result = ReplaySource::open(Path::new("/nonexistent/session.jsonl"));
        assert!(matches!(result, Err(SourceError::Io(_))));
    }

    #[test]
    fn test_open_reads_written_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");
        std::fs::write(
            &path,
            format!("{{\"t_ms\": 5, \"landmarks\": {}}}\n", landmarks_json()),
        )
        .unwrap();

        let mut source = ReplaySource::open(&path).unwrap();
        let frame = source.next_frame().unwrap().unwrap();
        assert_eq!(frame.t_ms, 5);
        assert!(frame.hand.is_some());
    }
}
