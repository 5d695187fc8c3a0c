//! Recorded landmark playback.
//!
//! A recording is a text file with one line per video frame:
//!
//! - 63 comma-separated floats: one hand, 21 × (x, y, z)
//! - `-`: no hand in view
//! - `!`: detection failed on this frame
//!
//! Blank lines and lines starting with `#` are ignored. Playback splits a
//! recording into a capture backend (yields one frame per recorded line) and
//! a landmark source (answers each frame with its recorded result).

use crate::{
    capture::{CaptureConstraints, Grab, LandmarkSource, MediaCapture, TrackerOptions, VideoFrame, VideoStream},
    constants::HAND_LANDMARK_VALUES,
    error::CaptureError,
    landmarks::HandLandmarks,
    Error, Result,
};
use log::{debug, info};
use std::{path::Path, sync::Arc, time::Instant};

/// One recorded detection result
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedFrame {
    Hand(HandLandmarks),
    NoHand,
    Failure,
}

/// An ordered list of recorded detection results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recording {
    frames: Vec<RecordedFrame>,
}

impl Recording {
    /// Build a recording from frames
    #[must_use]
    pub const fn new(frames: Vec<RecordedFrame>) -> Self {
        Self { frames }
    }

    /// Load a recording file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a line is malformed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::IoError(format!("{}: {e}", path.display())))?;
        let recording = Self::parse(&content)?;
        info!("Loaded {} recorded frames from {}", recording.len(), path.display());
        Ok(recording)
    }

    /// Parse recording text
    ///
    /// # Errors
    ///
    /// Returns an error naming the first malformed line
    pub fn parse(content: &str) -> Result<Self> {
        let mut frames = Vec::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let frame = match line {
                "-" => RecordedFrame::NoHand,
                "!" => RecordedFrame::Failure,
                _ => {
                    let values = line
                        .split(',')
                        .map(|v| v.trim().parse::<f32>())
                        .collect::<std::result::Result<Vec<f32>, _>>()
                        .map_err(|e| Error::Replay(format!("line {}: {e}", line_no + 1)))?;
                    if values.len() != HAND_LANDMARK_VALUES {
                        return Err(Error::Replay(format!(
                            "line {}: expected {HAND_LANDMARK_VALUES} values, got {}",
                            line_no + 1,
                            values.len()
                        )));
                    }
                    let hand = HandLandmarks::from_flat(&values)
                        .map_err(|e| Error::Replay(format!("line {}: {e}", line_no + 1)))?;
                    RecordedFrame::Hand(hand)
                }
            };
            frames.push(frame);
        }

        Ok(Self { frames })
    }

    /// Render back to recording text
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for frame in &self.frames {
            match frame {
                RecordedFrame::NoHand => out.push('-'),
                RecordedFrame::Failure => out.push('!'),
                RecordedFrame::Hand(hand) => {
                    let values: Vec<String> = hand
                        .points()
                        .iter()
                        .flat_map(|p| [p.x, p.y, p.z])
                        .map(|v| v.to_string())
                        .collect();
                    out.push_str(&values.join(","));
                }
            }
            out.push('\n');
        }
        out
    }

    /// Number of frames
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True if there are no frames
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Recorded frames in order
    #[must_use]
    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    /// Split into a capture backend and a landmark source sharing this recording
    #[must_use]
    pub fn into_playback(self) -> (ReplayCapture, ReplaySource) {
        let recording = Arc::new(self);
        (
            ReplayCapture {
                recording: Arc::clone(&recording),
            },
            ReplaySource {
                recording,
                configured: None,
            },
        )
    }
}

/// Capture backend yielding one frame per recorded line
#[derive(Debug, Clone)]
pub struct ReplayCapture {
    recording: Arc<Recording>,
}

impl MediaCapture for ReplayCapture {
    fn open(&mut self, constraints: &CaptureConstraints) -> std::result::Result<Box<dyn VideoStream>, CaptureError> {
        if self.recording.is_empty() {
            return Err(CaptureError::NoDevice);
        }
        Ok(Box::new(ReplayStream {
            total: self.recording.len() as u64,
            next: 0,
            width: constraints.width,
            height: constraints.height,
            stopped: false,
        }))
    }
}

/// Stream over a recording's frame indices
#[derive(Debug)]
struct ReplayStream {
    total: u64,
    next: u64,
    width: u32,
    height: u32,
    stopped: bool,
}

impl VideoStream for ReplayStream {
    fn grab(&mut self) -> Grab {
        if self.stopped || self.next >= self.total {
            return Grab::Ended;
        }
        let frame = VideoFrame {
            index: self.next,
            width: self.width,
            height: self.height,
            captured_at: Instant::now(),
            pixels: Vec::new(),
        };
        self.next += 1;
        Grab::Frame(frame)
    }

    fn stop_all_tracks(&mut self) {
        debug!("Replay stream stopped after {} of {} frames", self.next, self.total);
        self.stopped = true;
    }
}

/// Landmark source answering frames from the recording
#[derive(Debug, Clone)]
pub struct ReplaySource {
    recording: Arc<Recording>,
    configured: Option<TrackerOptions>,
}

impl ReplaySource {
    /// Options received from the controller
    #[must_use]
    pub const fn options(&self) -> Option<&TrackerOptions> {
        self.configured.as_ref()
    }
}

impl LandmarkSource for ReplaySource {
    fn configure(&mut self, options: &TrackerOptions) -> Result<()> {
        debug!("Replay source configured: {:?}", options);
        self.configured = Some(options.clone());
        Ok(())
    }

    fn send(&mut self, frame: &VideoFrame) -> Result<Vec<HandLandmarks>> {
        let index = usize::try_from(frame.index)
            .map_err(|_| Error::InvalidInput(format!("Frame index {} out of range", frame.index)))?;
        let max_hands = self.configured.as_ref().map_or(1, |o| o.max_hands as usize);

        match self.recording.frames().get(index) {
            Some(RecordedFrame::Hand(hand)) if max_hands > 0 => Ok(vec![*hand]),
            Some(RecordedFrame::Hand(_) | RecordedFrame::NoHand) => Ok(Vec::new()),
            Some(RecordedFrame::Failure) => {
                Err(Error::LandmarkSource(format!("Recorded detection failure at frame {index}")))
            }
            None => Err(Error::LandmarkSource(format!("No recorded frame {index}"))),
        }
    }

    fn close(&mut self) {
        debug!("Replay source closed");
        self.configured = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand_line(value: f32) -> String {
        vec![value.to_string(); HAND_LANDMARK_VALUES].join(",")
    }

    #[test]
    fn test_parse() {
        let text = format!("# header\n{}\n-\n\n!\n", hand_line(0.25));
        let recording = Recording::parse(&text).unwrap();
        assert_eq!(recording.len(), 3);
        assert!(matches!(recording.frames()[0], RecordedFrame::Hand(h) if h[9].x == 0.25));
        assert_eq!(recording.frames()[1], RecordedFrame::NoHand);
        assert_eq!(recording.frames()[2], RecordedFrame::Failure);
    }

    #[test]
    fn test_parse_errors_name_the_line() {
        let err = Recording::parse("-\n0.1,0.2\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));

        let err = Recording::parse("abc").unwrap_err();
        assert!(matches!(err, Error::Replay(_)));
    }

    #[test]
    fn test_text_round_trip() {
        let text = format!("{}\n-\n!\n", hand_line(0.5));
        let recording = Recording::parse(&text).unwrap();
        assert_eq!(Recording::parse(&recording.to_text()).unwrap(), recording);
    }

    #[test]
    fn test_playback() {
        let text = format!("{}\n-\n!\n", hand_line(0.5));
        let (mut capture, mut source) = Recording::parse(&text).unwrap().into_playback();
        source.configure(&TrackerOptions::default()).unwrap();

        let mut stream = capture.open(&CaptureConstraints::default()).unwrap();
        let mut next_frame = || match stream.grab() {
            Grab::Frame(frame) => frame,
            other => panic!("expected a frame, got {other:?}"),
        };
        let frame = next_frame();
        assert_eq!(frame.index, 0);
        assert_eq!(source.send(&frame).unwrap().len(), 1);
        assert!(source.send(&next_frame()).unwrap().is_empty());
        assert!(source.send(&next_frame()).is_err());
        assert_eq!(stream.grab(), Grab::Ended);
    }

    #[test]
    fn test_empty_recording_has_no_device() {
        let (mut capture, _) = Recording::default().into_playback();
        assert_eq!(
            capture.open(&CaptureConstraints::default()).err(),
            Some(CaptureError::NoDevice)
        );
    }
}
