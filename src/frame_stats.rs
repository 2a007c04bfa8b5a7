use std::time::{Duration, Instant};

/// Collects frame times and reports their average about once a second.
#[derive(Debug)]
pub struct FrameStats {
    frametime_collector: Vec<f64>,
    last_debug_check: Instant,
    frame_count: u64,
}

/// One averaged report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub avg_frametime: f64,
    pub fps: f64,
    pub frames_counted: usize,
}

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

impl FrameStats {
    pub fn new(now: Instant) -> Self {
        Self {
            frametime_collector: Vec::with_capacity(240),
            last_debug_check: now,
            frame_count: 0,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Record one frame that took `frametime`. Returns a report once a
    /// second has passed since the previous one, and starts collecting anew.
    pub fn record(&mut self, frametime: Duration, now: Instant) -> Option<FrameReport> {
        self.frame_count += 1;
        self.frametime_collector.push(frametime.as_secs_f64());

        if now.duration_since(self.last_debug_check) < REPORT_INTERVAL {
            return None;
        }

        let total_time: f64 = self.frametime_collector.iter().sum();
        let frames_counted = self.frametime_collector.len();
        let avg_frametime = total_time / frames_counted as f64;
        let fps = if avg_frametime > 0.0 {
            1. / avg_frametime
        } else {
            0.0
        };

        self.frametime_collector.clear();
        self.last_debug_check = now;
        Some(FrameReport {
            avg_frametime,
            fps,
            frames_counted,
        })
    }

    /// [`FrameStats::record`], logging any report at debug level.
    pub fn record_and_log(&mut self, frametime: Duration, now: Instant) {
        if let Some(report) = self.record(frametime, now) {
            log::debug!(
                "frametime: {:0.8}, FPS: {:0.8}, frames counted: {:05}",
                report.avg_frametime,
                report.fps,
                report.frames_counted
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_after_a_second() {
        let start = Instant::now();
        let mut stats = FrameStats::new(start);
        let frame = Duration::from_millis(10);

        for i in 1..100 {
            assert!(stats
                .record(frame, start + Duration::from_millis(i * 10))
                .is_none());
        }
        let report = stats
            .record(frame, start + Duration::from_millis(1000))
            .unwrap();
        assert_eq!(report.frames_counted, 100);
        assert!((report.avg_frametime - 0.01).abs() < 1e-9);
        assert!((report.fps - 100.0).abs() < 1e-6);
        assert_eq!(stats.frame_count(), 100);
    }

    #[test]
    fn collector_resets_after_report() {
        let start = Instant::now();
        let mut stats = FrameStats::new(start);
        stats.record(Duration::from_millis(500), start + Duration::from_secs(1));
        let report = stats
            .record(Duration::from_millis(20), start + Duration::from_secs(2))
            .unwrap();
        assert_eq!(report.frames_counted, 1);
        assert!((report.avg_frametime - 0.02).abs() < 1e-9);
    }

    #[test]
    fn zero_frametime_does_not_divide_by_zero() {
        let start = Instant::now();
        let mut stats = FrameStats::new(start);
        let report = stats
            .record(Duration::ZERO, start + Duration::from_secs(1))
            .unwrap();
        assert_eq!(report.fps, 0.0);
    }
}
