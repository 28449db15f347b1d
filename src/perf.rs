//! Frame and hot-path timing.
//!
//! Rendering and pointer tracking must keep up with 60 FPS while a drag is in
//! flight. This module offers:
//!
//! - **Frame timing**: rolling render times and slow-frame counts
//! - **Scoped timers**: RAII timing for a block, logged when over threshold
//! - **`profile_scope!`**: compiled out unless the `profiling` feature is on
//!
//! ```ignore
//! fn handle_mouse_move(&mut self) {
//!     profile_scope!("handle_mouse_move");
//!     // ...
//! }
//! ```

use std::collections::VecDeque;
use std::time::Instant;
use tracing::{debug, warn};

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Number of frames kept for rolling statistics
const SAMPLE_COUNT: usize = 60;

/// A frame is "slow" once it takes this many target frames
const WARN_THRESHOLD: f64 = 2.0;

/// Threshold used by `profile_scope!` timers
const PROFILING_THRESHOLD_MS: f64 = 1.0;

/// Time a scope. Zero-cost when the `profiling` feature is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

// ============================================================================
// Frame Performance Monitor
// ============================================================================

/// Tracks render frame times for the main view.
pub struct PerfMonitor {
    frame_times: VecDeque<f64>,
    frame_start: Option<Instant>,
    slow_frame_count: u64,
    total_frames: u64,
}

impl Default for PerfMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(SAMPLE_COUNT),
            frame_start: None,
            slow_frame_count: 0,
            total_frames: 0,
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Mark the end of a frame. Returns the frame time in milliseconds, or
    /// `None` if no frame was started.
    pub fn end_frame(&mut self) -> Option<f64> {
        let start = self.frame_start.take()?;
        let ms = start.elapsed().as_secs_f64() * 1000.0;
        self.record_frame(ms);
        Some(ms)
    }

    /// Record a frame time measured elsewhere.
    pub fn record_frame(&mut self, ms: f64) {
        if self.frame_times.len() >= SAMPLE_COUNT {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(ms);
        self.total_frames += 1;

        if ms > TARGET_FRAME_MS * WARN_THRESHOLD {
            self.slow_frame_count += 1;
            warn!(
                frame_time_ms = format!("{:.2}", ms),
                target_ms = format!("{:.2}", TARGET_FRAME_MS),
                "Slow frame detected"
            );
        }
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn average_frame_time(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64
    }

    pub fn max_frame_time(&self) -> f64 {
        self.frame_times.iter().copied().fold(0.0, f64::max)
    }

    pub fn slow_frame_percentage(&self) -> f64 {
        if self.total_frames == 0 {
            return 0.0;
        }
        (self.slow_frame_count as f64 / self.total_frames as f64) * 100.0
    }

    pub fn estimated_fps(&self) -> f64 {
        let avg = self.average_frame_time();
        if avg <= 0.0 {
            return 0.0;
        }
        1000.0 / avg
    }

    /// Log a summary once the rolling window is full, if the average is off
    /// target.
    pub fn log_summary_if_slow(&self) {
        if self.frame_times.len() < SAMPLE_COUNT {
            return;
        }
        let avg = self.average_frame_time();
        if avg > TARGET_FRAME_MS {
            warn!(
                avg_frame_ms = format!("{:.2}", avg),
                max_frame_ms = format!("{:.2}", self.max_frame_time()),
                slow_percentage = format!("{:.1}%", self.slow_frame_percentage()),
                estimated_fps = format!("{:.1}", self.estimated_fps()),
                "Performance below target"
            );
        }
    }

    pub fn reset(&mut self) {
        self.frame_times.clear();
        self.frame_start = None;
        self.slow_frame_count = 0;
        self.total_frames = 0;
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// Logs how long a scope took when it exceeds `threshold_ms`.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer used by `profile_scope!`.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, PROFILING_THRESHOLD_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }
        if cfg!(feature = "profiling") {
            debug!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
        } else {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}
