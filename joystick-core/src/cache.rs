//! Last-sent report and change detection.

use crate::types::HidReport;

/// Idle iterations after which an unchanged report is sent again.
pub const KEEPALIVE_TICKS: u8 = 255;

/// Decide whether `candidate` must be sent.
///
/// True when any field differs from `previous`, or when `idle_ticks` has
/// reached [`KEEPALIVE_TICKS`].
#[inline]
#[must_use]
pub fn should_send(previous: &HidReport, candidate: &HidReport, idle_ticks: u8) -> bool {
    previous != candidate || idle_ticks >= KEEPALIVE_TICKS
}

/// Holds the last transmitted report.
///
/// Starts at [`HidReport::POWER_ON`]; the periodic resend covers hosts that
/// missed the first report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReportCache {
    last: HidReport,
    idle_ticks: u8,
}

impl ReportCache {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: HidReport::POWER_ON,
            idle_ticks: 0,
        }
    }

    /// Offer a freshly sampled report.
    ///
    /// Counts one idle iteration, then replaces the cached report and resets
    /// the count if [`should_send`] holds. Returns whether the report must be
    /// submitted.
    pub fn offer(&mut self, candidate: HidReport) -> bool {
        self.idle_ticks = self.idle_ticks.saturating_add(1);
        if should_send(&self.last, &candidate, self.idle_ticks) {
            self.last = candidate;
            self.idle_ticks = 0;
            true
        } else {
            false
        }
    }

    /// The last report accepted for sending.
    #[inline]
    #[must_use]
    pub const fn report(&self) -> &HidReport {
        &self.last
    }

    #[inline]
    #[must_use]
    pub const fn idle_ticks(&self) -> u8 {
        self.idle_ticks
    }
}

impl Default for ReportCache {
    fn default() -> Self {
        Self::new()
    }
}
