//! USB stack trait and error types.

use crate::types::HidReport;

/// Error type for report submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// USB/communication I/O error.
    Io,
    /// Device not configured by the host yet.
    NotReady,
    /// Endpoint still holds an unsent report.
    Busy,
}

/// The USB device side the bridge drives.
///
/// Implementations service the bus from [`poll`](Self::poll) only; there is
/// no interrupt-driven path. All methods must return promptly.
pub trait UsbStack {
    /// Service pending USB events, including control transfers.
    ///
    /// Must be called at least every few milliseconds to stay enumerated.
    fn poll(&mut self);

    /// Check whether the interrupt IN endpoint can take a new report.
    fn interrupt_ready(&self) -> bool;

    /// Hand a report to the interrupt IN endpoint.
    ///
    /// The same bytes become the reply to a later `GET_REPORT` request.
    fn submit(&mut self, report: &[u8; HidReport::SIZE]) -> Result<(), OutputError>;
}
