//! JoystickBridge: samples the port and feeds the USB stack.

use crate::cache::ReportCache;
use crate::input::PortSource;
use crate::output::{OutputError, UsbStack};
use crate::reader::PortReader;

/// What one loop iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// The interrupt endpoint was busy; the port was not sampled.
    NotReady,
    /// A report was sampled and matched the cached one.
    Unchanged,
    /// A new report (or keepalive) was handed to the endpoint.
    Submitted,
}

/// Busy-wait loop connecting a [`PortSource`] to a [`UsbStack`].
///
/// Every iteration services USB first. The port is only sampled once the
/// interrupt endpoint can accept a report, so gesture and keepalive timing
/// count ready iterations, not wall time.
pub struct JoystickBridge<P, U> {
    port: P,
    usb: U,
    reader: PortReader,
    cache: ReportCache,
}

impl<P: PortSource, U: UsbStack> JoystickBridge<P, U> {
    /// Create a new bridge with an empty report cache.
    pub fn new(port: P, usb: U, reader: PortReader) -> Self {
        Self {
            port,
            usb,
            reader,
            cache: ReportCache::new(),
        }
    }

    /// Run the bridge forever.
    pub fn run(&mut self) -> ! {
        loop {
            if let Err(e) = self.step() {
                warn!("report submit failed: {}", e);
            }
        }
    }

    /// Run a single loop iteration.
    ///
    /// A failed submit leaves the cache pointing at the new report; the
    /// keepalive sends it again later.
    pub fn step(&mut self) -> Result<Step, BridgeError> {
        self.usb.poll();
        if !self.usb.interrupt_ready() {
            return Ok(Step::NotReady);
        }

        let port = self.port.read_port();
        let report = self.reader.sample_port(port);
        if !self.cache.offer(report) {
            return Ok(Step::Unchanged);
        }

        trace!("report {}", report);
        self.usb
            .submit(&report.as_bytes())
            .map_err(BridgeError::Output)?;
        Ok(Step::Submitted)
    }

    /// Get a reference to the port source.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Get a mutable reference to the port source.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Get a reference to the USB stack.
    pub fn usb(&self) -> &U {
        &self.usb
    }

    /// Get a mutable reference to the USB stack.
    pub fn usb_mut(&mut self) -> &mut U {
        &mut self.usb
    }

    pub fn reader(&self) -> &PortReader {
        &self.reader
    }

    pub fn cache(&self) -> &ReportCache {
        &self.cache
    }

    /// Decompose the bridge into its port source and USB stack.
    pub fn into_parts(self) -> (P, U) {
        (self.port, self.usb)
    }
}

/// Error type for bridge operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeError {
    /// Error from the USB stack.
    Output(OutputError),
}
