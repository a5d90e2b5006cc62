//! Correction sinks
//!
//! Decoding reports every corrected block to a sink supplied by the caller.
//! Sinks only observe: whatever they do, the decoded output is the same.

use crate::types::CorrectionEvent;

/// Receiver for correction notifications raised during decode
pub trait CorrectionSink {
    /// Called once per block in which at least one codeword was corrected
    fn on_correction(&mut self, event: &CorrectionEvent);
}

impl<F> CorrectionSink for F
where
    F: FnMut(&CorrectionEvent),
{
    fn on_correction(&mut self, event: &CorrectionEvent) {
        self(event)
    }
}

/// Sink that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl CorrectionSink for NoopSink {
    fn on_correction(&mut self, _event: &CorrectionEvent) {}
}
