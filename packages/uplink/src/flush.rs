use crate::link::LinkState;
use crate::queue::{OutageQueue, Payload};

/// Result of one delivery attempt as seen by the flush policy. A 2xx status
/// is the sole success criterion; everything else defers the queue to the
/// next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Status(u16),
    Timeout,
    TransportError,
}

impl DeliveryOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Status(code) if (200..300).contains(&code))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlushDirective {
    Continue,
    Stop,
}

/// Flush preconditions, checked in order: the link must be up, and the
/// clock must be plausible enough for certificate validation. When either
/// fails the queue is left untouched.
pub fn gate_open(link: LinkState, clock_valid: bool) -> bool {
    link.is_connected() && clock_valid
}

/// One flush invocation. Bounds per-tick delivery work so a long queue
/// cannot starve sampling or reconnect logic, and treats the first failure
/// as a signal the transport is unhealthy: the failed payload goes back to
/// the front of the queue and the cycle ends.
///
/// The caller performs the actual delivery between `take_next` and `settle`;
/// while in flight the payload exists only in the caller's hands, never in
/// the queue as well.
pub struct FlushCycle {
    attempts_left: u8,
    delivered: u8,
    stopped: bool,
}

impl FlushCycle {
    pub fn new(max_per_flush: u8) -> Self {
        Self {
            attempts_left: max_per_flush,
            delivered: 0,
            stopped: false,
        }
    }

    /// Pops the next payload to deliver, or `None` once the budget is spent,
    /// a failure stopped the cycle, or the queue is empty.
    pub fn take_next<const CAP: usize>(&mut self, queue: &mut OutageQueue<CAP>) -> Option<Payload> {
        if self.stopped || self.attempts_left == 0 {
            return None;
        }
        let payload = queue.pop()?;
        self.attempts_left -= 1;
        Some(payload)
    }

    /// Records the outcome of the in-flight payload. On failure it is
    /// re-admitted at the front so it retries before newer entries.
    pub fn settle<const CAP: usize>(
        &mut self,
        queue: &mut OutageQueue<CAP>,
        payload: Payload,
        outcome: DeliveryOutcome,
    ) -> FlushDirective {
        if outcome.is_success() {
            self.delivered += 1;
            if self.attempts_left == 0 {
                FlushDirective::Stop
            } else {
                FlushDirective::Continue
            }
        } else {
            let _ = queue.push_front(payload);
            self.stopped = true;
            FlushDirective::Stop
        }
    }

    pub fn delivered(&self) -> u8 {
        self.delivered
    }
}
