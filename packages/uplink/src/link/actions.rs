/// Side effects the driving task must perform after an event is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkActions {
    /// A reconnect attempt is due now; run it under the attempt timeout.
    pub start_attempt: bool,
    /// The link just came up; secure delivery needs a fresh clock sync.
    pub request_clock_sync: bool,
}
