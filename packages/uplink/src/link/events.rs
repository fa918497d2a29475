/// Inputs to the connectivity state machine. `AttemptDue` comes from the
/// driving task's scheduler tick; `AttemptSucceeded`/`AttemptFailed` are the
/// outcome of a bounded synchronous connect attempt; `GotAddress`/`LinkLost`
/// are the asynchronous edge-triggered notifications from the network stack.
#[derive(Clone, Copy, Debug)]
pub enum LinkEvent {
    AttemptDue { now_ms: u64 },
    AttemptSucceeded,
    AttemptFailed { now_ms: u64 },
    GotAddress,
    LinkLost { now_ms: u64 },
}
