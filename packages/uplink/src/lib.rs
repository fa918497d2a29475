#![no_std]

pub mod backoff;
pub mod flush;
pub mod link;
pub mod queue;

pub use backoff::Backoff;
pub use flush::{gate_open, DeliveryOutcome, FlushCycle, FlushDirective};
pub use link::{LinkApplyResult, LinkEngine, LinkEvent, LinkState};
pub use queue::{OutageQueue, Payload, PAYLOAD_MAX};
