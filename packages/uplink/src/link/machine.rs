use statig::prelude::*;

use crate::backoff::Backoff;

use super::actions::LinkActions;
use super::events::LinkEvent;
use super::types::LinkState;

pub(super) struct LinkMachine {
    pub(super) link: LinkState,
    pub(super) backoff: Backoff,
}

#[derive(Clone, Copy, Debug, Default)]
pub(super) struct DispatchContext {
    pub(super) actions: LinkActions,
}

impl LinkMachine {
    pub(super) fn new(backoff: Backoff) -> Self {
        Self {
            link: LinkState::Disconnected,
            backoff,
        }
    }

    fn mark_connected(&mut self, context: &mut DispatchContext) {
        self.link = LinkState::Connected;
        self.backoff.reset();
        context.actions.request_clock_sync = true;
    }

    fn mark_disconnected(&mut self, now_ms: u64) {
        self.link = LinkState::Disconnected;
        self.backoff.schedule_reconnect(now_ms);
    }
}

#[state_machine(initial = "State::disconnected()")]
impl LinkMachine {
    #[state]
    fn disconnected(
        &mut self,
        context: &mut DispatchContext,
        event: &LinkEvent,
    ) -> Outcome<State> {
        match event {
            LinkEvent::AttemptDue { now_ms } => {
                if !self.backoff.attempt_permitted(*now_ms) {
                    return Handled;
                }
                self.link = LinkState::Connecting;
                context.actions.start_attempt = true;
                Transition(State::connecting())
            }
            // A stale attempt outcome can land here after a link-lost edge
            // already forced Disconnected; the last signal wins.
            LinkEvent::AttemptSucceeded | LinkEvent::GotAddress => {
                self.mark_connected(context);
                Transition(State::connected())
            }
            LinkEvent::AttemptFailed { now_ms } | LinkEvent::LinkLost { now_ms } => {
                self.backoff.schedule_reconnect(*now_ms);
                Handled
            }
        }
    }

    #[state]
    fn connecting(&mut self, context: &mut DispatchContext, event: &LinkEvent) -> Outcome<State> {
        match event {
            LinkEvent::AttemptSucceeded | LinkEvent::GotAddress => {
                self.mark_connected(context);
                Transition(State::connected())
            }
            LinkEvent::AttemptFailed { now_ms } | LinkEvent::LinkLost { now_ms } => {
                self.mark_disconnected(*now_ms);
                Transition(State::disconnected())
            }
            LinkEvent::AttemptDue { .. } => Handled,
        }
    }

    #[state]
    fn connected(&mut self, context: &mut DispatchContext, event: &LinkEvent) -> Outcome<State> {
        let _ = context;
        match event {
            LinkEvent::LinkLost { now_ms } => {
                self.mark_disconnected(*now_ms);
                Transition(State::disconnected())
            }
            // The network stack repeats got-address on DHCP renewal; keep
            // the backoff cleared.
            LinkEvent::GotAddress | LinkEvent::AttemptSucceeded => {
                self.backoff.reset();
                Handled
            }
            // A stale failing attempt must not downgrade a link an
            // asynchronous got-address edge already reported up.
            LinkEvent::AttemptFailed { .. } => Handled,
            LinkEvent::AttemptDue { .. } => Handled,
        }
    }
}
