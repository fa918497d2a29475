use statig::blocking::IntoStateMachineExt as _;

use crate::backoff::Backoff;

use super::actions::LinkActions;
use super::events::LinkEvent;
use super::machine::{DispatchContext, LinkMachine};
use super::types::LinkState;

#[derive(Clone, Copy, Debug)]
pub struct LinkApplyResult {
    pub before: LinkState,
    pub after: LinkState,
    pub actions: LinkActions,
}

impl LinkApplyResult {
    pub fn changed(self) -> bool {
        self.before != self.after
    }

    pub fn came_up(self) -> bool {
        !self.before.is_connected() && self.after.is_connected()
    }

    pub fn went_down(self) -> bool {
        self.before.is_connected() && !self.after.is_connected()
    }
}

/// Facade over the statig machine: applies one event at a time and reports
/// the state edge plus the side effects the caller must perform.
pub struct LinkEngine {
    machine: statig::blocking::StateMachine<LinkMachine>,
}

impl LinkEngine {
    pub fn new(backoff: Backoff) -> Self {
        Self {
            machine: LinkMachine::new(backoff).state_machine(),
        }
    }

    pub fn state(&self) -> LinkState {
        self.machine.inner().link
    }

    pub fn backoff(&self) -> Backoff {
        self.machine.inner().backoff
    }

    pub fn apply(&mut self, event: LinkEvent) -> LinkApplyResult {
        let before = self.state();
        let mut context = DispatchContext::default();
        self.machine.handle_with_context(&event, &mut context);
        LinkApplyResult {
            before,
            after: self.state(),
            actions: context.actions,
        }
    }
}
