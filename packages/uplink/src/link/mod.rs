mod actions;
mod engine;
mod events;
mod machine;
mod types;

pub use actions::LinkActions;
pub use engine::{LinkApplyResult, LinkEngine};
pub use events::LinkEvent;
pub use types::LinkState;
