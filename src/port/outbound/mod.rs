//! Outbound ports: the collaborators the pipeline calls out to.

pub mod exchange;
pub mod notifier;
