// Core workflow: probing, interactive selection, dispatch and the orchestrator tying them together.

pub mod orchestrator;
pub mod presence;
pub mod tool_installer;
pub mod tool_selector;
pub mod utilities;
