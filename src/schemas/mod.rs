// Data definitions shared across the workflow.

pub mod selection;
pub mod tools;
