// Register application commands.

// Runs the interactive DevOps environment setup.
pub mod setup;
