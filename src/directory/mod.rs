//! Snapshot-backed directory of teams, channels, memberships and grants.
//! Implements the resolver's collaborator traits for the CLI, tests and benches.

mod memory;
mod snapshot;

pub use memory::InMemoryDirectory;
pub use snapshot::{DefaultTeam, DirectorySnapshot, Grant};

#[cfg(test)]
mod tests;
