mod snapshot_error;
mod writer;

pub use snapshot_error::SnapshotError;
pub use writer::{read_snapshot, write_snapshot, Snapshot};
