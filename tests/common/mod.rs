//! Common test utilities for bumpify tests

pub mod fixtures;
pub mod mock_git;
pub mod mock_notes;
pub mod recording_progress;

// Re-exports for convenience - not all test binaries use all exports
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_git::{GitCall, GitOp, MockGit};
#[allow(unused_imports)]
pub use mock_notes::MockNotes;
#[allow(unused_imports)]
pub use mock_platform::MockPlatformService;
#[allow(unused_imports)]
pub use recording_progress::{Event, RecordingProgress};
