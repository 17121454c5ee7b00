mod client;
mod poller;
mod types;

pub use client::{VeoClient, VideoGenerator};
pub use poller::{wait_for_completion, PollTransport, INITIAL_BACKOFF_MS, MAX_BACKOFF_MS, MAX_WAIT};
pub use types::{GenerationRequest, GenerationResult, SubmitOutcome};
