use std::io;
use std::string::String;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("sample count must be greater than zero")]
    ZeroSamples,

    #[error("worker count must be at least one")]
    ZeroThreads,

    #[error("sample count must be below u64::MAX so the closed range [0, N] fits")]
    TooManySamples,

    #[error("failed to spawn accuracy worker {worker}")]
    Spawn {
        worker: usize,
        #[source]
        source: io::Error,
    },

    #[error("accuracy worker {worker} panicked before reporting")]
    WorkerPanicked { worker: usize },

    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
}
