pub mod orchestration;

pub use orchestration::{run, run_with_summarizer, RunArgs, RunOutcome};
