mod health;
mod index;
mod responses;
mod test_sample;
mod transcribe;

pub use health::{HealthResponse, health_handler};
pub use index::{SUPPORTED_LOCALES, index_handler, render_index};
pub use responses::{ErrorResponse, FailureResponse, TranscriptResponse};
pub use test_sample::{TestSampleForm, test_sample_handler};
pub use transcribe::transcribe_handler;
