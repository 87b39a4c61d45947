//! Upload client: the form model and the transport that carries it to the relay.

pub mod form;
pub mod progress;
pub mod transport;

pub use form::{load_file, SubmitOutcome, UploadForm, SELECT_FILE_PROMPT};
pub use progress::UploadProgress;
pub use transport::{ClientError, FormSubmission, RelayClient};
