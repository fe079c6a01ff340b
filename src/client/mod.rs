mod api;
pub mod choices;
mod session;

pub use api::{ApiClient, UploadOutcome};
pub use session::SessionStore;
