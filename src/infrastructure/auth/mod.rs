pub mod credential;
pub mod request_id;

pub use credential::Credential;
pub use request_id::{request_id_middleware, X_REQUEST_ID};
