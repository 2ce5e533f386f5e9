pub mod bearer;
pub mod claims;
pub mod errors;
pub mod handler;

pub use bearer::extract_bearer_token;
pub use claims::Claims;
pub use errors::JwtError;
pub use handler::JwtHandler;
