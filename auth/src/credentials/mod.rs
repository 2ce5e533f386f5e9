pub mod errors;
pub mod validator;

pub use errors::CredentialError;
pub use validator::validate;
pub use validator::Credentials;
pub use validator::MIN_PASSWORD_LENGTH;
