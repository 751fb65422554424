pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod session;
pub mod token_source;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use session::Session;
pub use token_source::extract_token;
