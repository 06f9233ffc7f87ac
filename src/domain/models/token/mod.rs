pub mod token;

pub use token::{OAuthStateClaims, SessionToken, TokenClaims};
