pub mod user_response;
pub mod oauth_response;

pub use user_response::{
    RoleResponse, SigninResponse, TokenVerifyResponse, UserInfoResponse, UserResponse,
};
pub use oauth_response::LoginUrlResponse;
