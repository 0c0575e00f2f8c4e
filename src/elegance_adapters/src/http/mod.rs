pub mod app_state;
pub mod extract;
pub mod response;
pub mod routes;

pub use app_state::AppState;
pub use extract::{ApiJson, Authenticated};
pub use response::{ApiResponse, UserProfile};
pub use routes::ApiError;
