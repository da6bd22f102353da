pub mod api_response;
pub mod lenient;
pub mod list_view;
pub mod reward_tier;
