pub mod dto;

pub use dto::VisitorInvite;
