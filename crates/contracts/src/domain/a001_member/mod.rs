pub mod dto;

pub use dto::Member;
