pub mod dto;

pub use dto::Chapter;
