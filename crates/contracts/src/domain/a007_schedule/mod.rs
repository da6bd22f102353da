pub mod dto;

pub use dto::Schedule;
