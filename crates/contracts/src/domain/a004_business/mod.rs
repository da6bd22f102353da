pub mod dto;

pub use dto::{BusinessDirection, BusinessRecord};
