pub mod dto;

pub use dto::MonthlyReward;
