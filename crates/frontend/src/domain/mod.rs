pub mod a001_member;
pub mod a002_chapter;
pub mod a003_bdm;
pub mod a004_business;
pub mod a005_referral;
pub mod a006_visitor_invite;
pub mod a007_schedule;
pub mod a008_creative;
pub mod a009_monthly_reward;
