pub mod global_context;
pub mod left;
pub mod registry;
