pub mod help;
pub mod not_found;
pub mod schedule;
pub mod status;
