pub mod admin;
pub mod search;
