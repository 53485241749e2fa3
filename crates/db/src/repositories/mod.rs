pub mod search_event_repo;

pub use search_event_repo::SearchEventRepo;
