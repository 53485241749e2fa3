pub mod search_event;
