pub mod event_repo;
pub mod schema;
pub mod store;
pub mod util;
