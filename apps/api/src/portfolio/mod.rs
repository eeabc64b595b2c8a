// Portfolio persistence and the create / fetch / download endpoints.

pub mod handlers;
pub mod store;
