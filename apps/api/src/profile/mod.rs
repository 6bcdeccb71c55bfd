// User career profile: the persisted document each stage writes into.

pub mod handlers;
pub mod models;
pub mod store;
