pub mod catalog;
pub mod middleware;
pub mod negotiator;
pub mod store;
