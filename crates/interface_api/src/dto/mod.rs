//! Request and response data transfer objects

pub mod facts;
pub mod quote;
