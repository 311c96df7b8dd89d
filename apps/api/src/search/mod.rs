// Search pipeline: validate -> record the query -> filter and rank developers.

pub mod filter;
pub mod handlers;
pub mod validation;
