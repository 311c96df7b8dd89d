pub mod developer;
pub mod search_query;
pub mod user;

pub use developer::{Developer, NewDeveloper, ProjectHighlight};
pub use search_query::{SearchQuery, SearchQueryInput};
pub use user::{NewUser, User};
