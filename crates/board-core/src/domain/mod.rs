//! Domain entities - the core business objects.

mod page;
mod post;
mod user;

pub use page::{Direction, Page, PageRequest, Sort, SortField, UnknownSortField};
pub use post::{NewPost, Post, PostChanges};
pub use user::{NewUser, User};
