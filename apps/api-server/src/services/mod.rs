//! Application services - orchestrate repositories and map to response shapes.

mod post;
mod user;

pub use post::PostService;
pub use user::UserService;
