pub mod articles;
pub mod auth;

pub use articles::{ArticleDto, ArticleView};
pub use auth::AuthenticatedUser;
