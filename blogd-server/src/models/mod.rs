//! Domain models and per-route validation rules
//!
//! Request bodies arrive as raw JSON and pass through a declarative rule
//! set before a typed value (`NewUser`, `PostChanges`, ...) is built.
//! Repositories never see an unvalidated shape.

pub mod comment;
pub mod like;
pub mod post;
pub mod user;
pub mod validation;

pub use comment::{Comment, CommentChanges, CommentWithAssociations, NewComment};
pub use like::{Like, LikeChanges, LikeWithAssociations, NewLike};
pub use post::{NewPost, Post, PostChanges, PostWithAssociations};
pub use user::{NewUser, User, UserChanges};
pub use validation::FieldError;
