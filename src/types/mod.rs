//! Records exchanged with the workshop backend.

mod auth;
mod document;
mod embedding;
mod health;
mod model;
mod page;
mod prompt;
mod rag_system;
mod tool;
mod vector_db;

pub use auth::*;
pub use document::*;
pub use embedding::*;
pub use health::*;
pub use model::*;
pub use page::*;
pub use prompt::*;
pub use rag_system::*;
pub use tool::*;
pub use vector_db::*;
