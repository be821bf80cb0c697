pub mod embed;
pub mod error;
pub mod header;
pub mod input;
pub mod names;

pub use embed::{embed_file, Embedded, Embedder};
pub use error::EmbedError;
