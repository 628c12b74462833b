//! Boundary-aware text chunking.
//!
//! Text is first broken into atomic segments by applying an ordered list of
//! separators (paragraph breaks before sentence punctuation before
//! whitespace), then the segments are regrouped into size-bounded windows
//! that advance by a fixed number of segments, so consecutive chunks can
//! overlap, tile, or skip content.
//!
//! ```
//! use chunkwise::prelude::*;
//!
//! let config = SplitterConfig::default()
//!     .with_separators(vec![".".to_string()])
//!     .with_window_size(6)
//!     .with_step_size(1);
//! let splitter = DynamicWindowSplitter::new(config).unwrap();
//! let chunks = splitter.split_text("A. B. C. D.").unwrap();
//! assert_eq!(chunks, vec!["A. B. C.", " B. C.", " C. D.", " D."]);
//! ```

pub mod config;
pub mod error;
pub mod language;
pub mod schema;
pub mod text_splitters;
pub mod traits;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Re-exports for common types
pub mod prelude {
    pub use crate::config::{OutputOrder, SplitterConfig};
    pub use crate::error::Error;
    pub use crate::language::{resolve_separators_for, Language};
    pub use crate::schema::Document;
    pub use crate::text_splitters::{
        split, CharacterLength, CharacterTextSplitter, Chunk, ChunkSize, DynamicWindowSplitter,
        LengthFunction, TokenLength,
    };
    pub use crate::traits::{Runnable, TextSplitter};
    pub use crate::Result;
}
