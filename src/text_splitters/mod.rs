pub mod character;
pub mod chunk;
pub mod dynamic;
pub mod length;
pub mod recursive;
pub mod separator;
pub mod window;

pub use character::CharacterTextSplitter;
pub use chunk::{Chunk, ChunkSize};
pub use dynamic::{split, DynamicWindowSplitter};
pub use length::{CharacterLength, LengthFunction, TokenLength};
pub use recursive::RecursiveSeparatorSplitter;
pub use separator::{Segment, Separator};
pub use window::SlidingWindowAssembler;
