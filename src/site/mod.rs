//! Static site output

pub mod writer;

pub use writer::{index_path, SiteWriter, INDEX_FILE_NAME};
