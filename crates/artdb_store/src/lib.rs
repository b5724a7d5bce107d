pub mod backends;

pub use backends::*;

pub mod prelude {
    pub use crate::backends::*;
    pub use artdb_core::ArticleStorage;
}
