pub mod ingestor;

pub use ingestor::Ingestor;

pub mod prelude {
    pub use crate::Ingestor;
    pub use artdb_core::{Article, Error, Result};
}
