pub mod cli;
pub mod entity;
pub mod error;
pub mod notebook;
pub mod reference;
pub mod session;
pub mod storage;

pub use error::{JotterError, Result};
pub use notebook::Notebook;
pub use reference::ReferenceData;
pub use session::Session;
