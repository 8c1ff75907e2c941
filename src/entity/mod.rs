mod category;
mod client;
mod note;

pub use category::Category;
pub use client::Client;
pub use note::Note;
