pub mod entities;
pub mod templates;

pub use entities::prompt::Prompt;
