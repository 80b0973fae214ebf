pub mod colors;
pub mod formatting;
pub mod path;
pub mod prompt;
pub mod table;

pub use formatting::priority_badge;
pub use prompt::ask_confirmation;
