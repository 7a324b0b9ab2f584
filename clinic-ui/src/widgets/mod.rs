mod button;
mod search;

pub use button::{RoundedButton, darken};
pub use search::SearchBar;
