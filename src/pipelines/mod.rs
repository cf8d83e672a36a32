pub mod url;

pub use self::url::{extract_raw, extract_recipe, process};
