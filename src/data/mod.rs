mod loader;
pub mod parser;

pub use loader::{
    DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, load_document, read_input, write_document,
};
pub use parser::{ParseReport, parse};
