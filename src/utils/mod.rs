mod error;
mod readers;
mod util;
mod writers;

pub use error::TransformError;
pub use readers::open_vcf_reader;
pub use util::{handle_error_and_exit, Result};
pub use writers::OutputFile;
