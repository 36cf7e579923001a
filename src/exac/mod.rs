mod alleles;
mod annotation;
mod extractor;

pub use alleles::trim_shared_suffix;
pub use annotation::{find_value, homozygote_counts, HOMOZYGOTE_COUNT_KEY};
pub use extractor::{extract_homozygote_counts, split_alternates, write_records, HomozygoteRecord};
