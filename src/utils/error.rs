use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while transforming annotation strings or VCF lines.
///
/// Every variant is fatal: the command that hits one aborts without
/// publishing any output.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Input file, {}, does not exist", .0.display())]
    InputNotFound(PathBuf),
    #[error("The {0} annotation was not found in the ExAC entry")]
    MissingAnnotation(String),
    #[error("The {key} annotation has a malformed value: {value}")]
    MalformedAnnotation { key: String, value: String },
    #[error("The number of allele counts in the ExAC homozygote annotation ({counts}) does not match the number of variants ({alleles})")]
    CardinalityMismatch { alleles: usize, counts: usize },
    #[error("Empty allele in {0}")]
    EmptyAllele(String),
    #[error("Malformed VCF line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
