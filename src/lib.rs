pub mod cli;
pub mod commands;
pub mod exac;
pub mod utils;
pub mod vcf;
