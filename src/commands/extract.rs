use crate::cli::ExtractHomArgs;
use crate::exac::{extract_homozygote_counts, split_alternates, write_records};
use crate::utils::{OutputFile, Result};

pub fn extract_hom(args: ExtractHomArgs) -> Result<()> {
    let alternates = split_alternates(&args.alternates);
    let records = extract_homozygote_counts(&args.reference, &alternates, &args.annotation)
        .map_err(|e| e.to_string())?;

    let mut writer = OutputFile::create(&args.output_path)?;
    write_records(&records, &mut writer).map_err(|e| e.to_string())?;
    writer.commit()?;

    log::info!(
        "Wrote {} homozygote count records to {}",
        records.len(),
        args.output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    fn args(output: &Path, alternates: &str, annotation: &str) -> ExtractHomArgs {
        ExtractHomArgs {
            output_path: output.to_path_buf(),
            reference: "ATG".to_string(),
            alternates: alternates.to_string(),
            annotation: annotation.to_string(),
        }
    }

    #[test]
    fn extract_writes_one_line_per_alternate() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("hom.txt");
        extract_hom(args(&output, "ATC,AG", "AC=8;AC_Hom=3,5;AN=100")).unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "ATG\tATC\t3\nAT\tA\t5\n"
        );
    }

    #[test]
    fn cardinality_mismatch_writes_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("hom.txt");
        let err = extract_hom(args(&output, "ATC,AG", "AC_Hom=3")).unwrap_err();
        assert!(err.contains("does not match the number of variants"));
        assert!(!output.exists());
    }

    #[test]
    fn missing_annotation_writes_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("hom.txt");
        let err = extract_hom(args(&output, "ATC", "AC=8;AN=100")).unwrap_err();
        assert_eq!(err, "The AC_Hom annotation was not found in the ExAC entry");
        assert!(!output.exists());
    }
}
