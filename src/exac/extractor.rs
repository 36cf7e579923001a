use super::alleles::trim_shared_suffix;
use super::annotation::homozygote_counts;
use crate::utils::TransformError;
use itertools::Itertools;
use std::fmt;
use std::io::{self, Write};

/// Minimal ref/alt representation of one alternate and its homozygote count.
#[derive(Debug, PartialEq, Eq)]
pub struct HomozygoteRecord<'a> {
    pub reference: &'a str,
    pub alternate: &'a str,
    pub count: &'a str,
}

impl fmt::Display for HomozygoteRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.reference, self.alternate, self.count)
    }
}

pub fn split_alternates(alternates: &str) -> Vec<&str> {
    alternates.split(',').collect()
}

/// Pairs every alternate with its `AC_Hom` count, in input order.
///
/// Fails before producing anything if the annotation lacks the count tag or
/// if the number of counts differs from the number of alternates.
pub fn extract_homozygote_counts<'a>(
    reference: &'a str,
    alternates: &[&'a str],
    annotation: &'a str,
) -> Result<Vec<HomozygoteRecord<'a>>, TransformError> {
    let counts = homozygote_counts(annotation)?;
    if counts.len() != alternates.len() {
        return Err(TransformError::CardinalityMismatch {
            alleles: alternates.len(),
            counts: counts.len(),
        });
    }
    if reference.is_empty() {
        return Err(TransformError::EmptyAllele("reference".to_string()));
    }
    if alternates.iter().any(|alt| alt.is_empty()) {
        return Err(TransformError::EmptyAllele(format!(
            "alternates {}",
            alternates.iter().join(",")
        )));
    }

    let records = alternates
        .iter()
        .zip(counts)
        .map(|(&alternate, count)| {
            let (reference, alternate) = trim_shared_suffix(reference, alternate);
            log::trace!("Trimmed allele pair: {} -> {}", reference, alternate);
            HomozygoteRecord {
                reference,
                alternate,
                count,
            }
        })
        .collect();
    Ok(records)
}

pub fn write_records<W: Write>(records: &[HomozygoteRecord], writer: &mut W) -> io::Result<()> {
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: &[HomozygoteRecord]) -> String {
        let mut out = Vec::new();
        write_records(records, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn extract_multiallelic_trims_each_alternate() {
        let alternates = split_alternates("ATC,AG");
        let records =
            extract_homozygote_counts("ATG", &alternates, "AC=10;AC_Hom=3,5;AN=200").unwrap();
        assert_eq!(render(&records), "ATG\tATC\t3\nAT\tA\t5\n");
    }

    #[test]
    fn reference_is_reset_for_each_alternate() {
        let alternates = split_alternates("AT,ATTT,C");
        let records = extract_homozygote_counts("ATT", &alternates, "AC_Hom=0,1,2").unwrap();
        assert_eq!(
            records,
            vec![
                HomozygoteRecord {
                    reference: "AT",
                    alternate: "A",
                    count: "0"
                },
                HomozygoteRecord {
                    reference: "A",
                    alternate: "AT",
                    count: "1"
                },
                HomozygoteRecord {
                    reference: "ATT",
                    alternate: "C",
                    count: "2"
                },
            ]
        );
    }

    #[test]
    fn one_record_per_alternate() {
        let alternates = split_alternates("C,G,T,CA");
        let records = extract_homozygote_counts("A", &alternates, "AC_Hom=1,2,3,4").unwrap();
        assert_eq!(records.len(), alternates.len());
        assert_eq!(render(&records).lines().count(), 4);
    }

    #[test]
    fn missing_annotation_err() {
        let alternates = split_alternates("C");
        let err = extract_homozygote_counts("A", &alternates, "AC=1;AN=2").unwrap_err();
        assert_eq!(
            err.to_string(),
            "The AC_Hom annotation was not found in the ExAC entry"
        );
    }

    #[test]
    fn cardinality_mismatch_err() {
        let alternates = split_alternates("C,G");
        let err = extract_homozygote_counts("A", &alternates, "AC_Hom=4").unwrap_err();
        assert!(matches!(
            err,
            TransformError::CardinalityMismatch {
                alleles: 2,
                counts: 1
            }
        ));
    }

    #[test]
    fn empty_allele_err() {
        let alternates = split_alternates("C,,G");
        let err = extract_homozygote_counts("A", &alternates, "AC_Hom=1,2,3").unwrap_err();
        assert!(matches!(err, TransformError::EmptyAllele(_)));

        let alternates = split_alternates("C");
        let err = extract_homozygote_counts("", &alternates, "AC_Hom=1").unwrap_err();
        assert!(matches!(err, TransformError::EmptyAllele(_)));
    }
}
