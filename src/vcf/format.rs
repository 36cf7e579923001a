use arrayvec::ArrayVec;
use itertools::Itertools;

pub const PHASING_GROUP_TAG: &str = "PGT";
pub const PHASING_ID_TAG: &str = "PID";

const FIELD_SEPARATOR: char = ':';

/// FORMAT positions to delete from every genotype field of a VCF line.
///
/// Positions are kept in descending order so that deleting them one after
/// the other never shifts a position that is still pending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagRemovalPlan {
    positions: ArrayVec<usize, 2>,
}

fn find_tag(tags: &[&str], tag: &str) -> Option<usize> {
    tags.iter().position(|t| *t == tag)
}

impl TagRemovalPlan {
    pub fn from_format(format: &str) -> Self {
        let tags: Vec<&str> = format.split(FIELD_SEPARATOR).collect();
        let mut positions: ArrayVec<usize, 2> = [PHASING_GROUP_TAG, PHASING_ID_TAG]
            .iter()
            .filter_map(|tag| find_tag(&tags, tag))
            .collect();
        positions.sort_unstable_by(|a, b| b.cmp(a));
        TagRemovalPlan { positions }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Deletes the planned positions from a colon-delimited field.
    ///
    /// Returns `None` when the field has too few values to hold the largest
    /// planned position.
    pub fn apply(&self, field: &str) -> Option<String> {
        let mut values: Vec<&str> = field.split(FIELD_SEPARATOR).collect();
        if let Some(&largest) = self.positions.first() {
            if largest >= values.len() {
                return None;
            }
        }
        for &position in &self.positions {
            values.remove(position);
        }
        Some(values.iter().join(":"))
    }
}
