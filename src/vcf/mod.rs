mod format;
mod stripper;

pub use format::{TagRemovalPlan, PHASING_GROUP_TAG, PHASING_ID_TAG};
pub use stripper::{strip_line, strip_phasing_fields, StripStats, StrippedLine};
