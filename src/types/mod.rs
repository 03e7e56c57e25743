pub mod analysis;

pub use analysis::{Analysis, ContactInfo, Rejection, ScoreBreakdown, Sections};
