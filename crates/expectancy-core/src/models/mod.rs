mod dyadic;
mod ids;
mod pgg;
mod violation;

pub use dyadic::{AnnotatedTrial, DyadicExpectations, DyadicTrial, HistoryUpdate, Role};
pub use ids::SubjectId;
pub use pgg::{mean_present, GroupRecord, GroupViolations, PggTrial, RawPggRow};
pub use violation::Violation;
