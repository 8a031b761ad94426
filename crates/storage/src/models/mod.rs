mod category_breakdown;
mod submission;

pub use category_breakdown::CategoryBreakdown;
pub use submission::Submission;
