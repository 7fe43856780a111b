pub mod activities;
pub mod recent_documents;
pub mod summary;
pub mod trends;

pub use activities::ActivitiesSection;
pub use recent_documents::RecentDocumentsSection;
pub use summary::SummarySection;
pub use trends::TrendsSection;
