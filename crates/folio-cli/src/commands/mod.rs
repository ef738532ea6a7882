pub mod candidates;
pub mod dispatch;
pub mod import;
pub mod normalize;
pub mod resume;
pub mod shared;
