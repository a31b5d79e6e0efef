pub mod assessment;
pub mod urgency;

pub use assessment::*;
pub use urgency::*;
