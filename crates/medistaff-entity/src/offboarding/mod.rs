//! Employee offboarding ("baja") entity.

pub mod detail;
pub mod exit_type;
pub mod model;
pub mod status;

pub use detail::OffboardingDetail;
pub use exit_type::ExitType;
pub use model::{NewOffboarding, OffboardingRecord};
pub use status::OffboardingStatus;
