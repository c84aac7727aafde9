//! Service layer: one handler group per endpoint family.

pub mod contact;
pub mod health;
pub mod resume;
pub mod share;

pub use contact::{ContactMessage, ContactService};
pub use health::{AppStartTime, HealthService};
pub use resume::ResumeService;
pub use share::ShareService;
