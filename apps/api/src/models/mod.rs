pub mod employee;
pub mod job_role;
pub mod user;

pub use employee::Employee;
pub use job_role::JobRole;
pub use user::{Role, User};
