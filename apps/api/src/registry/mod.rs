// Domain state: the append-only employee and job-role registry.

pub mod handlers;
pub mod seed;
pub mod skills;
pub mod store;

use thiserror::Error;

pub use store::Registry;

/// Why an append was refused. The registry is left unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Only admins can add records")]
    Forbidden,

    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    #[error("At least one skill is required")]
    NoSkills,
}
