use chrono::Utc;
use tracing::{info, warn};

use crate::auth::SessionContext;
use crate::models::{Employee, JobRole};
use crate::registry::skills::parse_skills;
use crate::registry::RegistryError;

/// In-memory, append-only registry of employees and job roles.
///
/// Ids are assigned as `len + 1`; with no removal this keeps them unique and
/// sequential from 1.
#[derive(Debug, Default)]
pub struct Registry {
    employees: Vec<Employee>,
    job_roles: Vec<JobRole>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from trusted records, bypassing the authorization gate.
    /// Used for startup seeding; ids are assigned in the given order.
    pub fn from_records(employees: &[(&str, &[&str])], job_roles: &[(&str, &[&str])]) -> Self {
        let now = Utc::now();
        let to_tags =
            |skills: &[&str]| -> Vec<String> { skills.iter().map(|s| s.to_string()).collect() };
        Self {
            employees: employees
                .iter()
                .enumerate()
                .map(|(i, &(name, skills))| Employee {
                    id: next_id(i),
                    name: name.to_string(),
                    skills: to_tags(skills),
                    created_at: now,
                })
                .collect(),
            job_roles: job_roles
                .iter()
                .enumerate()
                .map(|(i, &(title, skills))| JobRole {
                    id: next_id(i),
                    title: title.to_string(),
                    required_skills: to_tags(skills),
                    created_at: now,
                })
                .collect(),
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn job_roles(&self) -> &[JobRole] {
        &self.job_roles
    }

    pub fn add_employee(
        &mut self,
        session: &SessionContext,
        name: &str,
        skills_text: &str,
    ) -> Result<Employee, RegistryError> {
        let (name, skills) = validate_append(session, "name", name, skills_text)?;

        let employee = Employee {
            id: next_id(self.employees.len()),
            name,
            skills,
            created_at: Utc::now(),
        };
        info!("Added employee {} ({})", employee.id, employee.name);
        self.employees.push(employee.clone());
        Ok(employee)
    }

    pub fn add_job_role(
        &mut self,
        session: &SessionContext,
        title: &str,
        skills_text: &str,
    ) -> Result<JobRole, RegistryError> {
        let (title, required_skills) = validate_append(session, "title", title, skills_text)?;

        let job_role = JobRole {
            id: next_id(self.job_roles.len()),
            title,
            required_skills,
            created_at: Utc::now(),
        };
        info!("Added job role {} ({})", job_role.id, job_role.title);
        self.job_roles.push(job_role.clone());
        Ok(job_role)
    }
}

/// Shared gate for both appends: admin session, non-empty label, at least one skill.
fn validate_append(
    session: &SessionContext,
    label_field: &'static str,
    label: &str,
    skills_text: &str,
) -> Result<(String, Vec<String>), RegistryError> {
    if !session.can_edit() {
        warn!("Rejected {label_field} append from a non-admin session");
        return Err(RegistryError::Forbidden);
    }

    let label = label.trim();
    if label.is_empty() {
        return Err(RegistryError::MissingField(label_field));
    }
    if skills_text.trim().is_empty() {
        return Err(RegistryError::MissingField("skills"));
    }

    let skills = parse_skills(skills_text);
    if skills.is_empty() {
        return Err(RegistryError::NoSkills);
    }

    Ok((label.to_string(), skills))
}

fn next_id(len: usize) -> u32 {
    len as u32 + 1
}
