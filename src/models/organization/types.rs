use serde::Deserialize;

use crate::slug::canonical_slug;

/// Maximum length of an organization name, enforced by the schema.
pub const NAME_MAX_LEN: usize = 150;

/// A persisted organization.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub description: String,
}

impl Organization {
    pub fn view_path(&self) -> String {
        view_path(&self.name, self.id)
    }

    pub fn edit_path(&self) -> String {
        edit_path(&self.name, self.id)
    }
}

pub fn view_path(name: &str, id: i64) -> String {
    format!("/organizations/{}/{}", canonical_slug(name), id)
}

pub fn edit_path(name: &str, id: i64) -> String {
    format!("/organizations/{}/{}/edit", canonical_slug(name), id)
}

/// Values for creating or overwriting an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationFields {
    pub name: String,
    pub address: String,
    pub description: String,
}

/// Form data from the create/edit organization form. Missing fields arrive empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub csrf_token: String,
}

impl OrganizationForm {
    /// Field values exactly as submitted.
    pub fn fields(&self) -> OrganizationFields {
        OrganizationFields {
            name: self.name.clone(),
            address: self.address.clone(),
            description: self.description.clone(),
        }
    }
}

impl From<&Organization> for OrganizationFields {
    fn from(org: &Organization) -> Self {
        OrganizationFields {
            name: org.name.clone(),
            address: org.address.clone(),
            description: org.description.clone(),
        }
    }
}
