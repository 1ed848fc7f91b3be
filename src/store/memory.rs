use std::collections::{BTreeMap, BTreeSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::Repository;
use crate::errors::AppError;
use crate::models::offer::{NewOffer, Offer};
use crate::models::organization::{Organization, OrganizationFields};
use crate::models::user::{NewUser, User, UserProfile};

#[derive(Default)]
struct Tables {
    organizations: BTreeMap<i64, Organization>,
    offers: BTreeMap<i64, Offer>,
    users: BTreeMap<i64, User>,
    profiles: BTreeMap<i64, UserProfile>,
    /// (profile_id, organization_id)
    profile_organizations: BTreeSet<(i64, i64)>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn profile_for_user(&self, user_id: i64) -> Option<&UserProfile> {
        self.profiles.values().find(|p| p.user_id == user_id)
    }
}

/// In-process repository. Ids come from one shared counter, so they are
/// unique across tables and strictly increasing in insertion order.
#[derive(Default)]
pub struct MemoryRepository {
    tables: RwLock<Tables>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert an offer. Offers are managed outside this application, so this
    /// is only used for seeding.
    pub fn add_offer(&self, new: NewOffer) -> i64 {
        let mut tables = self.write();
        let id = tables.next_id();
        tables.offers.insert(id, Offer {
            id,
            organization_id: new.organization_id,
            title: new.title,
            description: new.description,
            location: new.location,
        });
        id
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn list_organizations(&self) -> Result<Vec<Organization>, AppError> {
        Ok(self.read().organizations.values().cloned().collect())
    }

    async fn find_organization(&self, id: i64) -> Result<Option<Organization>, AppError> {
        Ok(self.read().organizations.get(&id).cloned())
    }

    async fn create_organization(&self, fields: &OrganizationFields) -> Result<Organization, AppError> {
        let mut tables = self.write();
        let id = tables.next_id();
        let org = Organization {
            id,
            name: fields.name.clone(),
            address: fields.address.clone(),
            description: fields.description.clone(),
        };
        tables.organizations.insert(id, org.clone());
        Ok(org)
    }

    async fn update_organization(&self, id: i64, fields: &OrganizationFields) -> Result<Organization, AppError> {
        let mut tables = self.write();
        let org = tables.organizations.get_mut(&id).ok_or(AppError::NotFound)?;
        org.name = fields.name.clone();
        org.address = fields.address.clone();
        org.description = fields.description.clone();
        Ok(org.clone())
    }

    async fn add_organization_to_profile(&self, user_id: i64, organization_id: i64) -> Result<(), AppError> {
        let mut tables = self.write();
        let profile_id = tables
            .profile_for_user(user_id)
            .map(|p| p.id)
            .ok_or_else(|| AppError::Storage(format!("User {user_id} has no profile")))?;
        tables.profile_organizations.insert((profile_id, organization_id));
        Ok(())
    }

    async fn profile_organization_ids(&self, user_id: i64) -> Result<Vec<i64>, AppError> {
        let tables = self.read();
        let Some(profile) = tables.profile_for_user(user_id) else {
            return Ok(vec![]);
        };
        Ok(tables
            .profile_organizations
            .iter()
            .filter(|(profile_id, _)| *profile_id == profile.id)
            .map(|(_, org_id)| *org_id)
            .collect())
    }

    async fn offers_for_organization(&self, organization_id: i64) -> Result<Vec<Offer>, AppError> {
        Ok(self
            .read()
            .offers
            .values()
            .filter(|o| o.organization_id == organization_id)
            .cloned()
            .collect())
    }

    async fn administrator_email(&self, organization_id: i64) -> Result<Option<String>, AppError> {
        let tables = self.read();
        let email = tables
            .profile_organizations
            .iter()
            .filter(|(_, org_id)| *org_id == organization_id)
            .filter_map(|(profile_id, _)| tables.profiles.get(profile_id))
            .filter_map(|profile| tables.users.get(&profile.user_id))
            .map(|u| u.email.clone())
            .next();
        Ok(email)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .read()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, new: &NewUser) -> Result<i64, AppError> {
        let mut tables = self.write();
        if tables.users.values().any(|u| u.username == new.username) {
            return Err(AppError::Storage(format!("Username '{}' already exists", new.username)));
        }
        let user_id = tables.next_id();
        tables.users.insert(user_id, User {
            id: user_id,
            username: new.username.clone(),
            email: new.email.clone(),
            password: new.password.clone(),
        });
        let profile_id = tables.next_id();
        tables.profiles.insert(profile_id, UserProfile { id: profile_id, user_id });
        Ok(user_id)
    }

    async fn count_users(&self) -> Result<i64, AppError> {
        Ok(self.read().users.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> OrganizationFields {
        OrganizationFields {
            name: name.to_string(),
            address: "1 Main St".to_string(),
            description: "desc".to_string(),
        }
    }

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn organizations_are_listed_in_insertion_order() {
        let repo = MemoryRepository::new();
        let a = repo.create_organization(&fields("A")).await.unwrap();
        let b = repo.create_organization(&fields("B")).await.unwrap();
        assert!(b.id > a.id);

        let names: Vec<_> = repo
            .list_organizations()
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.name)
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn update_unknown_organization_is_not_found() {
        let repo = MemoryRepository::new();
        let err = repo.update_organization(42, &fields("X")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn profile_links_and_administrator_email() {
        let repo = MemoryRepository::new();
        let first = repo.create_user(&new_user("first")).await.unwrap();
        let second = repo.create_user(&new_user("second")).await.unwrap();
        let org = repo.create_organization(&fields("Helpers")).await.unwrap();

        assert_eq!(repo.administrator_email(org.id).await.unwrap(), None);

        repo.add_organization_to_profile(second, org.id).await.unwrap();
        repo.add_organization_to_profile(first, org.id).await.unwrap();
        repo.add_organization_to_profile(first, org.id).await.unwrap();

        assert_eq!(repo.profile_organization_ids(first).await.unwrap(), vec![org.id]);
        assert_eq!(
            repo.administrator_email(org.id).await.unwrap().as_deref(),
            Some("first@example.com")
        );
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let repo = MemoryRepository::new();
        repo.create_user(&new_user("ann")).await.unwrap();
        assert!(repo.create_user(&new_user("ann")).await.is_err());
        assert_eq!(repo.count_users().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn offers_are_filtered_by_organization() {
        let repo = MemoryRepository::new();
        let org = repo.create_organization(&fields("Helpers")).await.unwrap();
        let other = repo.create_organization(&fields("Other")).await.unwrap();
        repo.add_offer(NewOffer { organization_id: org.id, title: "Sorting".into(), ..Default::default() });
        repo.add_offer(NewOffer { organization_id: other.id, title: "Driving".into(), ..Default::default() });

        let offers = repo.offers_for_organization(org.id).await.unwrap();
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].title, "Sorting");
    }
}
