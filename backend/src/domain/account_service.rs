//! Account registration, sign-in, and profile services.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use super::port_error_mapping::{map_identity_error, map_user_error};
use super::ports::{AccountCommand, IdentityProvider, ProfileCommand, ProfileQuery, UserRepository};
use super::{Caller, Credentials, Error, ProfileUpdate, Registration, User, UserId};

/// Account service implementing the account and profile driving ports.
#[derive(Clone)]
pub struct AccountService<I, U> {
    identity: Arc<I>,
    users: Arc<U>,
}

impl<I, U> AccountService<I, U> {
    /// Create a new service over the identity provider and user store.
    pub fn new(identity: Arc<I>, users: Arc<U>) -> Self {
        Self { identity, users }
    }
}

impl<I, U> AccountService<I, U>
where
    U: UserRepository,
{
    async fn load(&self, user_id: &UserId) -> Result<Option<User>, Error> {
        self.users.find_by_id(user_id).await.map_err(map_user_error)
    }
}

impl<I, U> AccountService<I, U>
where
    I: IdentityProvider,
{
    /// Undo a registration whose profile never landed so the email can be
    /// registered again.
    async fn release_credentials(&self, user_id: &UserId) {
        match self.identity.unregister(user_id).await {
            Ok(true) => info!(%user_id, "orphaned credentials released"),
            Ok(false) => warn!(%user_id, "no credentials to release"),
            Err(err) => error!(%user_id, error = %err, "failed to release credentials"),
        }
    }
}

#[async_trait]
impl<I, U> AccountCommand for AccountService<I, U>
where
    I: IdentityProvider,
    U: UserRepository,
{
    async fn register(&self, registration: Registration) -> Result<Caller, Error> {
        let user_id = self
            .identity
            .register(&registration.credentials)
            .await
            .map_err(map_identity_error)?;
        let user = registration.into_user(user_id);
        if let Err(err) = self.users.insert(&user).await {
            warn!(%user_id, error = %err, "profile write failed; releasing credentials");
            self.release_credentials(&user_id).await;
            return Err(map_user_error(err));
        }
        info!(user_id = %user.id, role = %user.role, "account registered");
        Ok(Caller::new(user.id, user.role))
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<Caller, Error> {
        let user_id = self
            .identity
            .authenticate(&credentials)
            .await
            .map_err(map_identity_error)?;
        let Some(user) = self.load(&user_id).await? else {
            warn!(%user_id, "credentials valid but profile missing");
            return Err(Error::unauthorized("invalid credentials"));
        };
        Ok(Caller::new(user.id, user.role))
    }
}

#[async_trait]
impl<I, U> ProfileQuery for AccountService<I, U>
where
    I: Send + Sync,
    U: UserRepository,
{
    async fn fetch_profile(&self, user_id: &UserId) -> Result<User, Error> {
        self.load(user_id)
            .await?
            .ok_or_else(|| Error::not_found("profile not found"))
    }
}

#[async_trait]
impl<I, U> ProfileCommand for AccountService<I, U>
where
    I: Send + Sync,
    U: UserRepository,
{
    async fn update_profile(
        &self,
        user_id: &UserId,
        update: ProfileUpdate,
    ) -> Result<User, Error> {
        let current = self
            .load(user_id)
            .await?
            .ok_or_else(|| Error::not_found("profile not found"))?;
        let updated = update.apply(current);
        if !self.users.update(&updated).await.map_err(map_user_error)? {
            return Err(Error::not_found("profile not found"));
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{
        IdentityError, MockIdentityProvider, MockUserRepository, UserPersistenceError,
    };
    use crate::domain::{EmailAddress, ErrorCode, Role, UserName};
    use crate::outbound::memory::{InMemoryIdentityProvider, InMemoryUserRepository};

    fn registration() -> Registration {
        Registration {
            credentials: Credentials::try_from_parts("founder@example.com", "secret")
                .expect("credentials"),
            name: UserName::new("Founder").expect("name"),
            role: Role::Founder,
            github_profile: None,
            linkedin_profile: None,
            whatsapp_number: Some("+15550001".to_owned()),
        }
    }

    fn stored_user(id: UserId) -> User {
        User::new(
            id,
            EmailAddress::new("founder@example.com").expect("email"),
            Role::Founder,
            UserName::new("Founder").expect("name"),
        )
    }

    fn make_service(
        identity: MockIdentityProvider,
        users: MockUserRepository,
    ) -> AccountService<MockIdentityProvider, MockUserRepository> {
        AccountService::new(Arc::new(identity), Arc::new(users))
    }

    #[tokio::test]
    async fn register_stores_profile_keyed_by_identity_id() {
        let id = UserId::random();
        let mut identity = MockIdentityProvider::new();
        identity.expect_register().times(1).return_once(move |_| Ok(id));
        let mut users = MockUserRepository::new();
        users
            .expect_insert()
            .withf(move |user| user.id == id && user.role == Role::Founder)
            .times(1)
            .return_once(|_| Ok(()));

        let caller = make_service(identity, users)
            .register(registration())
            .await
            .expect("registered");

        assert_eq!(caller, Caller::new(id, Role::Founder));
    }

    #[tokio::test]
    async fn failed_profile_write_releases_credentials() {
        let id = UserId::random();
        let mut identity = MockIdentityProvider::new();
        identity.expect_register().times(1).return_once(move |_| Ok(id));
        identity
            .expect_unregister()
            .withf(move |user_id| *user_id == id)
            .times(1)
            .return_once(|_| Ok(true));
        let mut users = MockUserRepository::new();
        users
            .expect_insert()
            .times(1)
            .return_once(|_| Err(UserPersistenceError::connection("blip")));

        let err = make_service(identity, users)
            .register(registration())
            .await
            .expect_err("unavailable");

        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }

    #[tokio::test]
    async fn release_failure_keeps_the_store_error() {
        let mut identity = MockIdentityProvider::new();
        identity
            .expect_register()
            .times(1)
            .return_once(|_| Ok(UserId::random()));
        identity
            .expect_unregister()
            .times(1)
            .return_once(|_| Err(IdentityError::connection("down")));
        let mut users = MockUserRepository::new();
        users
            .expect_insert()
            .times(1)
            .return_once(|_| Err(UserPersistenceError::connection("blip")));

        let err = make_service(identity, users)
            .register(registration())
            .await
            .expect_err("unavailable");

        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }

    #[tokio::test]
    async fn registration_can_be_retried_after_profile_outage() {
        let identity = Arc::new(InMemoryIdentityProvider::new());
        let mut flaky = MockUserRepository::new();
        flaky
            .expect_insert()
            .times(1)
            .return_once(|_| Err(UserPersistenceError::connection("blip")));
        let first = AccountService::new(Arc::clone(&identity), Arc::new(flaky))
            .register(registration())
            .await
            .expect_err("profile store down");
        assert_eq!(first.code(), ErrorCode::ServiceUnavailable);

        let healthy = AccountService::new(identity, Arc::new(InMemoryUserRepository::new()));
        let registered = healthy.register(registration()).await.expect("retry succeeds");
        let signed_in = healthy
            .sign_in(Credentials::try_from_parts("founder@example.com", "secret").expect("creds"))
            .await
            .expect("signed in");

        assert_eq!(signed_in, registered);
    }

    #[tokio::test]
    async fn register_reports_taken_email_as_conflict() {
        let mut identity = MockIdentityProvider::new();
        identity
            .expect_register()
            .times(1)
            .return_once(|_| Err(IdentityError::email_taken("founder@example.com")));
        let mut users = MockUserRepository::new();
        users.expect_insert().times(0);

        let err = make_service(identity, users)
            .register(registration())
            .await
            .expect_err("conflict");

        assert_eq!(err.code(), ErrorCode::Conflict);
    }

    #[tokio::test]
    async fn sign_in_resolves_role_from_profile() {
        let id = UserId::random();
        let mut identity = MockIdentityProvider::new();
        identity.expect_authenticate().times(1).return_once(move |_| Ok(id));
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(stored_user(id))));

        let caller = make_service(identity, users)
            .sign_in(Credentials::try_from_parts("founder@example.com", "secret").expect("creds"))
            .await
            .expect("signed in");

        assert_eq!(caller.role, Role::Founder);
    }

    #[tokio::test]
    async fn sign_in_rejects_bad_password() {
        let mut identity = MockIdentityProvider::new();
        identity
            .expect_authenticate()
            .times(1)
            .return_once(|_| Err(IdentityError::invalid_credentials()));

        let err = make_service(identity, MockUserRepository::new())
            .sign_in(Credentials::try_from_parts("founder@example.com", "wrong!").expect("creds"))
            .await
            .expect_err("unauthorized");

        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn update_profile_persists_applied_fields() {
        let id = UserId::random();
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(stored_user(id))));
        users
            .expect_update()
            .withf(|user| user.github_profile.as_deref() == Some("https://github.com/f"))
            .times(1)
            .return_once(|_| Ok(true));

        let updated = make_service(MockIdentityProvider::new(), users)
            .update_profile(
                &id,
                ProfileUpdate {
                    github_profile: Some("https://github.com/f".to_owned()),
                    ..ProfileUpdate::default()
                },
            )
            .await
            .expect("updated");

        assert_eq!(updated.email.as_ref(), "founder@example.com");
    }

    #[tokio::test]
    async fn fetch_profile_maps_store_outage() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .times(1)
            .return_once(|_| Err(UserPersistenceError::connection("refused")));

        let err = make_service(MockIdentityProvider::new(), users)
            .fetch_profile(&UserId::random())
            .await
            .expect_err("unavailable");

        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
