//! Integration tests for the Diesel adapters against embedded PostgreSQL.
//!
//! Each test gets a freshly migrated database. The suites cover the
//! constraints the lifecycle relies on: unique emails, one application per
//! idea and developer, and the pending-only status write.

use chrono::{DateTime, Duration, TimeZone, Utc};
use cofounder::domain::ports::{
    ApplicationPersistenceError, ApplicationRepository, IdeaRepository, IdentityError,
    IdentityProvider, TransitionOutcome, UserRepository,
};
use cofounder::domain::{
    Application, ApplicationDraft, ApplicationId, ApplicationStatus, Credentials, EmailAddress,
    Idea, IdeaDraft, IdeaId, Role, Skills, User, UserId, UserName,
};
use cofounder::outbound::persistence::{
    DbPool, DieselApplicationRepository, DieselIdeaRepository, DieselIdentityProvider,
    DieselUserRepository, PoolConfig, run_pending_migrations,
};
use pg_embedded_setup_unpriv::TestCluster;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

#[path = "support/pg_embed.rs"]
mod pg_embed;

mod support;

use pg_embed::test_cluster;
use support::{handle_cluster_setup_failure, reset_database};

const TEST_DB: &str = "cofounder_repositories_test";

struct TestContext {
    runtime: Runtime,
    _cluster: TestCluster,
    identity: DieselIdentityProvider,
    users: DieselUserRepository,
    ideas: DieselIdeaRepository,
    applications: DieselApplicationRepository,
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    reset_database(&cluster, TEST_DB)?;
    let database_url = cluster.connection().database_url(TEST_DB);
    runtime
        .block_on(run_pending_migrations(&database_url))
        .map_err(|err| err.to_string())?;

    let config = PoolConfig::new(&database_url)
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        _cluster: cluster,
        identity: DieselIdentityProvider::new(pool.clone()),
        users: DieselUserRepository::new(pool.clone()),
        ideas: DieselIdeaRepository::new(pool.clone()),
        applications: DieselApplicationRepository::new(pool),
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn at(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
        + Duration::minutes(minutes)
}

fn user(email: &str, role: Role) -> User {
    User::new(
        UserId::random(),
        EmailAddress::new(email).expect("email"),
        role,
        UserName::new("Test User").expect("name"),
    )
    .with_contacts(
        Some("https://github.com/test".to_owned()),
        Some("https://linkedin.com/in/test".to_owned()),
        Some("+15550100".to_owned()),
    )
}

fn idea(founder: &User, title: &str, minutes: i64) -> Idea {
    IdeaDraft::new(
        title,
        "Match founders with developers",
        "5-10%",
        "60k",
        Skills::new(["Rust", "Postgres"]).expect("skills"),
    )
    .expect("draft")
    .into_idea(IdeaId::random(), founder.id, at(minutes))
}

fn application(idea: &Idea, developer: &User) -> Application {
    ApplicationDraft::new("I can build this", "2%", "50k")
        .expect("draft")
        .into_application(ApplicationId::random(), idea.id, developer, at(30))
}

#[rstest]
fn credentials_are_unique_per_email(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: credentials_are_unique_per_email skipped");
        return;
    };
    let credentials = Credentials::try_from_parts("Fay@Example.com", "secret1").expect("creds");
    let wrong = Credentials::try_from_parts("fay@example.com", "wrong-password").expect("creds");

    let user_id = ctx
        .runtime
        .block_on(ctx.identity.register(&credentials))
        .expect("registered");
    let duplicate = ctx.runtime.block_on(ctx.identity.register(&credentials));
    let signed_in = ctx
        .runtime
        .block_on(ctx.identity.authenticate(&credentials))
        .expect("authenticated");
    let rejected = ctx.runtime.block_on(ctx.identity.authenticate(&wrong));

    assert!(matches!(duplicate, Err(IdentityError::EmailTaken { .. })));
    assert_eq!(signed_in, user_id);
    assert!(matches!(rejected, Err(IdentityError::InvalidCredentials)));
}

#[rstest]
fn unregistered_credentials_free_the_email(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: unregistered_credentials_free_the_email skipped");
        return;
    };
    let credentials = Credentials::try_from_parts("gus@example.com", "secret1").expect("creds");

    let first = ctx
        .runtime
        .block_on(ctx.identity.register(&credentials))
        .expect("registered");
    let removed = ctx
        .runtime
        .block_on(ctx.identity.unregister(&first))
        .expect("unregistered");
    let removed_again = ctx
        .runtime
        .block_on(ctx.identity.unregister(&first))
        .expect("unregistered again");
    let second = ctx
        .runtime
        .block_on(ctx.identity.register(&credentials))
        .expect("registered again");

    assert!(removed);
    assert!(!removed_again);
    assert_ne!(first, second);
}

#[rstest]
fn profiles_round_trip_and_update(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: profiles_round_trip_and_update skipped");
        return;
    };
    let mut stored = user("dev@example.com", Role::Developer);

    ctx.runtime
        .block_on(ctx.users.insert(&stored))
        .expect("inserted");
    stored.whatsapp_number = None;
    let updated = ctx
        .runtime
        .block_on(ctx.users.update(&stored))
        .expect("updated");
    let fetched = ctx
        .runtime
        .block_on(ctx.users.find_by_id(&stored.id))
        .expect("fetched");
    let missing = ctx
        .runtime
        .block_on(ctx.users.update(&user("ghost@example.com", Role::Founder)))
        .expect("update of unknown user");

    assert!(updated);
    assert_eq!(fetched, Some(stored));
    assert!(!missing);
}

#[rstest]
fn ideas_list_newest_first_and_delete(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: ideas_list_newest_first_and_delete skipped");
        return;
    };
    let founder = user("fay@example.com", Role::Founder);
    let older = idea(&founder, "Older", 0);
    let newer = idea(&founder, "Newer", 5);
    let other = idea(&user("sam@example.com", Role::Founder), "Other", 10);
    for posted in [&older, &newer, &other] {
        ctx.runtime
            .block_on(ctx.ideas.insert(posted))
            .expect("inserted");
    }

    let everything = ctx
        .runtime
        .block_on(ctx.ideas.list_newest_first())
        .expect("listed");
    let own = ctx
        .runtime
        .block_on(ctx.ideas.list_by_founder(&founder.id))
        .expect("own listing");
    let deleted = ctx
        .runtime
        .block_on(ctx.ideas.delete(&older.id))
        .expect("deleted");
    let deleted_again = ctx
        .runtime
        .block_on(ctx.ideas.delete(&older.id))
        .expect("second delete");

    assert_eq!(everything, vec![other, newer.clone(), older]);
    assert_eq!(own.first(), Some(&newer));
    assert_eq!(own.len(), 2);
    assert!(deleted);
    assert!(!deleted_again);
}

#[rstest]
fn second_application_hits_the_unique_constraint(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: second_application_hits_the_unique_constraint skipped");
        return;
    };
    let founder = user("fay@example.com", Role::Founder);
    let developer = user("dev@example.com", Role::Developer);
    let posted = idea(&founder, "Marketplace", 0);
    let first = application(&posted, &developer);
    let second = application(&posted, &developer);

    ctx.runtime
        .block_on(ctx.applications.insert_unique(&first))
        .expect("first insert");
    let err = ctx
        .runtime
        .block_on(ctx.applications.insert_unique(&second))
        .expect_err("duplicate refused");
    let stored = ctx
        .runtime
        .block_on(
            ctx.applications
                .find_by_idea_and_developer(&posted.id, &developer.id),
        )
        .expect("lookup");

    assert!(matches!(err, ApplicationPersistenceError::Duplicate { .. }));
    assert_eq!(stored, Some(first));
}

#[rstest]
fn only_pending_applications_transition(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: only_pending_applications_transition skipped");
        return;
    };
    let founder = user("fay@example.com", Role::Founder);
    let developer = user("dev@example.com", Role::Developer);
    let pending = application(&idea(&founder, "Marketplace", 0), &developer);
    let rejected = ApplicationStatus::Rejected {
        reason: "timing".to_owned(),
    };
    ctx.runtime
        .block_on(ctx.applications.insert_unique(&pending))
        .expect("inserted");

    let first = ctx
        .runtime
        .block_on(ctx.applications.transition(&pending.id, &rejected))
        .expect("first decision");
    let second = ctx
        .runtime
        .block_on(
            ctx.applications
                .transition(&pending.id, &ApplicationStatus::Accepted),
        )
        .expect("second decision");
    let missing = ctx
        .runtime
        .block_on(
            ctx.applications
                .transition(&ApplicationId::random(), &ApplicationStatus::Accepted),
        )
        .expect("unknown application");

    match (first, second) {
        (TransitionOutcome::Applied(applied), TransitionOutcome::Stale(current)) => {
            assert_eq!(applied.status, rejected);
            assert_eq!(current.status, rejected);
            assert_eq!(
                current.developer_profile_snapshot,
                pending.developer_profile_snapshot
            );
        }
        other => panic!("unexpected outcomes: {other:?}"),
    }
    assert_eq!(missing, TransitionOutcome::Missing);
}

#[rstest]
fn applications_outlive_their_idea(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: applications_outlive_their_idea skipped");
        return;
    };
    let founder = user("fay@example.com", Role::Founder);
    let developer = user("dev@example.com", Role::Developer);
    let posted = idea(&founder, "Marketplace", 0);
    let submitted = application(&posted, &developer);
    ctx.runtime
        .block_on(ctx.ideas.insert(&posted))
        .expect("idea inserted");
    ctx.runtime
        .block_on(ctx.applications.insert_unique(&submitted))
        .expect("application inserted");

    ctx.runtime
        .block_on(ctx.ideas.delete(&posted.id))
        .expect("idea deleted");
    let by_developer = ctx
        .runtime
        .block_on(ctx.applications.list_by_developer(&developer.id))
        .expect("developer listing");
    let by_idea = ctx
        .runtime
        .block_on(ctx.applications.list_by_idea(&posted.id))
        .expect("idea listing");

    assert_eq!(by_developer, vec![submitted.clone()]);
    assert_eq!(by_idea, vec![submitted]);
}
