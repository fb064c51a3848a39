//! Shared builders for domain unit tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use super::{
    Application, ApplicationDraft, ApplicationId, EmailAddress, Idea, IdeaDraft, IdeaId, Role,
    Skills, User, UserId, UserName,
};

pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub(crate) struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

pub(crate) fn founder(name: &str) -> User {
    User::new(
        UserId::random(),
        EmailAddress::new(format!("{}@founders.test", name.to_lowercase())).expect("email"),
        Role::Founder,
        UserName::new(name).expect("name"),
    )
    .with_contacts(None, None, Some("+15550001".to_owned()))
}

pub(crate) fn complete_developer(name: &str) -> User {
    User::new(
        UserId::random(),
        EmailAddress::new(format!("{}@devs.test", name.to_lowercase())).expect("email"),
        Role::Developer,
        UserName::new(name).expect("name"),
    )
    .with_contacts(
        Some(format!("https://github.com/{name}")),
        Some(format!("https://linkedin.com/in/{name}")),
        Some("+15550002".to_owned()),
    )
}

pub(crate) fn idea_draft(title: &str) -> IdeaDraft {
    IdeaDraft::new(
        title,
        "A description",
        "5-10%",
        "60k",
        Skills::from_csv("Rust, Postgres").expect("skills"),
    )
    .expect("draft")
}

pub(crate) fn idea_for(founder: &User) -> Idea {
    idea_draft("Fixture idea").into_idea(IdeaId::random(), founder.id, fixture_timestamp())
}

pub(crate) fn application_draft() -> ApplicationDraft {
    ApplicationDraft::new("I can build this", "2%", "50k").expect("draft")
}

pub(crate) fn pending_application(idea: &Idea, developer: &User) -> Application {
    application_draft().into_application(
        ApplicationId::random(),
        idea.id,
        developer,
        fixture_timestamp(),
    )
}
