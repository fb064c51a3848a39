//! Port contract checks shared by every adapter.

use super::*;
use rstest::rstest;

#[rstest]
#[case(
    UserPersistenceError::connection("refused").to_string(),
    "user repository connection failed: refused"
)]
#[case(
    IdeaPersistenceError::malformed("bad skills").to_string(),
    "stored idea record is malformed: bad skills"
)]
#[case(
    ApplicationPersistenceError::duplicate("idea-1", "dev-1").to_string(),
    "developer dev-1 already applied to idea idea-1"
)]
#[case(
    IdentityError::email_taken("ada@example.com").to_string(),
    "an account already exists for ada@example.com"
)]
#[case(IdentityError::invalid_credentials().to_string(), "invalid credentials")]
fn port_errors_render_context(#[case] rendered: String, #[case] expected: &str) {
    assert_eq!(rendered, expected);
}

#[test]
fn port_traits_are_object_safe() {
    fn assert_dyn<T: ?Sized>() {}
    assert_dyn::<dyn UserRepository>();
    assert_dyn::<dyn IdeaRepository>();
    assert_dyn::<dyn ApplicationRepository>();
    assert_dyn::<dyn IdentityProvider>();
    assert_dyn::<dyn AccountCommand>();
    assert_dyn::<dyn ProfileQuery>();
    assert_dyn::<dyn ProfileCommand>();
    assert_dyn::<dyn IdeaCommand>();
    assert_dyn::<dyn IdeaQuery>();
    assert_dyn::<dyn ApplicationCommand>();
    assert_dyn::<dyn ApplicationQuery>();
}
