//! Authenticated caller context passed into every service call.

use super::{Error, Role, UserId};

/// Identity and role of the user issuing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: UserId,
    pub role: Role,
}

impl Caller {
    /// Construct a caller context.
    #[must_use]
    pub const fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Fail with `forbidden` unless the caller holds `role`.
    ///
    /// # Examples
    /// ```
    /// use cofounder::domain::{Caller, ErrorCode, Role, UserId};
    ///
    /// let caller = Caller::new(UserId::random(), Role::Developer);
    /// assert!(caller.require_role(Role::Developer).is_ok());
    /// let err = caller.require_role(Role::Founder).unwrap_err();
    /// assert_eq!(err.code(), ErrorCode::Forbidden);
    /// ```
    pub fn require_role(&self, role: Role) -> Result<(), Error> {
        if self.role == role {
            Ok(())
        } else {
            Err(Error::forbidden(format!("only a {role} may do this")))
        }
    }
}
