//! Access control for reading lists
//!
//! Ownership is the only access predicate. Owners may do anything with their
//! lists; everyone else, anonymous callers included, may only read public
//! lists. Books inherit the rules of the list containing them.

use crate::{
    error::{AppError, AppResult, RejectReason},
    models::{Identity, ReadingList},
};

/// Who is making a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requester {
    Anonymous,
    User(Identity),
}

/// What the requester wants to do with a list or its books
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Mutate,
}

/// Outcome of an authorization check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    PermitReadPublic,
    PermitReadOwn,
    PermitMutate,
    Deny,
}

impl Access {
    pub fn is_permitted(self) -> bool {
        self != Access::Deny
    }
}

impl Requester {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Requester::Anonymous => None,
            Requester::User(identity) => Some(identity),
        }
    }

    pub fn user_id(&self) -> Option<i32> {
        self.identity().map(|identity| identity.user_id)
    }

    pub fn owns(&self, list: &ReadingList) -> bool {
        self.user_id() == Some(list.owner_id)
    }

    /// Decide whether `operation` on `list` is allowed
    pub fn authorize(&self, list: &ReadingList, operation: Operation) -> Access {
        match (operation, self.owns(list)) {
            (Operation::Mutate, true) => Access::PermitMutate,
            (Operation::Mutate, false) => Access::Deny,
            (Operation::Read, true) => Access::PermitReadOwn,
            (Operation::Read, false) if !list.private => Access::PermitReadPublic,
            (Operation::Read, false) => Access::Deny,
        }
    }

    /// Creating a list only needs an authenticated caller
    pub fn require_authenticated(&self) -> AppResult<&Identity> {
        self.identity()
            .ok_or_else(|| AppError::Authentication("Authentication required".to_string()))
    }

    /// Resolve a looked-up list into one the requester may mutate.
    ///
    /// `None` means nothing exists under the requested id; a list owned by
    /// someone else is rejected as `NotOwner`. Both surface as a bad id.
    pub fn require_mutable(&self, list: Option<ReadingList>) -> AppResult<ReadingList> {
        let list = list.ok_or(AppError::BadReadingListId(RejectReason::Missing))?;
        match self.authorize(&list, Operation::Mutate) {
            Access::PermitMutate => Ok(list),
            _ => Err(AppError::BadReadingListId(RejectReason::NotOwner)),
        }
    }
}

impl From<Identity> for Requester {
    fn from(identity: Identity) -> Self {
        Requester::User(identity)
    }
}
