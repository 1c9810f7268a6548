//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `BudgetId` where a `UserId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(UserId, "Unique identifier for a user (the owner of budgets and goals).");
typed_id!(BudgetId, "Unique identifier for a budget.");
typed_id!(GoalId, "Unique identifier for a savings goal.");
typed_id!(TransactionId, "Unique identifier for an income or expense record.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = BudgetId::from_uuid(uuid);
        assert_eq!(id.into_inner(), uuid);
    }

    #[test]
    fn test_typed_ids_are_unique() {
        assert_ne!(UserId::new(), UserId::new());
    }

    #[test]
    fn test_typed_id_display_matches_uuid() {
        let uuid = Uuid::new_v4();
        assert_eq!(GoalId::from_uuid(uuid).to_string(), uuid.to_string());
    }

    #[test]
    fn test_typed_id_from_str() {
        let uuid = Uuid::new_v4();
        let id = UserId::from_str(&uuid.to_string()).unwrap();
        assert_eq!(id.into_inner(), uuid);
        assert!(UserId::from_str("invalid").is_err());
    }

    #[test]
    fn test_typed_id_serializes_transparently() {
        let uuid = Uuid::new_v4();
        let json = serde_json::to_string(&TransactionId::from_uuid(uuid)).unwrap();
        assert_eq!(json, format!("\"{uuid}\""));
    }
}
