//! Household and member models.

use serde::{Deserialize, Serialize};

use super::{HouseholdId, MemberId, UserId};

/// Default ISO currency code for a household.
const DEFAULT_CURRENCY: &str = "MYR";

/// Default avatar shown for a member without one.
const DEFAULT_AVATAR: &str = "\u{1f464}";

/// A household: the tenant every other record belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    /// Unique identifier.
    pub id: HouseholdId,
    /// Display name (e.g. "Keluarga Ahmad").
    pub name: String,
    /// Owning user.
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// ISO 4217 currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// A person belonging to a household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique identifier.
    pub id: MemberId,
    /// Owning household.
    pub household_id: HouseholdId,
    /// Display name.
    pub name: String,
    /// Role within the household (e.g. "Suami", "Isteri").
    pub role: String,
    /// Emoji avatar.
    #[serde(default = "default_avatar")]
    pub avatar: String,
    /// Linked login, if the member has one.
    #[serde(default)]
    pub user_id: Option<UserId>,
}

/// Serde default for [`Household::currency`].
fn default_currency() -> String {
    DEFAULT_CURRENCY.to_owned()
}

/// Serde default for [`Member::avatar`].
fn default_avatar() -> String {
    DEFAULT_AVATAR.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn household_defaults_to_myr() {
        let json = r#"{"id": "h-1", "name": "Keluarga Ahmad"}"#;
        let household: Household = serde_json::from_str(json).unwrap();
        assert_eq!(household.currency, "MYR");
        assert!(household.user_id.is_none());
    }

    #[test]
    fn member_default_avatar() {
        let json = r#"{
            "id": "suami",
            "householdId": "h-1",
            "name": "Ahmad",
            "role": "Suami"
        }"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.avatar, "\u{1f464}");
        assert_eq!(member.household_id, HouseholdId::from("h-1"));
    }
}
