//! Staff roster types.
//!
//! The roster's free-text `role` ("Lead Developer", "Head Admin") is turned into a
//! closed [`Role`] tag exactly once, while the document is deserialized. Everything
//! downstream (ordering, tone, icon hints) switches on the tag.

use serde::{Deserialize, Serialize};

/// Closed set of staff roles, in display priority order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Admin,
    #[serde(alias = "dev")]
    Developer,
    #[serde(alias = "mod")]
    Moderator,
    #[default]
    #[serde(other)]
    Other,
}

impl Role {
    /// Every role in priority order.
    pub const ALL: [Self; 5] = [Self::Owner, Self::Admin, Self::Developer, Self::Moderator, Self::Other];

    /// Classifies a free-text role title. First matching keyword wins.
    pub fn classify(title: &str) -> Self {
        let title = title.to_lowercase();
        [("owner", Self::Owner), ("admin", Self::Admin), ("dev", Self::Developer), ("mod", Self::Moderator)]
            .into_iter()
            .find_map(|(needle, role)| title.contains(needle).then_some(role))
            .unwrap_or(Self::Other)
    }
}

/// Presence flag of a staff member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    #[default]
    #[serde(other)]
    Other,
}

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TeamMemberRecord", rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    /// Display title, shown verbatim.
    pub role: String,
    /// Closed tag decided at load time.
    #[serde(rename = "roleTag")]
    pub rank: Role,
    pub badge: Option<String>,
    pub avatar: Option<String>,
    pub discord: Option<String>,
    pub status: MemberStatus,
    pub description: String,
}

/// Wire shape of a roster entry. `roleTag` is optional; without it the title is classified.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamMemberRecord {
    id: String,
    name: String,
    #[serde(default)]
    role: String,
    #[serde(default)]
    role_tag: Option<Role>,
    #[serde(default)]
    badge: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default)]
    discord: Option<String>,
    #[serde(default)]
    status: MemberStatus,
    #[serde(default)]
    description: String,
}

impl From<TeamMemberRecord> for TeamMember {
    fn from(record: TeamMemberRecord) -> Self {
        let rank = record.role_tag.unwrap_or_else(|| Role::classify(&record.role));
        Self {
            id: record.id,
            name: record.name,
            role: record.role,
            rank,
            badge: record.badge,
            avatar: record.avatar,
            discord: record.discord,
            status: record.status,
            description: record.description,
        }
    }
}

impl TeamMember {
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }
}
