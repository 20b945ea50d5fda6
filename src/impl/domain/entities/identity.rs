use uuid::Uuid;

/// Identity of the signed-in user a report belongs to. Ownership itself is
/// enforced by the persistence collaborator's access policy; this crate only
/// needs the id for attribution and scoping queries.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
