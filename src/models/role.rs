use serde::{Deserialize, Serialize};

/// Access level of an account, controlling which dashboards are reachable.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    #[default]
    Client,
    Manager,
    Admin,
}

crate::wire_enum!(Role {
    Client => "CLIENT", "Client",
    Manager => "MANAGER", "Manager",
    Admin => "ADMIN", "Administrator",
});

impl Role {
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Manager | Self::Admin)
    }
}
