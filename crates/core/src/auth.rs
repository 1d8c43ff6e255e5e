use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Coarse permission level attached to every authenticated user.
///
/// Labels outside the known set are kept verbatim so that newly introduced
/// levels survive a round trip through the session and the grant store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PermissionLevel {
    /// Full access to every resource, bypassing stored grants.
    Administrator,
    /// Read-only operator.
    UserLevel1,
    /// Operator allowed to create and edit most records.
    UserLevel2,
    /// Senior operator with extended delete rights.
    UserLevel3,
    /// Investor restricted to the finance area.
    Investor,
    /// Any label not known at build time.
    Custom(CustomLevel),
}

/// Permission level label outside the known set.
///
/// Only [`PermissionLevel::from_storage`] builds this value, so a custom level
/// never carries a known label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomLevel(String);

impl CustomLevel {
    /// Returns the raw label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PermissionLevel {
    /// Returns the stable storage label for this level.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Administrator => "Administrador",
            Self::UserLevel1 => "Usuario_Nivel_1",
            Self::UserLevel2 => "Usuario_Nivel_2",
            Self::UserLevel3 => "Usuario_Nivel_3",
            Self::Investor => "Investidor",
            Self::Custom(label) => label.as_str(),
        }
    }

    /// Parses a storage label. Unknown labels become [`PermissionLevel::Custom`].
    #[must_use]
    pub fn from_storage(value: &str) -> Self {
        match value {
            "Administrador" => Self::Administrator,
            "Usuario_Nivel_1" => Self::UserLevel1,
            "Usuario_Nivel_2" => Self::UserLevel2,
            "Usuario_Nivel_3" => Self::UserLevel3,
            "Investidor" => Self::Investor,
            other => Self::Custom(CustomLevel(other.to_owned())),
        }
    }

    /// Returns all levels known at build time.
    #[must_use]
    pub fn known() -> &'static [Self] {
        const KNOWN: &[PermissionLevel] = &[
            PermissionLevel::Administrator,
            PermissionLevel::UserLevel1,
            PermissionLevel::UserLevel2,
            PermissionLevel::UserLevel3,
            PermissionLevel::Investor,
        ];

        KNOWN
    }

    /// Returns whether this level bypasses stored grants.
    #[must_use]
    pub fn is_administrator(&self) -> bool {
        matches!(self, Self::Administrator)
    }

    /// Returns whether this is the investor level.
    #[must_use]
    pub fn is_investor(&self) -> bool {
        matches!(self, Self::Investor)
    }

    /// Returns the human-readable name shown in badges and forms.
    ///
    /// Custom levels are shown by their raw label.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Administrator => "Administrador",
            Self::UserLevel1 => "Usuário Nível 1",
            Self::UserLevel2 => "Usuário Nível 2",
            Self::UserLevel3 => "Usuário Nível 3",
            Self::Investor => "Investidor",
            Self::Custom(label) => label.as_str(),
        }
    }

    /// Returns the explanation shown to a user whose access was denied.
    #[must_use]
    pub fn access_description(&self) -> &'static str {
        match self {
            Self::Administrator => "Você possui acesso completo ao sistema.",
            Self::UserLevel1 => {
                "Você tem acesso apenas para visualização de dados. Não pode editar, criar ou excluir informações."
            }
            Self::UserLevel2 => {
                "Você pode consultar e editar dados do sistema, exceto usuários e funcionários."
            }
            Self::Investor => "Seu acesso está limitado à seção de investimentos do sistema.",
            Self::UserLevel3 | Self::Custom(_) => "Nível de permissão não reconhecido.",
        }
    }
}

impl From<String> for PermissionLevel {
    fn from(value: String) -> Self {
        Self::from_storage(value.as_str())
    }
}

impl From<PermissionLevel> for String {
    fn from(value: PermissionLevel) -> Self {
        match value {
            PermissionLevel::Custom(label) => label.0,
            known => known.as_str().to_owned(),
        }
    }
}

impl Display for PermissionLevel {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// User information persisted in the authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    id: i64,
    display_name: String,
    email: Option<String>,
    permission_level: PermissionLevel,
}

impl UserIdentity {
    /// Creates a user identity from session data.
    #[must_use]
    pub fn new(
        id: i64,
        display_name: impl Into<String>,
        email: Option<String>,
        permission_level: PermissionLevel,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            email,
            permission_level,
        }
    }

    /// Returns the user id from the users table.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the display name for the current user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the email, if one was recorded.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the permission level linked to the identity.
    #[must_use]
    pub fn permission_level(&self) -> &PermissionLevel {
        &self.permission_level
    }
}
