use std::str::FromStr;

use licitasis_core::AppError;
use serde::{Deserialize, Serialize};

/// Functional areas of the back-office subject to access control.
///
/// The catalog is closed: adding a resource means extending this enum and the
/// navigation layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    /// Public-sector clients.
    #[serde(rename = "clientes")]
    Clients,
    /// Product catalog.
    #[serde(rename = "produtos")]
    Products,
    /// Procurement commitments ("empenhos").
    #[serde(rename = "empenhos")]
    Commitments,
    /// Receivables, payables and cash.
    #[serde(rename = "financeiro")]
    Finance,
    /// Freight carriers.
    #[serde(rename = "transportadoras")]
    Carriers,
    /// Suppliers.
    #[serde(rename = "fornecedores")]
    Suppliers,
    /// Sales orders.
    #[serde(rename = "vendas")]
    Sales,
    /// Purchase orders.
    #[serde(rename = "compras")]
    Purchases,
    /// System users.
    #[serde(rename = "usuarios")]
    Users,
    /// Employees.
    #[serde(rename = "funcionarios")]
    Employees,
    /// Investments.
    #[serde(rename = "investimentos")]
    Investments,
}

impl Resource {
    /// Returns the stable page name stored in grant rows.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clients => "clientes",
            Self::Products => "produtos",
            Self::Commitments => "empenhos",
            Self::Finance => "financeiro",
            Self::Carriers => "transportadoras",
            Self::Suppliers => "fornecedores",
            Self::Sales => "vendas",
            Self::Purchases => "compras",
            Self::Users => "usuarios",
            Self::Employees => "funcionarios",
            Self::Investments => "investimentos",
        }
    }

    /// Returns the full catalog in catalog order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Resource] = &[
            Resource::Clients,
            Resource::Products,
            Resource::Commitments,
            Resource::Finance,
            Resource::Carriers,
            Resource::Suppliers,
            Resource::Sales,
            Resource::Purchases,
            Resource::Users,
            Resource::Employees,
            Resource::Investments,
        ];

        ALL
    }

    /// Returns whether only administrators may reach this resource,
    /// regardless of stored grants.
    #[must_use]
    pub fn is_administrator_only(&self) -> bool {
        matches!(self, Self::Users | Self::Employees)
    }

    /// Parses a transport value into a resource.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for Resource {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|resource| resource.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown resource value '{value}'")))
    }
}

/// Capability checked against a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityAction {
    /// Read pages and lists.
    View,
    /// Update existing records.
    Edit,
    /// Insert new records.
    Create,
    /// Remove records.
    Delete,
}

impl CapabilityAction {
    /// Returns the stable action name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Create => "create",
            Self::Delete => "delete",
        }
    }

    /// Returns every action.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[CapabilityAction] = &[
            CapabilityAction::View,
            CapabilityAction::Edit,
            CapabilityAction::Create,
            CapabilityAction::Delete,
        ];

        ALL
    }

    /// Parses a transport value into an action.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for CapabilityAction {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "view" => Ok(Self::View),
            "edit" => Ok(Self::Edit),
            "create" => Ok(Self::Create),
            "delete" => Ok(Self::Delete),
            _ => Err(AppError::Validation(format!(
                "unknown capability action '{value}'"
            ))),
        }
    }
}

/// Stable audit actions emitted by access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditAction {
    /// Emitted when a capability check rejects a request.
    #[serde(rename = "ACCESS_DENIED")]
    AccessDenied,
}

impl AuditAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccessDenied => "ACCESS_DENIED",
        }
    }
}
