use serde::{Deserialize, Serialize};

use crate::{CapabilityAction, Resource};

/// Page reached from a navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationTarget {
    /// Application page.
    Page {
        /// Page path relative to the application root.
        path: String,
    },
    /// Ends the session.
    Logout {
        /// Logout endpoint path.
        path: String,
    },
}

/// One rendered navigation entry with optional nested links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    logical_name: String,
    label: String,
    target: NavigationTarget,
    children: Vec<NavigationEntry>,
}

impl NavigationEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(
        logical_name: impl Into<String>,
        label: impl Into<String>,
        target: NavigationTarget,
        children: Vec<NavigationEntry>,
    ) -> Self {
        Self {
            logical_name: logical_name.into(),
            label: label.into(),
            target,
            children,
        }
    }

    /// Creates the terminal logout entry.
    #[must_use]
    pub fn logout() -> Self {
        Self::new(
            LOGOUT_LOGICAL_NAME,
            "Sair",
            NavigationTarget::Logout {
                path: "logout.php".to_owned(),
            },
            Vec::new(),
        )
    }

    /// Returns the stable entry name.
    #[must_use]
    pub fn logical_name(&self) -> &str {
        self.logical_name.as_str()
    }

    /// Returns the visible label.
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Returns the entry target.
    #[must_use]
    pub fn target(&self) -> &NavigationTarget {
        &self.target
    }

    /// Returns nested links.
    #[must_use]
    pub fn children(&self) -> &[NavigationEntry] {
        &self.children
    }

    /// Returns whether this is the logout entry.
    #[must_use]
    pub fn is_logout(&self) -> bool {
        matches!(self.target, NavigationTarget::Logout { .. })
    }
}

/// Logical name of the terminal logout entry.
pub const LOGOUT_LOGICAL_NAME: &str = "logout";

/// Static description of one sub-link inside a navigation section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationLink {
    /// Stable link name.
    pub logical_name: &'static str,
    /// Visible label.
    pub label: &'static str,
    /// Page path.
    pub path: &'static str,
    /// Capability gating this link. `None` means always shown once the
    /// parent section is visible.
    pub requires: Option<CapabilityAction>,
}

/// Static description of a top-level navigation section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationSection {
    /// Resource whose view access reveals the section.
    pub resource: Resource,
    /// Visible label.
    pub label: &'static str,
    /// Landing page path.
    pub path: &'static str,
    /// Ordered sub-links.
    pub links: &'static [NavigationLink],
}

const fn insert_link(
    logical_name: &'static str,
    label: &'static str,
    path: &'static str,
) -> NavigationLink {
    NavigationLink {
        logical_name,
        label,
        path,
        requires: Some(CapabilityAction::Create),
    }
}

const fn list_link(
    logical_name: &'static str,
    label: &'static str,
    path: &'static str,
) -> NavigationLink {
    NavigationLink {
        logical_name,
        label,
        path,
        requires: Some(CapabilityAction::View),
    }
}

const fn fixed_link(
    logical_name: &'static str,
    label: &'static str,
    path: &'static str,
) -> NavigationLink {
    NavigationLink {
        logical_name,
        label,
        path,
        requires: None,
    }
}

const LAYOUT: &[NavigationSection] = &[
    NavigationSection {
        resource: Resource::Clients,
        label: "Clientes",
        path: "clientes.php",
        links: &[
            insert_link("clients.insert", "Inserir Clientes", "cadastrar_clientes.php"),
            list_link("clients.list", "Consultar Clientes", "consultar_clientes.php"),
        ],
    },
    NavigationSection {
        resource: Resource::Products,
        label: "Produtos",
        path: "produtos.php",
        links: &[
            insert_link("products.insert", "Inserir Produto", "cadastro_produto.php"),
            list_link("products.list", "Consultar Produtos", "consulta_produto.php"),
        ],
    },
    NavigationSection {
        resource: Resource::Commitments,
        label: "Empenhos",
        path: "empenhos.php",
        links: &[
            insert_link("commitments.insert", "Inserir Empenho", "cadastro_empenho.php"),
            list_link("commitments.list", "Consultar Empenho", "consulta_empenho.php"),
        ],
    },
    NavigationSection {
        resource: Resource::Finance,
        label: "Financeiro",
        path: "financeiro.php",
        links: &[
            fixed_link("finance.receivables", "Contas a Receber", "contas_a_receber.php"),
            fixed_link("finance.received", "Contas Recebidas", "contas_recebidas_geral.php"),
            fixed_link("finance.payables", "Contas a Pagar", "contas_a_pagar.php"),
            fixed_link("finance.paid", "Contas Pagas", "contas_pagas.php"),
            fixed_link("finance.cash", "Caixa", "caixa.php"),
        ],
    },
    NavigationSection {
        resource: Resource::Carriers,
        label: "Transportadoras",
        path: "transportadoras.php",
        links: &[
            insert_link(
                "carriers.insert",
                "Inserir Transportadora",
                "cadastro_transportadoras.php",
            ),
            list_link(
                "carriers.list",
                "Consultar Transportadora",
                "consulta_transportadoras.php",
            ),
        ],
    },
    NavigationSection {
        resource: Resource::Suppliers,
        label: "Fornecedores",
        path: "fornecedores.php",
        links: &[
            insert_link("suppliers.insert", "Inserir Fornecedor", "cadastro_fornecedores.php"),
            list_link("suppliers.list", "Consultar Fornecedor", "consulta_fornecedores.php"),
        ],
    },
    NavigationSection {
        resource: Resource::Sales,
        label: "Vendas",
        path: "vendas.php",
        links: &[
            insert_link("sales.insert", "Inserir Venda", "cadastro_vendas.php"),
            list_link("sales.list", "Consultar Venda", "consulta_vendas.php"),
        ],
    },
    NavigationSection {
        resource: Resource::Purchases,
        label: "Compras",
        path: "compras.php",
        links: &[
            insert_link("purchases.insert", "Inserir Compras", "cadastro_compras.php"),
            list_link("purchases.list", "Consultar Compras", "consulta_compras.php"),
        ],
    },
    NavigationSection {
        resource: Resource::Users,
        label: "Usuários",
        path: "usuario.php",
        links: &[
            fixed_link("users.insert", "Inserir Novo Usuário", "signup.php"),
            fixed_link("users.list", "Consultar Usuário", "consulta_usuario.php"),
        ],
    },
    NavigationSection {
        resource: Resource::Employees,
        label: "Funcionários",
        path: "funcionarios.php",
        links: &[
            fixed_link(
                "employees.insert",
                "Inserir Novo Funcionário",
                "cadastro_funcionario.php",
            ),
            fixed_link(
                "employees.list",
                "Consultar Funcionário",
                "consulta_funcionario.php",
            ),
        ],
    },
    NavigationSection {
        resource: Resource::Investments,
        label: "Investimentos",
        path: "investimentos.php",
        links: &[
            fixed_link(
                "investments.insert",
                "Inserir Investimento",
                "cadastro_investimento.php",
            ),
            fixed_link(
                "investments.list",
                "Consultar Investimentos",
                "consulta_investimento.php",
            ),
            fixed_link(
                "investments.reports",
                "Relatórios",
                "relatorio_investimento.php",
            ),
        ],
    },
];

/// Returns the fixed presentation order of navigation sections.
///
/// This order groups related areas and is independent of catalog order.
#[must_use]
pub fn navigation_layout() -> &'static [NavigationSection] {
    LAYOUT
}
