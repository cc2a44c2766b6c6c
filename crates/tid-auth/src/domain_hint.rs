/// Tenant hint derived from the request origin.
///
/// The slug is best-effort: it only participates in resolution when no
/// higher-priority source binds a company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainHint {
    pub slug: Option<String>,
    pub is_super_admin_domain: bool,
}

impl DomainHint {
    pub fn none() -> Self {
        Self {
            slug: None,
            is_super_admin_domain: false,
        }
    }
}
