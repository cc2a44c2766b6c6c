use crate::DomainHint;

use url::Url;

/// Derives a tenant slug and superadmin-domain flag from a request origin.
///
/// Superadmin-domain detection is a static allow-list plus a reserved first
/// host label (e.g. `admin.example.com`). Pure and synchronous; a malformed
/// origin yields an empty hint.
pub struct DomainHintExtractor {
    admin_hosts: Vec<String>,
    admin_host_prefix: String,
}

impl DomainHintExtractor {
    pub fn new(admin_hosts: Vec<String>, admin_host_prefix: String) -> Self {
        Self {
            admin_hosts,
            admin_host_prefix,
        }
    }

    pub fn extract(&self, origin: &str) -> DomainHint {
        let host = match Url::parse(origin) {
            Ok(url) => match url.host_str() {
                Some(host) => host.to_ascii_lowercase(),
                None => return DomainHint::none(),
            },
            Err(e) => {
                log::debug!("Unparseable origin {:?}: {}", origin, e);
                return DomainHint::none();
            }
        };

        if self.admin_hosts.iter().any(|h| h.eq_ignore_ascii_case(&host)) {
            return DomainHint {
                slug: None,
                is_super_admin_domain: true,
            };
        }

        // Subdomain of a multi-label host is the tenant slug candidate.
        // Apex domains, localhost and www carry no hint.
        let labels: Vec<&str> = host.split('.').collect();
        if labels.len() < 3 {
            return DomainHint::none();
        }

        let first = labels[0];
        if first == self.admin_host_prefix {
            return DomainHint {
                slug: None,
                is_super_admin_domain: true,
            };
        }
        if first == "www" || first.is_empty() {
            return DomainHint::none();
        }

        DomainHint {
            slug: Some(first.to_string()),
            is_super_admin_domain: false,
        }
    }
}
