mod admin_override;
mod company_id;
mod tenant_identity;
