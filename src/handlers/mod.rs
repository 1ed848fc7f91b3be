pub mod auth_handlers;
pub mod home;
pub mod organization_handlers;
