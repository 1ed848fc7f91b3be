pub mod contact;
pub mod offer;
pub mod organization;
pub mod user;
