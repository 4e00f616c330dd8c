pub mod contact;
pub mod features;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod navbar;
pub mod products;
