pub mod ip;
pub mod validation;
