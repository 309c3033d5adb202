pub mod constants;
pub mod locale;
pub mod test_helpers;
pub mod types;
pub mod validation;
