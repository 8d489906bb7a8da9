pub mod collation;
pub mod constants;
pub mod serde_helpers;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
pub mod validation;
