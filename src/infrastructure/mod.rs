pub mod collectors;
pub mod random;
