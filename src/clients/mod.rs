pub mod nutrition;
pub mod suggestion;
