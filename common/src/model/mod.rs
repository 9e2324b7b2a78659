pub mod identity;
pub mod training;
