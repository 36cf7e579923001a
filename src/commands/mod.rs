pub mod extract;
pub mod strip;
