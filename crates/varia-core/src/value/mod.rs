pub mod list;
pub mod variant;
