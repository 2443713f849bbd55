pub mod assign;
pub mod zip_map;
