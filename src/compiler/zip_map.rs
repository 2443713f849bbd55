pub mod add_zip;
pub mod zip_map_trait;
