pub mod data_file;
pub mod header;
pub mod render;
pub mod settings;
pub mod texture;
