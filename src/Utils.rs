/// locating, reading and writing mechanism files
pub mod load_from_file;
