pub mod logger;
pub mod param_parser;
pub mod write_to_csv;
