pub mod cli;
pub mod config;
pub mod csv_parser;
pub mod github;
pub mod issue;
pub mod logging;
pub mod output;
pub mod run;
