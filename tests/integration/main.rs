//! Integration tests for shellcfg

mod cli_tests;
mod editor_tests;
mod parser_tests;
