//! Integration tests for root-relative browsing and mutation

mod cli_contracts;
mod scenarios;
mod support;
