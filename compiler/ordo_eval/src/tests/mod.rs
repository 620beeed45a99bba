//! Test modules relocated from implementation files.

mod chain_tests;
mod collections_tests;
mod membership_tests;
