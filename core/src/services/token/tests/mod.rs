//! Token service tests

mod issuer_tests;
