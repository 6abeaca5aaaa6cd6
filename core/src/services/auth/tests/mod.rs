//! Auth service tests

mod service_tests;
