//! Integration tests against an in-memory database

mod repository_tests;
