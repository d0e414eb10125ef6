mod common;

mod store_tests;
mod user_tests;
