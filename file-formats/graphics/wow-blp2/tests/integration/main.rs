//! End-to-end tests over synthetic BLP2 files

mod builder;
mod decode_tests;
mod load_tests;
