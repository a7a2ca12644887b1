mod transform_tests;
mod utils;
