mod discover_tests;
mod plan_tests;
