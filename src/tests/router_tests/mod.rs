mod catalog_tests;
mod criteria_tests;
mod selection_tests;
