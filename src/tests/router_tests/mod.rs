mod listings_tests;
mod viewer_tests;
