mod derive_tests;
mod order_tests;
