mod loader_tests;
