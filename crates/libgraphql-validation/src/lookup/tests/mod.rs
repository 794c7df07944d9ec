mod index_pool_tests;
