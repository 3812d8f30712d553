mod staging_test;
