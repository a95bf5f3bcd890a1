mod principal_tests;
