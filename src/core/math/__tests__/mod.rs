mod laguerre_test;
