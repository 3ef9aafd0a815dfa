mod refraction_test;
