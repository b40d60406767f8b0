mod test_utils;
mod maidenhead_tests;
