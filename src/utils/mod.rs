pub mod regex_utils;
