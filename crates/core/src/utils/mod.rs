pub mod decimal_utils;
pub mod fingerprint;
pub mod time_utils;
