mod perf;
mod time_utils;

pub use time_utils::{TimeUtils, days_after, format_date, parse_store_date};
