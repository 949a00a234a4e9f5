pub(crate) mod info;
pub(crate) mod time_of_day;
