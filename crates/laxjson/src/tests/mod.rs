mod escapes;
mod parse_bad;
