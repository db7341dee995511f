/// Split `path:line` into the path and a zero-based line
///
/// The line is given 1-based on the command line. Anything after the last
/// colon that is not a number is treated as part of the path.
pub fn parse_filepath_with_line(filepath_arg: &str) -> (String, Option<u32>) {
    if let Some((path_part, line_part)) = filepath_arg.rsplit_once(':') {
        if let Ok(line_num) = line_part.parse::<u32>() {
            // Convert 1-based to 0-based
            return (path_part.to_string(), Some(line_num.saturating_sub(1)));
        }
    }
    (filepath_arg.to_string(), None)
}
