use crate::conf::error::ConfigError;

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::NoFiles => Some(
            "Pass one or more newline-delimited JSON log files:\n\
             \n\
             logreport --file access.log other.log --report average",
        ),

        ConfigError::NotAFile { .. } => Some(
            "Directories are not expanded. List the log files inside it explicitly.",
        ),

        ConfigError::InvalidDate { .. } => Some(
            "The date filter is YEAR-DAY-MONTH, not the usual ISO order.\n\
             \n\
             Example (22 June 2025):\n\
             \n\
             --date 2025-22-06",
        ),

        ConfigError::UnknownReport(_) => Some(
            "Available reports:\n\
             \n\
             average     request count and mean response time per url\n\
             user-agent  request count per http_user_agent\n\
             max         reserved, not implemented yet",
        ),

        _ => None,
    }
}
