/// Content service root. Plain HTTP, no authentication.
pub const DEFAULT_API_BASE_URL: &str =
    "http://lorenzocodesapi-env.eba-jxtdemfs.us-west-2.elasticbeanstalk.com";

/// Environment variable that overrides the content service root on native builds.
pub const API_BASE_URL_ENV: &str = "PORTFOLIO_API_URL";

pub const PROJECTS_PATH: &str = "/projects";
pub const WORK_HISTORY_PATH: &str = "/workhistory";
pub const CERTIFICATIONS_PATH: &str = "/certifications";

/// First line written to the terminal log.
pub const WELCOME_MESSAGE: &str = "<> Hello World! Welcome to Lorenzo Codes </>";
