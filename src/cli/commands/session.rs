//! Session and frontend arguments for the server command.

use anyhow::{Context, Result};
use clap::{Arg, Command};

pub const ARG_FRONTEND_BASE_URL: &str = "frontend-base-url";
pub const ARG_SESSION_TTL_SECONDS: &str = "session-ttl-seconds";

const DEFAULT_SESSION_TTL_SECONDS: i64 = 12 * 60 * 60;

#[must_use]
pub fn with_args(command: Command) -> Command {
    let default_ttl: &'static str =
        Box::leak(DEFAULT_SESSION_TTL_SECONDS.to_string().into_boxed_str());

    command
        .arg(
            Arg::new(ARG_FRONTEND_BASE_URL)
                .long(ARG_FRONTEND_BASE_URL)
                .help("Base URL of the frontend, used for CORS and cookie attributes")
                .default_value("http://localhost:3000")
                .env("PRESENZA_FRONTEND_BASE_URL"),
        )
        .arg(
            Arg::new(ARG_SESSION_TTL_SECONDS)
                .long(ARG_SESSION_TTL_SECONDS)
                .help("Session lifetime in seconds")
                .default_value(default_ttl)
                .env("PRESENZA_SESSION_TTL_SECONDS")
                .value_parser(clap::value_parser!(i64)),
        )
}

#[derive(Debug)]
pub struct Options {
    pub frontend_base_url: String,
    pub session_ttl_seconds: i64,
}

impl Options {
    /// Extract session options from parsed matches.
    ///
    /// # Errors
    /// Returns an error if a defaulted argument is somehow absent.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        let frontend_base_url = matches
            .get_one::<String>(ARG_FRONTEND_BASE_URL)
            .cloned()
            .context("missing required argument: --frontend-base-url")?;
        let session_ttl_seconds = matches
            .get_one::<i64>(ARG_SESSION_TTL_SECONDS)
            .copied()
            .unwrap_or(DEFAULT_SESSION_TTL_SECONDS);

        Ok(Self {
            frontend_base_url,
            session_ttl_seconds,
        })
    }
}
