use std::env;

use kotoba_jisho::DEFAULT_API_URL;

pub struct Config {
    /// Jisho-compatible word-search endpoint
    pub api_url: String,
}

impl Config {
    pub fn new() -> Self {
        let api_url =
            env::var("JISHO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Config { api_url }
    }
}
