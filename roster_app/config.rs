use dotenvy::dotenv;
use std::env;

use roster_game::query::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let http_port = match env::var("ROSTER_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8080),
            Err(_) => 8080,
        };

        let default_page_size = match env::var("ROSTER_DEFAULT_PAGE_SIZE") {
            Ok(val) => val.parse::<u32>().unwrap_or(DEFAULT_PAGE_SIZE).max(1),
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        let max_page_size = match env::var("ROSTER_MAX_PAGE_SIZE") {
            Ok(val) => val.parse::<u32>().unwrap_or(100),
            Err(_) => 100,
        };

        Self {
            http_port,
            default_page_size,
            max_page_size: max_page_size.max(default_page_size),
        }
    }
}
