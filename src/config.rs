use std::env;
use dotenvy::dotenv;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,

    // Attendance zone
    pub office_latitude: f64,
    pub office_longitude: f64,
    pub radius_threshold_meters: f64,

    // Rate limiting
    pub rate_api_per_min: u32,

    pub api_prefix: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://attendance.db".to_string()),

            office_latitude: env::var("OFFICE_LATITUDE")
                .unwrap_or_else(|_| "34.052235".to_string())
                .parse()
                .unwrap(),
            office_longitude: env::var("OFFICE_LONGITUDE")
                .unwrap_or_else(|_| "-118.243683".to_string())
                .parse()
                .unwrap(),
            radius_threshold_meters: env::var("RADIUS_THRESHOLD_METERS")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap(),

            rate_api_per_min: env::var("RATE_API_PER_MIN")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .unwrap(),

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
        }
    }
}
