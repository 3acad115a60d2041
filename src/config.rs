use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    /// Location of the JSON document store file.
    pub database_url: String,
    /// Remote image-upload endpoint. When unset, images land in `upload_dir`.
    pub image_upload_url: Option<String>,
    pub upload_dir: String,

    // Rate limiting
    pub rate_api_per_min: u32,
    pub rate_billing_per_min: u32,

    pub api_prefix: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "data/staffdesk.json".to_string()),
            image_upload_url: env::var("IMAGE_UPLOAD_URL").ok(),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),

            rate_api_per_min: env::var("RATE_API_PER_MIN")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .unwrap(),
            rate_billing_per_min: env::var("RATE_BILLING_PER_MIN")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .unwrap(),

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
        }
    }
}
