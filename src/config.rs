use std::env;

use crate::validate::DEFAULT_REQUIRED_FIELDS;

#[derive(Debug)]
pub struct Config {
    pub queue_url: String,
    pub required_fields: Vec<String>,
}

impl Config {
    pub fn load_from_env() -> Result<Config, String> {
        let conf = Config {
            queue_url: env::var("QUEUE_URL").map_err(|e| format!("QUEUE_URL not set - {}", e))?,
            required_fields: match env::var("REQUIRED_FIELDS") {
                Ok(raw) => parse_required_fields(&raw)?,
                Err(_) => DEFAULT_REQUIRED_FIELDS
                    .iter()
                    .map(|f| f.to_string())
                    .collect(),
            },
        };

        Ok(conf)
    }
}

// comma separated, order preserved
fn parse_required_fields(raw: &str) -> Result<Vec<String>, String> {
    let fields: Vec<String> = raw.split(',').map(|f| f.trim().to_string()).collect();
    if fields.iter().any(|f| f.is_empty()) {
        return Err(format!(
            "REQUIRED_FIELDS contains an empty field name - {}",
            raw
        ));
    }

    Ok(fields)
}
