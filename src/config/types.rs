use figment::providers::{Format, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::logging::LoggingConfig;

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0: where to listen, how to log, and the free-form
/// metadata block served by the info endpoint.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct ConfigV1 {
    pub bind_address: String,
    pub logging: LoggingConfig,
    /// Arbitrary key/value metadata (build info, contact, etc.) exposed
    /// verbatim at /actuator/info. Empty when omitted.
    #[serde(default)]
    pub info: Map<String, Value>,
}

/// Load config from a YAML file named "config.yaml" in the current directory.
pub fn load_config() -> ConfigV1 {
    let figment = Figment::new().merge(Yaml::file("./config.yaml"));
    let config = match figment.extract::<Config>() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };
    match config {
        Config::ConfigV1(c) => c,
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() {
    let schema = schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
version: "1.0.0"
bind_address: 127.0.0.1:8080
logging:
  level: "info"
  format: "console"
"#;

    fn parse(yaml: &str) -> ConfigV1 {
        let config: Config = Figment::new()
            .merge(Yaml::string(yaml))
            .extract()
            .expect("config should parse");
        match config {
            Config::ConfigV1(c) => c,
        }
    }

    #[test]
    fn minimal_config_parses() {
        let config = parse(MINIMAL);
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn info_defaults_to_empty() {
        let config = parse(MINIMAL);
        assert!(config.info.is_empty());
    }

    #[test]
    fn info_block_is_preserved() {
        let yaml = format!(
            "{}\ninfo:\n  app:\n    name: hellotron\n",
            MINIMAL.trim_end()
        );
        let config = parse(&yaml);
        assert_eq!(config.info["app"]["name"], "hellotron");
    }

    #[test]
    fn service_identity_defaults_from_crate() {
        let config = parse(MINIMAL);
        assert_eq!(config.logging.service_name, env!("CARGO_PKG_NAME"));
        assert_eq!(config.logging.service_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let yaml = MINIMAL.replace("1.0.0", "9.9.9");
        let result = Figment::new().merge(Yaml::string(&yaml)).extract::<Config>();
        assert!(result.is_err());
    }
}
