use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("vetgeo.default.toml");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub geocoding: Option<Geocoding>,
    pub records: Option<Records>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub delay: Option<Duration>,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default()
            .geocoding
            .expect("Geocoding configuration")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Nominatim,
    Opencage,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Records {
    pub address_field: Option<String>,
}

impl Default for Records {
    fn default() -> Self {
        Config::default().records.expect("Records configuration")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub nominatim: Option<Nominatim>,
    pub opencage: Option<OpenCage>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub endpoint: Option<String>,
    pub user_agent: Option<String>,
}

impl Default for Nominatim {
    fn default() -> Self {
        Gateway::default()
            .nominatim
            .expect("Nominatim gateway configuration")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OpenCage {
    pub api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.geocoding.is_some());
        assert!(cfg.records.is_some());
        assert!(cfg.gateway.is_some());
    }

    #[test]
    fn default_geocoding_config() {
        let cfg = Geocoding::default();
        assert_eq!(Some(GeocodingGateway::Nominatim), cfg.gateway);
        assert_eq!(Some(Duration::from_secs(10)), cfg.timeout);
        assert_eq!(Some(Duration::from_secs(1)), cfg.delay);
    }

    #[test]
    fn default_nominatim_config() {
        let cfg = Nominatim::default();
        assert!(cfg.endpoint.is_some());
        assert_eq!(Some("vetopinie-geocoder"), cfg.user_agent.as_deref());
        assert!(Gateway::default().opencage.is_none());
    }

    #[test]
    fn parse_full_config_example_from_file() {
        let cfg_string = fs::read_to_string("src/config/vetgeo.full-example.toml").unwrap();
        let cfg: Config = toml::from_str(&cfg_string).unwrap();
        let geocoding = cfg.geocoding.unwrap();
        assert_eq!(Some(GeocodingGateway::Opencage), geocoding.gateway);
        assert_eq!(Some(Duration::from_millis(1500)), geocoding.delay);
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str("[geocoding]\ndelay = \"2s\"").unwrap();
        let geocoding = cfg.geocoding.unwrap();
        assert!(geocoding.gateway.is_none());
        assert!(geocoding.timeout.is_none());
        assert_eq!(Some(Duration::from_secs(2)), geocoding.delay);
        assert!(cfg.records.is_none());
    }
}
