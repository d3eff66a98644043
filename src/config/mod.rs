use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::Path,
    time::Duration,
};

mod raw;

pub use raw::GeocodingGateway as GatewayKind;

const DEFAULT_CONFIG_FILE_NAME: &str = "vetgeo.toml";

const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";
const ENV_NAME_USER_AGENT: &str = "GEOCODING_USER_AGENT";

#[derive(Debug)]
pub struct Config {
    pub geocoding: Geocoding,
    pub records: Records,
}

#[derive(Debug)]
pub struct Geocoding {
    pub gateway: GeocodingGateway,
    /// Upper bound for a single lookup.
    pub timeout: Duration,
    /// Pause after each lookup.
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingGateway {
    Nominatim {
        endpoint: String,
        user_agent: String,
    },
    OpenCage {
        api_key: String,
    },
}

impl GeocodingGateway {
    /// Whether the configured timeout bounds the lookups of this gateway.
    ///
    /// The OpenCage client always uses its own default timeout.
    pub const fn applies_timeout(&self) -> bool {
        match self {
            Self::Nominatim { .. } => true,
            Self::OpenCage { .. } => false,
        }
    }
}

#[derive(Debug)]
pub struct Records {
    /// Name of the field that contains the address text.
    pub address_field: String,
}

impl Config {
    /// Load the configuration from a TOML file.
    ///
    /// Without an explicit file path `vetgeo.toml` is used if it exists,
    /// otherwise the built-in defaults.
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(
        file_path: Option<P>,
        gateway: Option<GatewayKind>,
    ) -> Result<Self> {
        let raw_config = read_raw_config(
            file_path.as_ref().map(AsRef::<Path>::as_ref),
            Path::new(DEFAULT_CONFIG_FILE_NAME),
        )?;
        let raw_config = apply_overrides(raw_config, gateway);
        Self::try_from(raw_config)
    }
}

fn read_raw_config(file_path: Option<&Path>, default_file_path: &Path) -> Result<raw::Config> {
    let Some(file_path) = file_path else {
        return match fs::read_to_string(default_file_path) {
            Ok(cfg_string) => {
                log::info!("Load configuration from {}", default_file_path.display());
                Ok(toml::from_str(&cfg_string)?)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!(
                    "{} not found => load default configuration.",
                    default_file_path.display()
                );
                Ok(raw::Config::default())
            }
            Err(err) => Err(err.into()),
        };
    };
    let cfg_string = fs::read_to_string(file_path).map_err(|err| {
        anyhow!("Unable to read configuration file {}: {err}", file_path.display())
    })?;
    Ok(toml::from_str(&cfg_string)?)
}

fn apply_overrides(mut cfg: raw::Config, gateway: Option<GatewayKind>) -> raw::Config {
    if let Some(gateway) = gateway {
        cfg.geocoding.get_or_insert_with(Default::default).gateway = Some(gateway);
    }
    if let Ok(api_key) = env::var(ENV_NAME_OPENCAGE_API_KEY) {
        cfg.gateway
            .get_or_insert_with(Default::default)
            .opencage
            .get_or_insert_with(Default::default)
            .api_key = Some(api_key);
    }
    if let Ok(user_agent) = env::var(ENV_NAME_USER_AGENT) {
        cfg.gateway
            .get_or_insert_with(Default::default)
            .nominatim
            .get_or_insert_with(Default::default)
            .user_agent = Some(user_agent);
    }
    cfg
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geocoding,
            records,
            gateway,
        } = from;

        let defaults = raw::Geocoding::default();
        let raw::Geocoding {
            gateway: gw_kind,
            timeout,
            delay,
        } = geocoding.unwrap_or_default();

        let gw_kind = gw_kind
            .or(defaults.gateway)
            .ok_or_else(|| anyhow!("Missing geocoding gateway"))?;
        let timeout = timeout
            .or(defaults.timeout)
            .ok_or_else(|| anyhow!("Missing geocoding timeout"))?;
        let delay = delay
            .or(defaults.delay)
            .ok_or_else(|| anyhow!("Missing geocoding delay"))?;
        if timeout.is_zero() {
            return Err(anyhow!("The geocoding timeout must be greater than zero"));
        }

        let gateway = gateway.unwrap_or_default();
        let gateway = match gw_kind {
            GatewayKind::Nominatim => {
                let defaults = raw::Nominatim::default();
                let raw::Nominatim {
                    endpoint,
                    user_agent,
                } = gateway.nominatim.unwrap_or_default();
                let endpoint = endpoint
                    .or(defaults.endpoint)
                    .ok_or_else(|| anyhow!("Missing 'nominatim' endpoint"))?;
                let user_agent = user_agent
                    .or(defaults.user_agent)
                    .filter(|ua| !ua.trim().is_empty())
                    .ok_or_else(|| anyhow!("Missing 'nominatim' user agent"))?;
                GeocodingGateway::Nominatim {
                    endpoint,
                    user_agent,
                }
            }
            GatewayKind::Opencage => {
                let api_key = gateway
                    .opencage
                    .and_then(|oc| oc.api_key)
                    .ok_or_else(|| {
                        anyhow!(
                            "Missing 'opencage' API key (set gateway.opencage.api-key or {ENV_NAME_OPENCAGE_API_KEY})"
                        )
                    })?;
                GeocodingGateway::OpenCage { api_key }
            }
        };

        let geocoding = Geocoding {
            gateway,
            timeout,
            delay,
        };

        let raw::Records { address_field } = records.unwrap_or_default();
        let address_field = address_field
            .or(raw::Records::default().address_field)
            .ok_or_else(|| anyhow!("Missing address field name"))?;
        let records = Records { address_field };

        Ok(Self { geocoding, records })
    }
}
