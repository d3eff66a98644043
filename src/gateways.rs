use crate::config::{self, GeocodingGateway};
use anyhow::Result;
use vetgeo_core::gateways::geocode::GeoCodingGateway;
use vetgeo_gateways::{nominatim::Nominatim, opencage::OpenCage};

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Result<Box<dyn GeoCodingGateway>> {
    if !cfg.gateway.applies_timeout() {
        log::warn!(
            "The configured timeout of {:?} is not applied to the selected gateway",
            cfg.timeout
        );
    }
    let gw: Box<dyn GeoCodingGateway> = match &cfg.gateway {
        GeocodingGateway::Nominatim {
            endpoint,
            user_agent,
        } => {
            log::info!("Use Nominatim gateway ({endpoint}) as '{user_agent}'");
            Box::new(Nominatim::try_new(endpoint.as_str(), user_agent, cfg.timeout)?)
        }
        GeocodingGateway::OpenCage { api_key } => {
            log::info!("Use OpenCage gateway");
            Box::new(OpenCage::new(api_key.clone()))
        }
    };
    Ok(gw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn create_configured_gateways() {
        let cfg = config::Geocoding {
            gateway: GeocodingGateway::Nominatim {
                endpoint: "http://localhost:8080/search".into(),
                user_agent: "test".into(),
            },
            timeout: Duration::from_secs(1),
            delay: Duration::ZERO,
        };
        assert!(geocoding_gateway(&cfg).is_ok());
        let cfg = config::Geocoding {
            gateway: GeocodingGateway::OpenCage {
                api_key: "key".into(),
            },
            ..cfg
        };
        assert!(geocoding_gateway(&cfg).is_ok());
    }

    #[test]
    fn only_nominatim_applies_the_configured_timeout() {
        let nominatim = GeocodingGateway::Nominatim {
            endpoint: "http://localhost:8080/search".into(),
            user_agent: "test".into(),
        };
        let opencage = GeocodingGateway::OpenCage {
            api_key: "key".into(),
        };
        assert!(nominatim.applies_timeout());
        assert!(!opencage.applies_timeout());
    }
}
