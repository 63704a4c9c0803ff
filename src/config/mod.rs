use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path};
use wtw_core::{
    entities::Confidence,
    quality::{Confidences, QualityClassifier, Thresholds},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "wheres-the-well.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub ranking: Ranking,
    pub classifier: QualityClassifier,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct WebServer {
    pub enable_cors: bool,
    pub json_limit_bytes: u64,
}

pub struct Ranking {
    pub nearest_sources_limit: usize,
    pub nearest_alerts_limit: usize,
}

fn confidence(name: &str, value: f64) -> Result<Confidence> {
    Confidence::try_new(value)
        .ok_or_else(|| anyhow!("The {name} confidence must be within [0, 1], got {value}"))
}

impl TryFrom<raw::Confidences> for Confidences {
    type Error = anyhow::Error;
    fn try_from(from: raw::Confidences) -> Result<Self> {
        let raw::Confidences {
            clean,
            muddy,
            contaminated,
            uncertain,
            undecodable,
        } = from;
        Ok(Self {
            clean: confidence("clean", clean)?,
            muddy: confidence("muddy", muddy)?,
            contaminated: confidence("contaminated", contaminated)?,
            uncertain: confidence("uncertain", uncertain)?,
            undecodable: confidence("undecodable", undecodable)?,
        })
    }
}

impl TryFrom<raw::Classifier> for QualityClassifier {
    type Error = anyhow::Error;
    fn try_from(from: raw::Classifier) -> Result<Self> {
        let raw::Classifier {
            clean_max_turbidity,
            clean_max_brown_ratio,
            clean_min_brightness,
            muddy_min_brown_ratio,
            muddy_min_turbidity,
            contaminated_min_turbidity,
            contaminated_max_brightness,
            contaminated_min_channel_gap,
            confidences,
        } = from;
        let thresholds = Thresholds {
            clean_max_turbidity,
            clean_max_brown_ratio,
            clean_min_brightness,
            muddy_min_brown_ratio,
            muddy_min_turbidity,
            contaminated_min_turbidity,
            contaminated_max_brightness,
            contaminated_min_channel_gap,
        };
        if [
            clean_max_turbidity,
            clean_max_brown_ratio,
            clean_min_brightness,
            muddy_min_brown_ratio,
            muddy_min_turbidity,
            contaminated_min_turbidity,
            contaminated_max_brightness,
            contaminated_min_channel_gap,
        ]
        .iter()
        .any(|t| !t.is_finite())
        {
            return Err(anyhow!("Classifier thresholds must be finite numbers"));
        }
        let confidences = confidences.unwrap_or_default().try_into()?;
        Ok(Self::new(thresholds, confidences))
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            ranking,
            classifier,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            cors,
            json_limit_mib,
        } = webserver.unwrap_or_default();
        let json_limit_bytes = json_limit_mib
            .checked_mul(1024 * 1024)
            .filter(|bytes| *bytes > 0)
            .ok_or_else(|| anyhow!("Invalid JSON limit: {json_limit_mib} MiB"))?;
        let webserver = WebServer {
            enable_cors: cors,
            json_limit_bytes,
        };

        let raw::Ranking {
            nearest_sources_limit,
            nearest_alerts_limit,
        } = ranking.unwrap_or_default();

        if nearest_sources_limit == 0 || nearest_alerts_limit == 0 {
            return Err(anyhow!("Ranking limits must be greater than 0"));
        }
        let ranking = Ranking {
            nearest_sources_limit,
            nearest_alerts_limit,
        };

        let classifier = classifier.unwrap_or_default().try_into()?;

        Ok(Self {
            db,
            webserver,
            ranking,
            classifier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Config> {
        let raw: raw::Config = toml::from_str(toml)?;
        Config::try_from(raw)
    }

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn default_classifier() {
        let cfg = parse("").unwrap();
        assert_eq!(QualityClassifier::default(), cfg.classifier);
        assert_eq!(10, cfg.ranking.nearest_sources_limit);
        assert_eq!(5, cfg.ranking.nearest_alerts_limit);
        assert_eq!(10, cfg.db.conn_pool_size);
        assert!(!cfg.webserver.enable_cors);
        assert_eq!(16 * 1024 * 1024, cfg.webserver.json_limit_bytes);
    }

    #[test]
    fn tuned_classifier() {
        let cfg = parse(
            r#"
[classifier]
clean-max-turbidity = 20.0
clean-max-brown-ratio = 0.10
clean-min-brightness = 100.0
muddy-min-brown-ratio = 0.15
muddy-min-turbidity = 50.0
contaminated-min-turbidity = 40.0
contaminated-max-brightness = 50.0
contaminated-min-channel-gap = 50.0
"#,
        )
        .unwrap();
        assert_eq!(20.0, cfg.classifier.thresholds.clean_max_turbidity);
        assert_eq!(Confidences::default(), cfg.classifier.confidences);
    }

    #[test]
    fn reject_confidence_out_of_range() {
        let res = parse(
            r#"
[classifier]
clean-max-turbidity = 30.0
clean-max-brown-ratio = 0.10
clean-min-brightness = 100.0
muddy-min-brown-ratio = 0.15
muddy-min-turbidity = 50.0
contaminated-min-turbidity = 40.0
contaminated-max-brightness = 50.0
contaminated-min-channel-gap = 50.0

[classifier.confidences]
clean = 1.5
muddy = 0.80
contaminated = 0.75
uncertain = 0.50
undecodable = 0.30
"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn reject_zero_limits() {
        let res = parse(
            r#"
[ranking]
nearest-sources-limit = 0
nearest-alerts-limit = 5
"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn reject_zero_json_limit() {
        let res = parse(
            r#"
[webserver]
cors = true
json-limit-mib = 0
"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn reject_empty_connection_pool() {
        let res = parse(
            r#"
[db]
connection-sqlite = ":memory:"
connection-pool-size = 0
"#,
        );
        assert!(res.is_err());
    }
}
