use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("wheres-the-well.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub ranking: Option<Ranking>,
    pub classifier: Option<Classifier>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u32,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
    pub json_limit_mib: u64,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ranking {
    pub nearest_sources_limit: usize,
    pub nearest_alerts_limit: usize,
}

impl Default for Ranking {
    fn default() -> Self {
        Config::default().ranking.expect("Ranking configuration")
    }
}

#[rustfmt::skip]
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Classifier {
    pub clean_max_turbidity          : f64,
    pub clean_max_brown_ratio        : f64,
    pub clean_min_brightness         : f64,
    pub muddy_min_brown_ratio        : f64,
    pub muddy_min_turbidity          : f64,
    pub contaminated_min_turbidity   : f64,
    pub contaminated_max_brightness  : f64,
    pub contaminated_min_channel_gap : f64,
    pub confidences                  : Option<Confidences>,
}

impl Default for Classifier {
    fn default() -> Self {
        Config::default()
            .classifier
            .expect("Classifier configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Confidences {
    pub clean: f64,
    pub muddy: f64,
    pub contaminated: f64,
    pub uncertain: f64,
    pub undecodable: f64,
}

impl Default for Confidences {
    fn default() -> Self {
        Classifier::default()
            .confidences
            .expect("Confidences configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.db.is_some());
        assert!(cfg.webserver.is_some());
        assert!(cfg.ranking.is_some());
        assert!(cfg.classifier.is_some());
    }

    #[test]
    fn default_confidences() {
        let cfg = Confidences::default();
        assert_eq!(0.90, cfg.clean);
        assert_eq!(0.30, cfg.undecodable);
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str(
            r#"
[ranking]
nearest-sources-limit = 3
nearest-alerts-limit = 2
"#,
        )
        .unwrap();
        assert!(cfg.db.is_none());
        let ranking = cfg.ranking.unwrap();
        assert_eq!(3, ranking.nearest_sources_limit);
        assert_eq!(2, ranking.nearest_alerts_limit);
    }
}
