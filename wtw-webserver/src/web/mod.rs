use rocket::{
    config::Config as RocketCfg,
    data::ToByteUnit as _,
    figment::Figment,
    Rocket, Route,
};

use crate::core::quality::QualityClassifier;

pub mod api;
mod guards;
mod sqlite;


const DEFAULT_NEAREST_SOURCES_LIMIT: usize = 10;
const DEFAULT_NEAREST_ALERTS_LIMIT: usize = 5;

// Photos are embedded as base64 data URLs
const DEFAULT_JSON_LIMIT_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub classifier: QualityClassifier,
    /// Used if a request doesn't specify a limit
    pub nearest_sources_limit: usize,
    /// Used if a request doesn't specify a limit
    pub nearest_alerts_limit: usize,
    /// Maximum size of JSON request bodies
    pub json_limit_bytes: u64,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            classifier: QualityClassifier::default(),
            nearest_sources_limit: DEFAULT_NEAREST_SOURCES_LIMIT,
            nearest_alerts_limit: DEFAULT_NEAREST_ALERTS_LIMIT,
            json_limit_bytes: DEFAULT_JSON_LIMIT_BYTES,
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;

    info!("Initialization finished");

    let figment = match rocket_cfg {
        Some(rocket_cfg) => Figment::from(rocket_cfg),
        None => RocketCfg::figment(),
    }
    .merge(("limits.json", cfg.json_limit_bytes.bytes()));
    let r = rocket::custom(figment);

    let version = guards::Version(version);

    let mut instance = r.manage(db).manage(cfg).manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(db: sqlite::Connections, enable_cors: bool, cfg: Cfg, version: &'static str) {
    let mounts = mounts();
    let options = InstanceOptions {
        mounts,
        rocket_cfg: None,
        cfg,
        version,
    };

    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        let cors = match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => cors,
            Err(err) => {
                error!("Invalid CORS options: {err}");
                return;
            }
        };
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
