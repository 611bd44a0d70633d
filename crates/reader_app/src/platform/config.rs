use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use reader_engine::{ApiRoutes, FetchSettings};
use url::Url;

use super::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal manga reader", long_about = None)]
pub struct Args {
    /// Reader location such as `/manga/<slug>/read/<episode>/<page>`.
    /// Defaults to the last location read.
    pub location: Option<String>,

    /// Base URL of the JSON API.
    #[arg(long, env = "READER_API_BASE", default_value = "http://localhost:8080/api/")]
    pub api_base: Url,

    /// Base URL of the page image host; defaults to the API base.
    #[arg(long, env = "READER_IMAGE_BASE")]
    pub image_base: Option<Url>,

    /// Directory holding the state file and the log file.
    #[arg(long, env = "READER_STATE_DIR", default_value = ".manga_reader")]
    pub state_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Whole-request timeout for the episode list fetch.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl Args {
    pub fn api_routes(&self) -> ApiRoutes {
        match &self.image_base {
            Some(image_base) => ApiRoutes::new(self.api_base.clone(), image_base.clone()),
            None => ApiRoutes::single_host(self.api_base.clone()),
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: Duration::from_secs(self.timeout_secs.max(1)),
            ..FetchSettings::default()
        }
    }
}
