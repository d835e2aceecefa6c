use std::{net::SocketAddr, time::Duration};

use clap::Parser;

use crate::utils::datamall_client::DatamallConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "datamall-proxy", about = "Reshapes LTA DataMall feeds into flat JSON arrays")]
pub struct Config {
    /// DataMall AccountKey sent on every upstream request
    #[arg(long, env = "LTA_ACCOUNT_KEY", hide_env_values = true)]
    pub account_key: String,

    #[arg(long, env = "DATAMALL_HOST", default_value = "https://datamall2.mytransport.sg")]
    pub datamall_host: String,

    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value = "10")]
    pub upstream_timeout_secs: u64,

    #[arg(long, env = "LOG_JSON", help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl Config {
    pub fn datamall_config(&self) -> DatamallConfig {
        DatamallConfig {
            host: self.datamall_host.trim_end_matches('/').to_string(),
            account_key: self.account_key.clone(),
            timeout: Duration::from_secs(self.upstream_timeout_secs),
        }
    }
}
