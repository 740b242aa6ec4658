//! Command-line configuration

use clap::{ArgAction, Parser};
use status_image_client::StatusImageClient;
use std::path::PathBuf;

/// Process configuration, parsed once at startup and handed to the server
#[derive(Debug, Clone, Parser)]
#[command(
    name = "status-image-proxy",
    version,
    about = "Caching proxy for HTTP status code images",
    disable_help_flag = true
)]
pub struct ProxyConfig {
    /// Address to listen on
    #[arg(short = 'h', long, env = "HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: u16,

    /// Directory holding cached images
    #[arg(short = 'c', long = "cache", env = "CACHE_DIR")]
    pub cache_dir: PathBuf,

    /// Base URL of the remote status image provider
    #[arg(long, env = "UPSTREAM_URL", default_value = StatusImageClient::DEFAULT_BASE_URL)]
    pub upstream_url: String,

    /// Print help (`-h` is taken by --host)
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

impl ProxyConfig {
    /// `host:port` as given on the command line
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
