use anyhow::{Context, Result, bail};
use clap::Parser;
use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub bucket: String,
    pub region: Option<String>,
    pub endpoint: Option<String>,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Browse an S3 bucket from a web browser")]
pub struct Args {
    /// Host to bind to (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Bucket to browse (overrides S3_BUCKET)
    #[arg(long)]
    pub bucket: Option<String>,

    /// Bucket region (overrides AWS_REGION)
    #[arg(long)]
    pub region: Option<String>,

    /// Custom endpoint for S3-compatible stores (overrides S3_ENDPOINT)
    #[arg(long)]
    pub endpoint: Option<String>,
}

impl AppConfig {
    /// Parse CLI args and the process environment into an AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        let args = Args::parse();
        Self::resolve(args, |name| env::var(name).ok())
    }

    /// Merge parsed args over values produced by `lookup`.
    ///
    /// Empty environment values count as unset.
    pub fn resolve<F>(args: Args, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let env_port = match var("PORT") {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing PORT value `{}`", value))?,
            None => DEFAULT_PORT,
        };

        let bucket = match args.bucket.or_else(|| var("S3_BUCKET")) {
            Some(bucket) => bucket,
            None => bail!("no bucket configured: set S3_BUCKET or pass --bucket"),
        };

        Ok(Self {
            host: args
                .host
                .or_else(|| var("HOST"))
                .unwrap_or_else(|| DEFAULT_HOST.into()),
            port: args.port.unwrap_or(env_port),
            bucket,
            region: args.region.or_else(|| var("AWS_REGION")),
            endpoint: args.endpoint.or_else(|| var("S3_ENDPOINT")),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
