use anyhow::{Context, bail};
use clap::Parser;
use std::net::SocketAddr;

/// Runtime configuration for the `uuid62-axum` binary.
///
/// All values are parsed from CLI arguments or environment variables (a
/// `.env` file in the working directory is loaded first).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "uuid62-axum",
    version,
    about = "A sample HTTP service that stores UUIDs and addresses them by Base62"
)]
pub struct CliArgs {
    /// Address to listen on.
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:3000"))]
    pub server_addr: String,

    /// Maximum number of UUIDs the in-memory registry will hold.
    ///
    /// Registrations beyond this limit are refused with `503 Service
    /// Unavailable` until entries are deleted.
    ///
    /// Environment variable: `MAX_IDS`
    #[arg(long, env = "MAX_IDS", default_value_t = 1_000_000)]
    pub max_ids: usize,

    /// Allow cross-origin requests from any origin.
    ///
    /// Environment variable: `CORS_ANY`
    #[arg(long, env = "CORS_ANY", default_value_t = false)]
    pub cors_any: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: SocketAddr,
    pub max_ids: usize,
    pub cors_any: bool,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.max_ids == 0 {
            bail!("MAX_IDS must be greater than 0");
        }

        let server_addr = args
            .server_addr
            .parse()
            .with_context(|| format!("SERVER_ADDR ({}) is not a socket address", args.server_addr))?;

        Ok(Self {
            server_addr,
            max_ids: args.max_ids,
            cors_any: args.cors_any,
        })
    }
}
