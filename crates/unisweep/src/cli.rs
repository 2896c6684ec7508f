//! Clap derive structures for the `unisweep` CLI.

use std::path::PathBuf;

use clap::Parser;

/// unisweep -- forget UniFi clients nobody will miss
#[derive(Debug, Parser)]
#[command(
    name = "unisweep",
    version,
    about = "Forget extraneous clients from a UniFi network controller",
    long_about = "Logs in to a UniFi controller, lists every client it has ever seen, \
        and forgets the entries that have no hostname, no name, no fixed IP, \
        and no recorded traffic.\n\n\
        The forget command is sent in one batch and cannot be undone."
)]
pub struct Cli {
    /// Controller host name, IP address, or URL (https is assumed)
    pub host: String,

    /// Controller admin username
    pub username: String,

    /// Controller admin password
    pub password: String,

    /// Controller port [default: 8443]
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Site name [default: default]
    #[arg(long, short = 's')]
    pub site: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'D')]
    pub debug: bool,

    /// Settings file (TOML) with port, site, ca_cert and timeouts
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verify the controller certificate against this CA (PEM)
    #[arg(long, value_name = "PATH")]
    pub ca_cert: Option<PathBuf>,
}
