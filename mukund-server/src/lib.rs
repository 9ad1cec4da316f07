//! Mukund Server
//!
//! Loads maritime reference data from disk and serves fix evaluations
//! from [`mukund_core`] over HTTP.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};

pub mod config;
pub mod loader;
pub mod web;

/// Port used by the original vessel client
pub const DEFAULT_PORT: u16 = 5001;

#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Dataset manifest (JSON) listing zone and harbor files
    #[arg(short, long)]
    pub data: PathBuf,

    /// Address to listen on
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}
