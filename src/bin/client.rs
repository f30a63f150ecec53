//! calcd-client: send one calculator query and print the response.
//!
//! The server address may be an IPv4 or IPv6 literal; the family is
//! auto-detected by trying an IPv4 parse first, then IPv6.

use clap::Parser;
use std::io::{Read, Write};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, TcpStream};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the calculator client
#[derive(Parser, Debug)]
#[command(name = "calcd-client")]
#[command(about = "Send one expression to a calcd server", long_about = None)]
struct Args {
    /// Server IP address (IPv4 or IPv6 literal, e.g. 127.0.0.1 or ::1)
    address: String,

    /// Server port
    port: u16,

    /// Expression to evaluate, e.g. "10+20"
    query: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Try IPv4 first, then IPv6
    let addr: SocketAddr = if let Ok(v4) = args.address.parse::<Ipv4Addr>() {
        info!("detected IPv4 address");
        (v4, args.port).into()
    } else if let Ok(v6) = args.address.parse::<Ipv6Addr>() {
        info!("detected IPv6 address");
        (v6, args.port).into()
    } else {
        return Err(format!(
            "invalid IP address '{}' (IPv4 or IPv6 literal required)",
            args.address
        )
        .into());
    };

    let mut stream = TcpStream::connect(addr)?;
    info!(addr = %addr, query = %args.query, "sending query");

    let request = format!(
        "GET /calc?query={} HTTP/1.1\r\nHost: {}\r\n\r\n",
        args.query, args.address
    );
    stream.write_all(request.as_bytes())?;

    // The server sends one response and closes, so read to EOF
    let mut response = Vec::new();
    stream.read_to_end(&mut response)?;
    println!("{}", String::from_utf8_lossy(&response));

    Ok(())
}
