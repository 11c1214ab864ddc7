// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only)

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::error::ScrapeError;
use crate::params::{HOST, PORT};

fn fetch_err(e: std::io::Error) -> ScrapeError {
    ScrapeError::Fetch(e.to_string())
}

pub fn http_get(path: &str) -> Result<String, ScrapeError> {
    let mut s = TcpStream::connect((HOST, PORT)).map_err(fetch_err)?;
    s.set_read_timeout(Some(Duration::from_secs(15))).map_err(fetch_err)?;
    s.set_write_timeout(Some(Duration::from_secs(15))).map_err(fetch_err)?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: gym_scrape/0.1\r\nConnection: close\r\n\r\n",
        path, HOST
    );
    s.write_all(req.as_bytes()).map_err(fetch_err)?;
    s.flush().map_err(fetch_err)?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf).map_err(fetch_err)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(ScrapeError::Fetch(format!("HTTP error: {} {}{}", status, HOST, path)));
    }
    let body_idx = resp
        .find("\r\n\r\n")
        .ok_or_else(|| ScrapeError::Fetch(s!("malformed HTTP response")))?
        + 4;
    Ok(resp[body_idx..].to_string())
}
