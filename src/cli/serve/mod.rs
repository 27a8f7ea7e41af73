//! Local preview server for the generated tree.
//!
//! Serves whatever the generator produced; all redirect logic lives in
//! the pages themselves.

mod path;
mod response;

use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tiny_http::{Request, Server};

use crate::config::Config;
use crate::core::{is_shutdown, register_server};
use crate::redirect::{RedirectMap, entry_url};
use crate::{debug, log};

/// Maximum shortlinks listed at startup.
const STARTUP_LIST_LIMIT: usize = 20;

/// Bind the preview server and run the request loop until shutdown.
pub fn run(config: &Config, interface: Option<IpAddr>, port: Option<u16>) -> Result<()> {
    let interface = interface.unwrap_or(config.serve.interface);
    let port = port.unwrap_or(config.serve.port);
    let addr = SocketAddr::new(interface, port);

    let server = Server::http(addr).map_err(|e| anyhow::anyhow!("failed to bind {}: {}", addr, e))?;
    let server = Arc::new(server);
    register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);
    list_shortlinks(config, port);
    log!("serve"; "press Ctrl+C to stop");

    let output = config.output_dir();
    for request in server.incoming_requests() {
        if is_shutdown() {
            break;
        }
        if let Err(e) = handle_request(request, &output) {
            log!("serve"; "request error: {e}");
        }
    }

    log!("serve"; "server stopped");
    Ok(())
}

/// Handle a single HTTP request.
fn handle_request(request: Request, output: &Path) -> Result<()> {
    match path::resolve_path(request.url(), output) {
        Some(file) => {
            debug!("serve"; "{} → {}", request.url(), file.display());
            response::respond_file(request, &file)
        }
        None => response::respond_not_found(request, output),
    }
}

/// Print the configured shortlinks at startup.
///
/// A broken mapping is not fatal here; serving is read-only and the
/// tree may still hold a previous generation.
fn list_shortlinks(config: &Config, port: u16) {
    let map = match RedirectMap::load(&config.mapping_path()) {
        Ok(map) => map,
        Err(_) => {
            log!("serve"; "could not read {}", config.build.mapping);
            return;
        }
    };

    if map.is_empty() {
        log!("serve"; "no shortlinks configured");
        return;
    }

    for (i, (slug, value)) in map.iter().enumerate() {
        if i == STARTUP_LIST_LIMIT {
            log!("serve"; "... and {} more", map.len() - STARTUP_LIST_LIMIT);
            break;
        }
        let url = entry_url(value).unwrap_or("<invalid entry>");
        log!("serve"; "http://localhost:{}/{} → {}", port, slug, url);
    }
}
