use emptyset_core::{Error, Probe, Result};

use crate::exec::{Invoker, SystemInvoker};

/// Default location of the Bird control CLI.
pub const BIRDC: &str = "/usr/sbin/birdc";

/// Bird flags runtime failures with reply codes in the 8000 range.
const PROTOCOL_ERROR_FLOOR: u32 = 8000;

/// Marker for "no more routes" status lines in a route listing.
const ROUTE_STATUS_MARKER: &str = "1007-";

/// Probe inspecting Bird routing tables that should stay empty.
///
/// Used for tables with a special purpose, e.g. tables where blackhole
/// routes are injected with ip-route and then learned by Bird.
#[derive(Debug)]
pub struct RouteTableProbe<I = SystemInvoker> {
    invoker: I,
    birdc: String,
}

impl Default for RouteTableProbe {
    fn default() -> Self {
        Self::new(SystemInvoker)
    }
}

impl<I: Invoker> RouteTableProbe<I> {
    pub fn new(invoker: I) -> Self {
        Self {
            invoker,
            birdc: BIRDC.to_string(),
        }
    }

    /// Override the birdc path for non-standard installs.
    pub fn with_birdc(mut self, path: impl Into<String>) -> Self {
        self.birdc = path.into();
        self
    }
}

impl<I: Invoker> Probe for RouteTableProbe<I> {
    fn source(&self) -> &'static str {
        "bird"
    }

    fn inspect(&self, table: &str) -> Result<Vec<String>> {
        let raw = self
            .invoker
            .invoke(&self.birdc, &["-r", "-v", "show", "route", "table", table])?;
        let routes = parse_route_listing(&raw)?;
        tracing::debug!(event = "routes_found", table = %table, count = routes.len());
        Ok(routes)
    }

    fn describe_breach(&self, table: &str, entries: &[String]) -> String {
        format!("Routes found in table {}: {}", table, entries.len())
    }
}

/// Extract route lines from a raw birdc reply.
///
/// The first two banner lines are dropped. The first remaining line carries
/// the leading 4-digit reply code; codes at or above 8000 are in-band
/// failures and fatal. Blank lines and "no more routes" status lines are
/// filtered out; every other line is one route entry.
pub fn parse_route_listing(raw: &str) -> Result<Vec<String>> {
    let lines: Vec<&str> = raw.lines().skip(2).collect();

    let first = lines
        .first()
        .ok_or_else(|| Error::Parse("birdc reply is shorter than expected".to_string()))?;
    let code: u32 = first
        .get(..4)
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| Error::Parse(format!("malformed birdc reply line: {first}")))?;
    if code >= PROTOCOL_ERROR_FLOOR {
        return Err(Error::Protocol(lines.join(" ")));
    }

    Ok(lines
        .iter()
        .filter(|line| !line.is_empty() && !line.starts_with(ROUTE_STATUS_MARKER))
        .map(|line| line.to_string())
        .collect())
}
