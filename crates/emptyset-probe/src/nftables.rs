use chrono::{DateTime, Duration, Local};
use serde::Deserialize;
use serde_json::Value;

use emptyset_core::{Error, Probe, Result};

use crate::exec::{Invoker, SystemInvoker};

/// Default location of the nftables CLI.
pub const NFT: &str = "/usr/sbin/nft";

/// Probe inspecting nftables sets that should stay empty.
///
/// Used for firewall sets with a special purpose, e.g. sets matching IPs
/// that get completely blocked. Listing a set requires root.
#[derive(Debug)]
pub struct NftSetProbe<I = SystemInvoker> {
    invoker: I,
    nft: String,
}

impl Default for NftSetProbe {
    fn default() -> Self {
        Self::new(SystemInvoker)
    }
}

impl<I: Invoker> NftSetProbe<I> {
    pub fn new(invoker: I) -> Self {
        Self {
            invoker,
            nft: NFT.to_string(),
        }
    }

    /// Override the nft path for non-standard installs.
    pub fn with_nft(mut self, path: impl Into<String>) -> Self {
        self.nft = path.into();
        self
    }
}

impl<I: Invoker> Probe for NftSetProbe<I> {
    fn source(&self) -> &'static str {
        "nftables"
    }

    fn inspect(&self, set: &str) -> Result<Vec<String>> {
        let raw = self.invoker.invoke(&self.nft, &["-j", "list", "set", set])?;
        let elements = parse_set_listing(&raw, Local::now())?;
        tracing::debug!(event = "elements_found", set = %set, count = elements.len());
        Ok(elements)
    }

    fn describe_breach(&self, set: &str, entries: &[String]) -> String {
        format!(
            "Elements found in firewall set {}: {}",
            set,
            entries.join(", ")
        )
    }
}

/// Wire model of `nft -j list set`, reduced to the branch the probe reads.
#[derive(Debug, Deserialize)]
struct SetListing {
    #[serde(default)]
    nftables: Vec<ListingNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListingNode {
    set: Option<SetBody>,
}

#[derive(Debug, Deserialize)]
struct SetBody {
    #[serde(default)]
    elem: Vec<SetElement>,
}

/// A set element is either a bare value or a record with options attached.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SetElement {
    Extended { elem: ElemFields },
    Plain(String),
}

#[derive(Debug, Deserialize)]
struct ElemFields {
    val: Value,
    expires: Option<i64>,
}

/// Parse a raw set listing into rendered element strings.
///
/// The `nftables` array holds a metainfo object followed by the requested
/// set; the element list may be absent entirely when the set is empty. `now`
/// is the time of check, used to turn relative expiries into absolute
/// timestamps.
pub fn parse_set_listing(raw: &str, now: DateTime<Local>) -> Result<Vec<String>> {
    let listing: SetListing = serde_json::from_str(raw)
        .map_err(|err| Error::Parse(format!("unrecognized nft output: {err}")))?;

    let body = listing
        .nftables
        .get(1)
        .and_then(|node| node.set.as_ref())
        .ok_or_else(|| Error::Parse("nft output carries no set object".to_string()))?;

    Ok(body
        .elem
        .iter()
        .map(|element| render_element(element, now))
        .collect())
}

fn render_element(element: &SetElement, now: DateTime<Local>) -> String {
    match element {
        SetElement::Plain(value) => value.clone(),
        SetElement::Extended { elem } => {
            let mut rendered = value_text(&elem.val);
            if let Some(seconds) = elem.expires {
                let expires = now + Duration::seconds(seconds);
                rendered.push_str(&format!(
                    " expires at {}",
                    expires.format("%Y-%m-%d %H:%M:%S")
                ));
            }
            rendered
        }
    }
}

/// JSON strings render without quoting; other values keep their JSON text.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
