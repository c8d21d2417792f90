use std::convert::TryFrom;

use log::trace;
use serde_json::Value;

use crate::error::MalformedConfigError;
use crate::family::Family;
use crate::utils::asn_from_str;

const GROUPS_PATH: [&str; 4] = ["configuration", "protocols", "bgp", "group"];

/// Typed view of `protocols bgp` from a Junos configuration document
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BgpConfig {
    pub groups: Vec<BgpGroup>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BgpGroup {
    pub name: String,
    pub peer_as: u32,
    // Only inet/inet6 families, at most one of each, inet first
    pub families: Vec<FamilyLimit>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FamilyLimit {
    pub family: Family,
    // `unicast prefix-limit maximum`, if configured
    pub maximum: Option<u32>,
}

impl BgpGroup {
    /// Does this group's family block declare `family`?
    pub fn declares(&self, family: Family) -> bool {
        self.families.iter().any(|f| f.family == family)
    }

    pub fn limit(&self, family: Family) -> Option<u32> {
        self.families
            .iter()
            .find(|f| f.family == family)
            .and_then(|f| f.maximum)
    }
}

impl BgpConfig {
    pub fn from_json(document: &str) -> Result<Self, MalformedConfigError> {
        let value: Value = serde_json::from_str(document)
            .map_err(|err| MalformedConfigError::new("$", err.to_string()))?;
        Self::from_value(&value)
    }

    /// Decode either the attribute-style (`[{"data": ..}]`) or plain JSON rendering
    pub fn from_value(document: &Value) -> Result<Self, MalformedConfigError> {
        let mut node = document;
        let mut path = String::new();
        for key in GROUPS_PATH.iter() {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(key);
            node = child(node, key).ok_or_else(|| {
                MalformedConfigError::new(path.as_str(), "expected node is missing")
            })?;
        }
        let groups: Vec<&Value> = match node {
            Value::Array(groups) => groups.iter().collect(),
            Value::Object(_) => vec![node],
            _ => {
                return Err(MalformedConfigError::new(
                    path,
                    "expected a list of groups",
                ))
            }
        };
        let groups = groups
            .into_iter()
            .enumerate()
            .map(|(i, group)| parse_group(group, &format!("{}[{}]", path, i)))
            .collect::<Result<Vec<_>, _>>()?;
        trace!("Decoded {} BGP groups", groups.len());
        Ok(Self { groups })
    }
}

fn parse_group(group: &Value, path: &str) -> Result<BgpGroup, MalformedConfigError> {
    let name = child(group, "name")
        .and_then(leaf)
        .and_then(|v| match v {
            Value::String(s) => Some(s.to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .ok_or_else(|| {
            MalformedConfigError::new(format!("{}.name", path), "group name is missing")
        })?;

    let peer_as_path = format!("{}.peer-as", path);
    let peer_as = child(group, "peer-as")
        .ok_or_else(|| MalformedConfigError::new(peer_as_path.as_str(), "peer-as is missing"))?;
    let peer_as = parse_asn(peer_as, &peer_as_path)?;

    let mut families = Vec::new();
    if let Some(block) = child(group, "family").and_then(container) {
        if let Value::Object(entries) = block {
            for (keyword, options) in entries {
                let family = match Family::from_junos_keyword(keyword) {
                    Some(family) => family,
                    None => continue,
                };
                let max_path = format!(
                    "{}.family.{}.unicast.prefix-limit.maximum",
                    path, keyword
                );
                let maximum = match child(options, "unicast")
                    .and_then(|n| child(n, "prefix-limit"))
                    .and_then(|n| child(n, "maximum"))
                {
                    Some(node) => Some(parse_u32(node, &max_path)?),
                    None => None,
                };
                families.push(FamilyLimit { family, maximum });
            }
        }
    }
    families.sort_by_key(|f| f.family);

    Ok(BgpGroup {
        name,
        peer_as,
        families,
    })
}

/// Containers may be wrapped in a one-element list
fn container(node: &Value) -> Option<&Value> {
    match node {
        Value::Array(items) => items.first(),
        Value::Null => None,
        other => Some(other),
    }
}

fn child<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    container(node)?.get(key)
}

/// Leaves may be a bare scalar or a `{"data": scalar}` object
fn leaf(node: &Value) -> Option<&Value> {
    match container(node)? {
        Value::Object(map) => map.get("data").and_then(leaf),
        other => Some(other),
    }
}

fn parse_u32(node: &Value, path: &str) -> Result<u32, MalformedConfigError> {
    match leaf(node) {
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| MalformedConfigError::new(path, format!("'{}' is not a valid count", n))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| MalformedConfigError::new(path, format!("'{}' is not a valid count", s))),
        _ => Err(MalformedConfigError::new(path, "expected an integer")),
    }
}

fn parse_asn(node: &Value, path: &str) -> Result<u32, MalformedConfigError> {
    let asn = match leaf(node) {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => asn_from_str(s),
        _ => None,
    };
    match asn {
        Some(asn) if asn > 0 => Ok(asn),
        _ => Err(MalformedConfigError::new(path, "peer-as is not a valid ASN")),
    }
}
