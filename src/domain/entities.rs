//! Domain entities: ontology constants and extracted summaries

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Required top-level key of an ontology document.
pub const ONTOLOGY_ROOT: &str = "data_types_ontology";

/// Official WeChat mini-program privacy interface taxonomy.
pub const OFFICIAL_BRANCH: &str = "微信小程序官方隐私接口";

/// Supplementary privacy data-type taxonomy.
pub const SUPPLEMENTARY_BRANCH: &str = "补充隐私数据类型";

/// Output key holding the official branch's first-level children.
pub const OFFICIAL_CHILDREN_KEY: &str = "微信小程序官方隐私接口_一级children";

/// Output key holding the supplementary branch's first-level children.
pub const SUPPLEMENTARY_CHILDREN_KEY: &str = "补充隐私数据类型_一级children";

/// Opaque node identifier, either a string or a number in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Text(String),
    Number(serde_json::Number),
}

impl NodeId {
    /// Read an identifier from a JSON value. Other value kinds are rejected.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Number(n) => Some(Self::Number(n.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Read access shared by both branch summary kinds.
pub trait ChildSummary {
    fn id(&self) -> &NodeId;

    fn terms(&self) -> &[String];

    /// Number of second-level children, if the node carries any.
    fn nested_count(&self) -> Option<usize> {
        None
    }
}

/// Summary of a first-level child in the official branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OfficialChild {
    pub id: NodeId,
    pub terms: Vec<String>,
}

impl ChildSummary for OfficialChild {
    fn id(&self) -> &NodeId {
        &self.id
    }

    fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// Summary of a first-level child in the supplementary branch.
///
/// `children_count` is only present when `has_children` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SupplementaryChild {
    pub id: NodeId,
    pub terms: Vec<String>,
    pub has_children: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_count: Option<usize>,
}

impl SupplementaryChild {
    pub fn new(id: NodeId, terms: Vec<String>, nested: Option<usize>) -> Self {
        Self {
            id,
            terms,
            has_children: nested.is_some(),
            children_count: nested,
        }
    }
}

impl ChildSummary for SupplementaryChild {
    fn id(&self) -> &NodeId {
        &self.id
    }

    fn terms(&self) -> &[String] {
        &self.terms
    }

    fn nested_count(&self) -> Option<usize> {
        self.children_count.filter(|_| self.has_children)
    }
}

/// First-level children of both branches, keyed by child name in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedChildren {
    #[serde(rename = "微信小程序官方隐私接口_一级children")]
    pub official: IndexMap<String, OfficialChild>,
    #[serde(rename = "补充隐私数据类型_一级children")]
    pub supplementary: IndexMap<String, SupplementaryChild>,
}

impl ExtractedChildren {
    pub fn official_count(&self) -> usize {
        self.official.len()
    }

    pub fn supplementary_count(&self) -> usize {
        self.supplementary.len()
    }

    pub fn total_count(&self) -> usize {
        self.official_count() + self.supplementary_count()
    }
}
