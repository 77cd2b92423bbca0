//! First-level extraction of the two taxonomy branches
//!
//! The official branch is summarized flat. The supplementary branch also records
//! whether a child carries a second level and how many entries it has.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::entities::{
    ExtractedChildren, NodeId, OfficialChild, SupplementaryChild, OFFICIAL_BRANCH, ONTOLOGY_ROOT,
    SUPPLEMENTARY_BRANCH,
};
use crate::domain::error::{DomainError, DomainResult};

type Node = Map<String, Value>;

/// Locate the `data_types_ontology` object of a parsed document.
pub fn ensure_ontology_root(document: &Value) -> DomainResult<&Node> {
    let root = document
        .get(ONTOLOGY_ROOT)
        .ok_or(DomainError::MissingTopLevelKey(ONTOLOGY_ROOT))?;
    root.as_object()
        .ok_or_else(|| DomainError::malformed(ONTOLOGY_ROOT, "expected an object"))
}

/// Extract the first-level children of both branches.
pub fn extract_first_level_children(document: &Value) -> DomainResult<ExtractedChildren> {
    let root = ensure_ontology_root(document)?;
    let extracted = ExtractedChildren {
        official: extract_official_children(root)?,
        supplementary: extract_supplementary_children(root)?,
    };
    debug!(
        "extracted {} official and {} supplementary children",
        extracted.official_count(),
        extracted.supplementary_count()
    );
    Ok(extracted)
}

/// Summarize each child of the official branch as `{id, terms}`.
pub fn extract_official_children(root: &Node) -> DomainResult<IndexMap<String, OfficialChild>> {
    branch_children(root, OFFICIAL_BRANCH)?
        .iter()
        .map(|(name, node)| {
            let path = node_path(OFFICIAL_BRANCH, name);
            let child = OfficialChild {
                id: node_id(&path, node)?,
                terms: node_terms(&path, node)?,
            };
            Ok((name.clone(), child))
        })
        .collect()
}

/// Summarize each child of the supplementary branch, including its nesting signal.
pub fn extract_supplementary_children(
    root: &Node,
) -> DomainResult<IndexMap<String, SupplementaryChild>> {
    branch_children(root, SUPPLEMENTARY_BRANCH)?
        .iter()
        .map(|(name, node)| {
            let path = node_path(SUPPLEMENTARY_BRANCH, name);
            let child = SupplementaryChild::new(
                node_id(&path, node)?,
                node_terms(&path, node)?,
                nested_count(&path, node)?,
            );
            Ok((name.clone(), child))
        })
        .collect()
}

fn branch_children<'a>(root: &'a Node, branch: &'static str) -> DomainResult<&'a Node> {
    let node = root
        .get(branch)
        .ok_or(DomainError::BranchNotFound(branch))?;
    node.get("children")
        .and_then(Value::as_object)
        .ok_or_else(|| DomainError::malformed(branch, "missing `children` object"))
}

fn node_path(branch: &str, child: &str) -> String {
    format!("{}/{}", branch, child)
}

fn node_id(path: &str, node: &Value) -> DomainResult<NodeId> {
    let value = node
        .get("id")
        .ok_or_else(|| DomainError::malformed(path, "missing `id`"))?;
    NodeId::from_value(value)
        .ok_or_else(|| DomainError::malformed(path, "`id` must be a string or number"))
}

fn node_terms(path: &str, node: &Value) -> DomainResult<Vec<String>> {
    let terms = node
        .get("terms")
        .and_then(Value::as_array)
        .ok_or_else(|| DomainError::malformed(path, "missing `terms` array"))?;
    terms
        .iter()
        .map(|term| {
            term.as_str()
                .map(str::to_string)
                .ok_or_else(|| DomainError::malformed(path, "`terms` must contain strings"))
        })
        .collect()
}

fn nested_count(path: &str, node: &Value) -> DomainResult<Option<usize>> {
    match node.get("children") {
        None => Ok(None),
        Some(Value::Object(children)) => Ok(Some(children.len())),
        Some(Value::Array(children)) => Ok(Some(children.len())),
        Some(_) => Err(DomainError::malformed(
            path,
            "`children` must be an object or array",
        )),
    }
}
