//! Report rendering for extracted children
//!
//! Every renderer is a pure function of `ExtractedChildren` and returns the text
//! without a trailing newline, except `render_name_list_file` which returns file
//! content.

use indexmap::IndexMap;

use crate::domain::{ChildSummary, ExtractedChildren, OFFICIAL_BRANCH, SUPPLEMENTARY_BRANCH};

/// Terms shown in a detail preview before it is truncated.
pub const TERMS_PREVIEW_LIMIT: usize = 3;

const CONSOLE_RULE_WIDTH: usize = 60;
const FILE_RULE_WIDTH: usize = 50;
const LISTING_RULE_WIDTH: usize = 30;

fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

fn banner(lines: &mut Vec<String>, title: &str) {
    lines.push(rule('=', CONSOLE_RULE_WIDTH));
    lines.push(title.to_string());
    lines.push(rule('=', CONSOLE_RULE_WIDTH));
}

/// Join the first few terms; longer lists get a suffix with the total count.
pub fn terms_preview(terms: &[String]) -> String {
    let mut preview = terms
        .iter()
        .take(TERMS_PREVIEW_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if terms.len() > TERMS_PREVIEW_LIMIT {
        preview.push_str(&format!(" ...等{}个术语", terms.len()));
    }
    preview
}

fn detail_section<C: ChildSummary>(
    lines: &mut Vec<String>,
    branch: &str,
    children: &IndexMap<String, C>,
) {
    banner(lines, &format!("{} - 一级children:", branch));
    lines.push(format!("总数量: {}", children.len()));
    lines.push(String::new());
    lines.push("详细信息:".to_string());
    for (i, (name, child)) in children.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, name));
        lines.push(format!("   ID: {}", child.id()));
        lines.push(format!("   术语: {}", terms_preview(child.terms())));
        if let Some(count) = child.nested_count() {
            lines.push(format!("   包含二级children: {}个", count));
        }
        lines.push(String::new());
    }
}

/// Per-branch detail view: count, then id and a terms preview per child.
pub fn render_detail_view(summary: &ExtractedChildren) -> String {
    let mut lines = Vec::new();
    detail_section(&mut lines, OFFICIAL_BRANCH, &summary.official);
    lines.push(String::new());
    detail_section(&mut lines, SUPPLEMENTARY_BRANCH, &summary.supplementary);
    lines.join("\n")
}

/// Per-branch counts and the grand total.
pub fn render_summary(summary: &ExtractedChildren) -> String {
    let mut lines = Vec::new();
    banner(&mut lines, "统计摘要:");
    lines.push(format!(
        "{}一级children数量: {}",
        OFFICIAL_BRANCH,
        summary.official_count()
    ));
    lines.push(format!(
        "{}一级children数量: {}",
        SUPPLEMENTARY_BRANCH,
        summary.supplementary_count()
    ));
    lines.push(format!("总计: {}", summary.total_count()));
    lines.join("\n")
}

fn branch_names(summary: &ExtractedChildren) -> [(&'static str, Vec<&String>); 2] {
    [
        (OFFICIAL_BRANCH, summary.official.keys().collect()),
        (SUPPLEMENTARY_BRANCH, summary.supplementary.keys().collect()),
    ]
}

/// Child names of both branches, numbered with aligned indices.
pub fn render_name_listing(summary: &ExtractedChildren) -> String {
    let mut lines = vec![String::new()];
    banner(&mut lines, "所有一级children名称:");

    let sections = branch_names(summary);
    for (n, (branch, names)) in sections.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("{}. {}:", n + 1, branch));
        lines.push(rule('-', LISTING_RULE_WIDTH));
        for (i, name) in names.iter().enumerate() {
            lines.push(format!("{:2}. {}", i + 1, name));
        }
    }
    lines.join("\n")
}

/// Content of the plain-text name list file.
pub fn render_name_list_file(summary: &ExtractedChildren) -> String {
    let file_rule = rule('=', FILE_RULE_WIDTH);
    let mut out = String::new();

    let sections = branch_names(summary);
    for (n, (branch, names)) in sections.iter().enumerate() {
        if n > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}\n{}一级children名称列表\n{}\n", file_rule, branch, file_rule));
        for (i, name) in names.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, name));
        }
    }

    out.push_str(&format!("\n{}\n统计信息\n{}\n", file_rule, file_rule));
    out.push_str(&format!("{}: {} 个\n", OFFICIAL_BRANCH, summary.official_count()));
    out.push_str(&format!(
        "{}: {} 个\n",
        SUPPLEMENTARY_BRANCH,
        summary.supplementary_count()
    ));
    out.push_str(&format!("总计: {} 个\n", summary.total_count()));
    out
}

fn csv_section<C: ChildSummary>(
    lines: &mut Vec<String>,
    branch: &str,
    children: &IndexMap<String, C>,
) {
    lines.push(String::new());
    lines.push(format!("{}一级children:", branch));
    lines.push("序号,名称,ID".to_string());
    for (i, (name, child)) in children.iter().enumerate() {
        lines.push(format!("{},\"{}\",\"{}\"", i + 1, name, child.id()));
    }
}

/// CSV-style lines (`index,"name","id"`) per branch, for console output.
pub fn render_csv(summary: &ExtractedChildren) -> String {
    let mut lines = vec![String::new()];
    banner(&mut lines, "CSV格式:");
    csv_section(&mut lines, OFFICIAL_BRANCH, &summary.official);
    csv_section(&mut lines, SUPPLEMENTARY_BRANCH, &summary.supplementary);
    lines.join("\n")
}
