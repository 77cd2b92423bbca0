//! Tests for ExportService

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use privtax::application::services::ExportService;
use privtax::domain::{
    ExtractedChildren, NodeId, OfficialChild, SupplementaryChild, OFFICIAL_CHILDREN_KEY,
    SUPPLEMENTARY_CHILDREN_KEY,
};
use privtax::infrastructure::traits::RealFileSystem;

fn sample_summary() -> ExtractedChildren {
    let mut summary = ExtractedChildren::default();
    summary.official.insert(
        "位置信息".to_string(),
        OfficialChild {
            id: "location".into(),
            terms: vec!["地理位置".to_string(), "GPS".to_string()],
        },
    );
    summary.official.insert(
        "通讯录".to_string(),
        OfficialChild {
            id: "contacts".into(),
            terms: vec![],
        },
    );
    summary.supplementary.insert(
        "生物识别信息".to_string(),
        SupplementaryChild::new("biometric".into(), vec!["人脸".to_string()], Some(2)),
    );
    summary.supplementary.insert(
        "设备信息".to_string(),
        SupplementaryChild::new(
            NodeId::Number(serde_json::Number::from(1024)),
            vec![],
            None,
        ),
    );
    summary
}

fn export(dir: &TempDir) -> ExportService {
    ExportService::new(Arc::new(RealFileSystem), dir.path().to_path_buf())
}

#[test]
fn given_summary_when_saving_json_then_reload_is_deep_equal() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let summary = sample_summary();

    // Act
    let path = export(&temp)
        .save_json(&summary, "extracted_children.json")
        .unwrap();

    // Assert
    assert_eq!(path, temp.path().join("extracted_children.json"));
    let reloaded: ExtractedChildren =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(reloaded, summary);
}

#[test]
fn given_summary_when_saving_json_then_pretty_with_literal_non_ascii() {
    let temp = TempDir::new().unwrap();

    let path = export(&temp)
        .save_json(&sample_summary(), "extracted_children.json")
        .unwrap();

    let content = fs::read_to_string(path).unwrap();
    assert!(content.starts_with(&format!("{{\n  \"{}\": {{\n    \"位置信息\"", OFFICIAL_CHILDREN_KEY)));
    assert!(content.contains("\"地理位置\""));
    assert!(!content.contains("\\u"));
    assert!(content.contains("\"id\": 1024"));
    assert!(content.contains("\"children_count\": 2"));
}

#[test]
fn given_empty_branch_when_saving_json_then_writes_empty_object() {
    let temp = TempDir::new().unwrap();
    let mut summary = sample_summary();
    summary.supplementary.clear();

    let path = export(&temp).save_json(&summary, "out.json").unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(value[SUPPLEMENTARY_CHILDREN_KEY], serde_json::json!({}));
}

#[test]
fn given_summary_when_saving_name_list_then_writes_numbered_names_and_statistics() {
    let temp = TempDir::new().unwrap();
    let rule = "=".repeat(50);

    let path = export(&temp)
        .save_name_list(&sample_summary(), "children_names.txt")
        .unwrap();

    let expected = format!(
        "{rule}\n微信小程序官方隐私接口一级children名称列表\n{rule}\n\
         1. 位置信息\n2. 通讯录\n\
         \n{rule}\n补充隐私数据类型一级children名称列表\n{rule}\n\
         1. 生物识别信息\n2. 设备信息\n\
         \n{rule}\n统计信息\n{rule}\n\
         微信小程序官方隐私接口: 2 个\n补充隐私数据类型: 2 个\n总计: 4 个\n"
    );
    assert_eq!(fs::read_to_string(path).unwrap(), expected);
}

#[test]
fn given_empty_branch_when_saving_name_list_then_banner_without_entries() {
    let temp = TempDir::new().unwrap();
    let rule = "=".repeat(50);
    let mut summary = sample_summary();
    summary.official.clear();

    let path = export(&temp)
        .save_name_list(&summary, "children_names.txt")
        .unwrap();

    let content = fs::read_to_string(path).unwrap();
    assert!(content.starts_with(&format!(
        "{rule}\n微信小程序官方隐私接口一级children名称列表\n{rule}\n\n{rule}\n补充"
    )));
    assert!(content.contains("微信小程序官方隐私接口: 0 个\n"));
    assert!(content.ends_with("总计: 2 个\n"));
}

#[test]
fn given_missing_output_dir_when_saving_then_reports_path_context() {
    let temp = TempDir::new().unwrap();
    let service = ExportService::new(Arc::new(RealFileSystem), temp.path().join("missing"));

    let err = service.save_json(&sample_summary(), "out.json").unwrap_err();

    assert!(err.to_string().contains("write JSON"));
    assert!(err.to_string().contains("out.json"));
}
