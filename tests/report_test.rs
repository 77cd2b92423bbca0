//! Tests for console report rendering

use rstest::{fixture, rstest};

use privtax::application::report::{
    render_csv, render_detail_view, render_name_listing, render_summary,
};
use privtax::domain::{extract_first_level_children, ExtractedChildren};

#[fixture]
fn summary() -> ExtractedChildren {
    let raw = include_str!("resources/ontology.json");
    let document = serde_json::from_str(raw).expect("fixture parses");
    extract_first_level_children(&document).expect("fixture extracts")
}

#[rstest]
fn given_summary_when_rendering_detail_view_then_lists_id_and_term_preview(
    summary: ExtractedChildren,
) {
    let view = render_detail_view(&summary);
    let rule = "=".repeat(60);

    assert!(view.starts_with(&format!(
        "{rule}\n微信小程序官方隐私接口 - 一级children:\n{rule}\n总数量: 3\n\n详细信息:\n"
    )));
    assert!(view.contains(
        "1. 位置信息\n   ID: location\n   术语: 地理位置, GPS, 经纬度 ...等5个术语\n"
    ));
    assert!(view.contains("3. 相册\n   ID: album\n   术语: 照片, 图片, 视频\n\n"));
}

#[rstest]
fn given_summary_when_rendering_detail_view_then_supplementary_shows_nested_count(
    summary: ExtractedChildren,
) {
    let view = render_detail_view(&summary);

    assert!(view.contains(
        "1. 生物识别信息\n   ID: biometric\n   术语: 人脸, 指纹, 声纹 ...等4个术语\n   包含二级children: 2个\n"
    ));
    assert!(view.contains("2. 设备信息\n   ID: 1024\n   术语: \n"));
    assert_eq!(view.matches("包含二级children").count(), 1);
}

#[rstest]
fn given_summary_when_rendering_summary_then_counts_and_total(summary: ExtractedChildren) {
    let text = render_summary(&summary);

    assert!(text.ends_with(
        "微信小程序官方隐私接口一级children数量: 3\n补充隐私数据类型一级children数量: 2\n总计: 5"
    ));
}

#[rstest]
fn given_summary_when_rendering_name_listing_then_indices_are_aligned(
    summary: ExtractedChildren,
) {
    let text = render_name_listing(&summary);
    let dashes = "-".repeat(30);

    assert!(text.contains(&format!(
        "1. 微信小程序官方隐私接口:\n{dashes}\n 1. 位置信息\n 2. 通讯录\n 3. 相册"
    )));
    assert!(text.ends_with(&format!(
        "2. 补充隐私数据类型:\n{dashes}\n 1. 生物识别信息\n 2. 设备信息"
    )));
}

#[rstest]
fn given_summary_when_rendering_csv_then_quotes_name_and_id(summary: ExtractedChildren) {
    let csv = render_csv(&summary);

    assert!(csv.contains(
        "微信小程序官方隐私接口一级children:\n序号,名称,ID\n1,\"位置信息\",\"location\"\n2,\"通讯录\",\"contacts\"\n3,\"相册\",\"album\"\n"
    ));
    assert!(csv.ends_with(
        "补充隐私数据类型一级children:\n序号,名称,ID\n1,\"生物识别信息\",\"biometric\"\n2,\"设备信息\",\"1024\""
    ));
}

#[test]
fn given_empty_summary_when_rendering_csv_then_headers_only() {
    let csv = render_csv(&ExtractedChildren::default());

    assert_eq!(csv.matches("序号,名称,ID").count(), 2);
    assert!(csv.ends_with("补充隐私数据类型一级children:\n序号,名称,ID"));
}
