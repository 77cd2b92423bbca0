//! Top-level orchestration: load, validate, extract, report, save

use serde_json::Value;
use tracing::{debug, instrument};

use crate::application::report::{
    render_csv, render_detail_view, render_name_listing, render_summary,
};
use crate::application::LoadError;
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::{
    ensure_ontology_root, extract_first_level_children, DomainError, ExtractedChildren,
};
use crate::infrastructure::di::ServiceContainer;

/// Resolve settings from config and flags, then run the extraction pipeline.
pub fn run(cli: &Cli) -> CliResult<()> {
    let mut settings = Settings::load()?;
    if let Some(dir) = &cli.dir {
        settings = settings.with_base_dir(dir.clone());
    }
    debug!("settings: {:?}", settings);

    let container = ServiceContainer::new(settings)?;
    execute(&container)
}

/// Run the full pipeline against the container's base directory.
///
/// Load and validation failures stop the run. Save failures are reported and
/// the remaining steps still run.
#[instrument(skip(container), fields(base_dir = %container.base_dir.display()))]
pub fn execute(container: &ServiceContainer) -> CliResult<()> {
    let input_file = &container.settings.input_file;
    output::info(&format!("正在从 {} 文件读取数据...", input_file));

    let document = load_document(container, input_file)?;

    if let Err(e) = ensure_ontology_root(&document) {
        if let DomainError::MissingTopLevelKey(key) = &e {
            output::failure(&format!("错误: JSON文件中缺少 '{}' 字段", key));
        }
        return Err(e.into());
    }

    let summary = extract_first_level_children(&document)?;

    output::info(&render_detail_view(&summary));
    output::info(&render_summary(&summary));
    output::info(&render_name_listing(&summary));

    save_json(container, &summary);
    save_name_list(container, &summary);

    output::info(&render_csv(&summary));
    Ok(())
}

fn load_document(container: &ServiceContainer, input_file: &str) -> CliResult<Value> {
    match container.loader.load(input_file) {
        Ok(document) => {
            output::success(&format!("成功从 {} 加载数据", input_file));
            Ok(document)
        }
        Err(e) => {
            report_load_error(&e);
            output::info("无法加载数据，程序退出。");
            output::info(&format!("请确保 {} 文件存在于当前目录。", input_file));
            Err(CliError::NoData(e))
        }
    }
}

fn report_load_error(e: &LoadError) {
    match e {
        LoadError::NotFound {
            filename,
            path,
            dir,
        } => {
            output::failure(&format!("错误: 在当前目录下未找到 {}", filename));
            output::failure(&format!("当前目录: {}", dir.display()));
            output::failure(&format!("尝试路径: {}", path.display()));
        }
        LoadError::Parse(err) => output::failure(&format!("错误: JSON文件格式不正确 - {}", err)),
        LoadError::Read(err) => output::failure(&format!("错误: 读取文件时发生错误 - {}", err)),
    }
}

fn save_json(container: &ServiceContainer, summary: &ExtractedChildren) {
    match container
        .export
        .save_json(summary, &container.settings.json_output)
    {
        Ok(path) => output::success(&format!("数据已保存到 {}", path.display())),
        Err(e) => output::failure(&format!("保存文件时出错: {}", e)),
    }
}

fn save_name_list(container: &ServiceContainer, summary: &ExtractedChildren) {
    match container
        .export
        .save_name_list(summary, &container.settings.names_output)
    {
        Ok(path) => output::success(&format!("名称列表已保存到 {}", path.display())),
        Err(e) => output::failure(&format!("保存名称列表时出错: {}", e)),
    }
}
