use anyhow::Result;
use std::collections::HashMap;
use std::fs;

use crate::generator::context::GeneratorContext;
use crate::generator::memory::{MemoryScope, PipelineMemory, ScopedKeys};

/// 保存报告产物
pub async fn save(context: &GeneratorContext) -> Result<()> {
    let input_name: String = context
        .get_stage_text(ScopedKeys::INPUT_NAME)
        .await
        .unwrap_or_else(|| String::from("proposal"));

    let report_tree = ReportTree::new(&input_name);
    let outlet = DiskOutlet::new(report_tree);
    outlet.save(context).await
}

pub trait Outlet {
    async fn save(&self, context: &GeneratorContext) -> Result<()>;
}

/// 文件名净化：空格与路径分隔符替换为下划线
pub fn sanitize_file_stem(name: &str) -> String {
    name.trim().replace([' ', '/'], "_")
}

pub struct ReportTree {
    /// key为会话内存REPORT作用域的键，value为输出文件的相对路径
    structure: HashMap<String, String>,
}

impl ReportTree {
    pub fn new(input_name: &str) -> Self {
        let stem = sanitize_file_stem(input_name);
        let structure = HashMap::from([
            (
                ScopedKeys::PROPOSAL.to_string(),
                format!("{}_proposal.md", stem),
            ),
            (
                ScopedKeys::RESOURCES_FILE.to_string(),
                format!("{}_ai_resources.md", stem),
            ),
        ]);
        Self { structure }
    }
}

pub struct DiskOutlet {
    report_tree: ReportTree,
}

impl DiskOutlet {
    pub fn new(report_tree: ReportTree) -> Self {
        Self { report_tree }
    }
}

impl Outlet for DiskOutlet {
    async fn save(&self, context: &GeneratorContext) -> Result<()> {
        println!("\n🖊️ 报告存储中...");
        // 创建输出目录
        let output_dir = &context.config.output_path;
        fs::create_dir_all(output_dir)?;

        // 遍历报告树结构，保存每个产物
        for (scoped_key, relative_path) in &self.report_tree.structure {
            // 从会话内存中获取产物内容
            if let Some(markdown) = context
                .get_from_memory::<String>(MemoryScope::REPORT, scoped_key)
                .await
            {
                let output_file_path = output_dir.join(relative_path);
                fs::write(&output_file_path, markdown)?;

                println!("💾 已保存: {}", output_file_path.display());
            } else {
                // 如果产物不存在，记录警告但不中断流程
                eprintln!("⚠️ 警告: 未找到报告产物，键: {}", scoped_key);
            }
        }

        println!("💾 报告保存完成，输出目录: {}", output_dir.display());
        Ok(())
    }
}
