//! 流水线实体类型 - 各阶段之间传递的不可变文本数据

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 搜索结果条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

impl SearchResult {
    /// 格式化为提示词中嵌入的文本块
    pub fn to_prompt_block(&self) -> String {
        format!(
            "Title: {}\nSnippet: {}\nURL: {}\n",
            self.title, self.snippet, self.link
        )
    }

    /// 格式化为Markdown列表项
    pub fn to_markdown_item(&self) -> String {
        format!("- [{}]({})", self.title, self.link)
    }
}

/// 调研简报 - 研究阶段的非结构化文本输出，原样转发，不做解析
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchBrief {
    pub raw_text: String,
}

/// 用例清单 - 用例阶段的非结构化文本输出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UseCaseList {
    pub raw_text: String,
}

/// 资源链接分组，按查询意图归类
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSection {
    pub heading: String,
    pub results: Vec<SearchResult>,
}

/// 资源链接集合
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceLinks {
    pub sections: Vec<ResourceSection>,
}

impl ResourceLinks {
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.results.is_empty())
    }

    /// 渲染为Markdown文本。下载文件与报告章节共用同一份渲染结果
    pub fn to_markdown(&self) -> String {
        if self.is_empty() {
            return String::from("_No resource links found for this proposal._\n");
        }

        let mut content = String::new();
        for section in &self.sections {
            content.push_str(&format!("### {}\n\n", section.heading));
            if section.results.is_empty() {
                content.push_str("_No links found for this query._\n");
            } else {
                for result in &section.results {
                    content.push_str(&result.to_markdown_item());
                    content.push('\n');
                }
            }
            content.push('\n');
        }
        content
    }
}

/// 最终报告 - 四个阶段文本块的Markdown拼接
#[derive(Debug, Clone)]
pub struct FinalReport {
    /// 用户输入的公司或行业名称
    pub input_name: String,
    /// 生成时间
    pub generated_at: DateTime<Utc>,
    /// 调研简报
    pub research: ResearchBrief,
    /// 用例清单
    pub use_cases: UseCaseList,
    /// 资源链接
    pub resources: ResourceLinks,
    /// 通用GenAI建议（独立阶段，可跳过）
    pub suggestions: Option<String>,
}

impl FinalReport {
    /// 渲染完整报告。四个章节标题的顺序固定：
    /// Research、Use Cases、Resources、Optional Suggestions
    pub fn to_markdown(&self) -> String {
        let mut report = String::new();

        report.push_str(&format!("# AI Use Case Proposal: {}\n\n", self.input_name));
        report.push_str(&format!(
            "_Generated at {} (UTC)_\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        ));

        report.push_str("## Research\n\n");
        report.push_str(&self.research.raw_text);
        report.push_str("\n\n");

        report.push_str("## Use Cases\n\n");
        report.push_str(&self.use_cases.raw_text);
        report.push_str("\n\n");

        report.push_str("## Resources\n\n");
        report.push_str(&self.resources.to_markdown());
        report.push('\n');

        report.push_str("## Optional Suggestions\n\n");
        match &self.suggestions {
            Some(text) => report.push_str(text),
            None => report.push_str("_Skipped._"),
        }
        report.push('\n');

        report
    }
}

// Include tests
#[cfg(test)]
mod tests;
