use crate::generator::context::GeneratorContext;

/// 会话内存作用域
pub struct MemoryScope;

impl MemoryScope {
    /// 流水线各阶段的中间产出
    pub const PIPELINE: &'static str = "pipeline";
    /// 供落盘的最终产物
    pub const REPORT: &'static str = "report";
}

/// 会话内存键
pub struct ScopedKeys;

impl ScopedKeys {
    pub const INPUT_NAME: &'static str = "input_name";
    pub const RESEARCH_BRIEF: &'static str = "research_brief";
    pub const USE_CASES: &'static str = "use_cases";
    pub const RESOURCE_LINKS: &'static str = "resource_links";
    pub const GENAI_SUGGESTIONS: &'static str = "genai_suggestions";
    pub const PROPOSAL: &'static str = "proposal";
    pub const RESOURCES_FILE: &'static str = "resources";
}

/// 阶段产出均为不透明文本，按键存取
pub trait PipelineMemory {
    async fn store_stage_text(&self, key: &str, text: &str) -> anyhow::Result<()>;

    async fn get_stage_text(&self, key: &str) -> Option<String>;
}

impl PipelineMemory for GeneratorContext {
    /// 存储阶段产出
    async fn store_stage_text(&self, key: &str, text: &str) -> anyhow::Result<()> {
        self.store_to_memory(MemoryScope::PIPELINE, key, text).await
    }

    /// 获取阶段产出
    async fn get_stage_text(&self, key: &str) -> Option<String> {
        self.get_from_memory(MemoryScope::PIPELINE, key).await
    }
}
