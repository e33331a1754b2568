use async_trait::async_trait;

use crate::generator::PipelineError;
use crate::generator::context::GeneratorContext;
use crate::generator::memory::PipelineMemory;

/// Prompt模板配置
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// 系统提示词
    pub system_prompt: String,
    /// 开头的说明性指令
    pub opening_instruction: String,
    /// 结尾的强调性指令
    pub closing_instruction: String,
}

/// 极简Agent trait - 一个Agent就是一个固定的prompt模板加一次外部调用，
/// 默认execute将模板与调研材料拼装成prompt，单次调用LLM并把输出存入会话内存
#[async_trait]
pub trait PipelineAgent: Send + Sync {
    /// Agent类型标识
    fn agent_type(&self) -> String;

    /// 输出在会话内存中的存储键
    fn memory_key(&self) -> &'static str;

    /// Prompt模板配置
    fn prompt_template(&self) -> PromptTemplate;

    /// 提供调研材料（搜索结果、前序阶段产出等），插入到prompt中部
    async fn provide_materials(
        &self,
        context: &GeneratorContext,
    ) -> Result<String, PipelineError>;

    /// 默认实现的execute方法：构建prompt → 一次LLM调用 → 存储输出
    async fn execute(&self, context: &GeneratorContext) -> Result<String, PipelineError> {
        let template = self.prompt_template();
        let materials = self.provide_materials(context).await?;

        let mut user_prompt = String::new();
        user_prompt.push_str(&template.opening_instruction);
        user_prompt.push_str("\n\n");
        if !materials.is_empty() {
            user_prompt.push_str(&materials);
            user_prompt.push_str("\n\n");
        }
        user_prompt.push_str(&template.closing_instruction);

        if context.config.verbose {
            println!(
                "   📤 [{}] prompt长度: {} 字符",
                self.agent_type(),
                user_prompt.len()
            );
        }

        let output = context
            .llm_client
            .generate(&template.system_prompt, &user_prompt)
            .await?;

        context.store_stage_text(self.memory_key(), &output).await?;

        println!("✅ Sub-Agent [{}]执行完成", self.agent_type());
        Ok(output)
    }
}
