// Drafting prompt templates, one per module.
// Placeholders: {target_program}, {strategy_block}, {curriculum_block},
// {clean_output_rules}. Background material is never interpolated here; it
// travels as gateway context.

pub const TRENDS_START: &str = "[TRENDS_START]";
pub const TRENDS_END: &str = "[TRENDS_END]";
pub const DRAFT_START: &str = "[DRAFT_START]";
pub const DRAFT_END: &str = "[DRAFT_END]";

/// Advisor direction line. Replace `{strategy}`.
pub const STRATEGY_BLOCK_TEMPLATE: &str = "- 顾问思路: {strategy}";

/// Pasted curriculum list for the why-school module. Replace `{curriculum}`.
pub const CURRICULUM_BLOCK_TEMPLATE: &str = "【目标课程文本列表】:{curriculum}";

/// Motivation: research first, then the draft, wrapped in the delimiter pairs.
pub const MOTIVATION_PROMPT_TEMPLATE: &str = r#"
【任务】撰写 Personal Statement 的 "申请动机" 部分。
【输入背景】
- 目标专业: {target_program}
{strategy_block}

【步骤 1：深度调研】
请先分析 {target_program} 所在领域的最新行业热点或学术趋势（列出 2-3 个）。
**必须提供具体信息源**：
- 具体的论文标题 (Title & Year)
- 知名咨询机构报告名称 (如 McKinsey, Deloitte, Gartner)
- 权威科技/商业新闻源 (如 TechCrunch, Bloomberg, Nature)
- 简述该趋势与学生背景的关联。

【步骤 2：撰写正文】
基于上述趋势和学生素材，撰写一段中文申请动机。
逻辑：学生过往经历 -> 观察到的行业痛点/趋势 -> 产生深造需求。

【🚨 严格输出格式】
请严格按照下方分隔符输出，不要包含其他内容：

[TRENDS_START]
(在此处列出调研的趋势和具体来源链接/标题)
[TRENDS_END]

[DRAFT_START]
(在此处撰写正文段落，纯文本，无Markdown)
[DRAFT_END]
"#;

/// Academic background: transcript is authoritative, material is supplementary.
pub const ACADEMIC_PROMPT_TEMPLATE: &str = r#"
【任务】撰写 "本科学习经历" (Academic Background) 部分。
【输入背景】
- 目标专业: {target_program}
- 核心依据 (成绩单): 见附带文件 (PDF或图片)
- 辅助参考 (学生素材/简历): 见附带文本
{strategy_block}

【核心原则：深度 > 数量】
不要罗列课程名。只精选 **2-3 门** 与目标专业最强相关的核心课程进行深度描写。

【内容要求 - 必须包含细节】
1. **核心概念植入**：在描述每门课时，必须提及该课程具体的**核心概念、模型、算法或理论名称**（例如：不要只说“学了统计学”，要说“掌握了假设检验(Hypothesis Testing)和多元回归分析(Multiple Regression)”）。
2. **学术真实感**：结合学生素材，简述是如何理解或应用这些概念的（例如：通过期末项目、实验报告或特定课题）。
3. **逻辑升华**：说明这些具体的知识点如何为攻读 {target_program} 打下了坚实的学术基础。
4. **禁止**：禁止写成课程清单（List），必须是连贯的学术反思叙述。
{clean_output_rules}
"#;

/// Internship / work experience.
pub const INTERNSHIP_PROMPT_TEMPLATE: &str = r#"
【任务】撰写 "实习/工作经历" (Professional Experience) 部分。
【输入背景】
- 学生素材: 见附带文本
- 目标专业: {target_program}
{strategy_block}
【内容要求】
1. 筛选最相关经历，按时间顺序逻辑串联。
2. 结构：背景 -> 职责 -> 技能 -> 动机。
3. 拒绝流水账，要有逻辑梳理和反思。
{clean_output_rules}
"#;

/// Why school: curriculum text (when pasted) plus the attached screenshots.
pub const WHY_SCHOOL_PROMPT_TEMPLATE: &str = r#"
【任务】撰写 "Why School" 部分。
【输入背景】
- 目标学校: {target_program}
{strategy_block}
{curriculum_block}
- 课程图片信息: 见附带图片

【内容要求】
1. 综合分析提供的文本列表和图片中的课程信息。
2. 从中挑选 3-4 门与学生背景或规划最相关的特定课程。
3. 说明这些课程（提及课名或概念）为何吸引学生及有何帮助。
4. 语气朴素专业，议论为主。
{clean_output_rules}
"#;

/// Career goals after graduation.
pub const CAREER_GOAL_PROMPT_TEMPLATE: &str = r#"
【任务】撰写 "职业规划" (Career Goals) 部分。
【输入背景】
- 目标专业: {target_program}
{strategy_block}
【内容要求】
1. 规划硕士毕业后的路径（应届生视角）。
2. **必须包含**：具体的公司名字、具体的职位名称。
3. 将工作内容和未来继续学习方向融合在一段话中。
{clean_output_rules}
"#;
