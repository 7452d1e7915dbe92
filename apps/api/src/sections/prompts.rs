// Revision and translation prompt templates.

/// Whole-draft revision. Replace: {draft}, {feedback}, {clean_output_rules}.
pub const REVISE_PROMPT_TEMPLATE: &str = r#"
【任务】根据反馈修改段落。
【原段落】{draft}
【用户反馈】{feedback}
{clean_output_rules}
"#;

/// Span-targeted revision. Replace: {draft}, {span}, {instruction},
/// {clean_output_rules}. Locating the span and reassembling is left to the model.
pub const TARGETED_REVISE_PROMPT_TEMPLATE: &str = r#"
【任务】只修改段落中的指定片段。
【原段落】{draft}
【需要修改的片段】{span}
【针对该片段的修改要求】{instruction}
【修改规则】
1. 先在原段落中找到上述片段。
2. 只对该片段应用修改要求，段落其余部分必须逐字保留，不得改写。
3. 输出修改后的完整段落（不是只输出片段）。
{clean_output_rules}
"#;

/// English style contract placed ahead of the draft to translate.
pub const TRANSLATION_RULES: &str = r#"
【Translation Task】
Translate the provided Chinese text into a professional, human-sounding Personal Statement paragraph.

【🚨 CRITICAL ANTI-AI STYLE GUIDE】
1. **KILL THE "AI SENTENCE PATTERN"**:
   - **ABSOLUTELY FORBIDDEN**: The pattern "I did X, **thereby/thus/enabling** me to do Y."
   - **SOLUTION**: Split into two sentences or use active verbs.

2. **SEMICOLONS (;) FOR FLOW**:
   - **MANDATORY**: When a sentence is grammatically complete but the thought is not finished (and leads directly into the next point), use a **semicolon (;)** to connect them.
   - *Example*: "The model failed initially; this failure forced me to re-evaluate the parameters." (Instead of "The model failed initially. This failure..." or "The model failed, thereby forcing...")

3. **ADVERB CONTROL (Nuanced)**:
   - **STRICTLY PROHIBITED**: Adverbs placed immediately before verbs or adjectives to intensify them (e.g., "deeply analyze", "perfectly align", "acutely aware", "carefully examined"). Use stronger verbs instead (e.g., "scrutinized" instead of "carefully examined").
   - **ALLOWED**: "Robust" and "scalable" are permitted.

4. **VOCABULARY PURGE**:
   - Avoid "delve into", "pivotal", "tapestry". Use precise, simple words.

【🚫 BANNED WORDS LIST (Strictly Prohibited)】
[Verbs]: delve into, uncover, reveal, recognize, master, refine, cultivate, address, bridge, spearhead, pioneer, align with, stems from, underscore, highlight
[Adjectives/Adverbs]: instrumental, pivotal, seamless, systematically, rigorously, profoundly, deeply, acutely, keenly, comprehensively, perfectly, meticulously
[Nouns]: paradigm, trajectory, aspirations, vision, landscape, tapestry, realm, foundation
[Connectors]: thereby, thus (when used with -ing), in turn
[Phrases]: "not only... but also", "Building on this", "rich tapestry", "testament to", "a wide array of"

【Formatting】
1. Output as ONE single paragraph.
2. Output the ENTIRE text in **Bold**.
3. No Markdown headers.

【Input Text】:
"#;
