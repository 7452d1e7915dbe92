// Shared prompt fragments.
// Each workflow that calls the model keeps its own prompts.rs alongside it;
// this file only holds the cross-cutting output contract and the filler.

/// Output-cleanliness contract appended to every Chinese drafting and
/// revision prompt: body text only, no framing, no Markdown, one paragraph.
pub const CLEAN_OUTPUT_RULES: &str = "
【🚨 绝对输出规则】
1. 只输出正文内容本身。
2. 严禁包含开场白、结尾语或结构说明。
3. 严禁使用 Markdown 格式（如加粗、列表符号、标题符号）。
4. 输出必须是纯文本。
5. 必须写成一个完整的、连贯的中文自然段。
";

/// Replaces every `{key}` in `template` with its value in one left-to-right
/// pass. Inserted values are never scanned again, so user text containing a
/// literal `{target_program}` stays literal. Unknown braces are kept as is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = values
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}
