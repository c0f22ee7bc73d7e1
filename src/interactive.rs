//! Interactive terminal front end
//!
//! Stdin/stdout flow: collect the request fields, generate a batch of
//! variants, then a single-key review loop over them. Every store mutation
//! is followed by an explicit re-render of the affected draft.

use std::io::{self, Write};

use anyhow::Result;

use crate::ai::LlmBackend;
use crate::config::Config;
use crate::draft::VariantStore;
use crate::request::{
    GenerationRequest, IndustryTemplate, LengthRange, RewriteStyle, Signature, Tone,
    ValidationError,
};
use crate::session::Session;

enum ReviewOutcome {
    NewInput,
    Quit,
}

pub async fn run<B: LlmBackend>(session: &mut Session<B>, config: &Config) -> Result<()> {
    println!("営業メール自動生成");
    println!("==================");

    loop {
        let request = collect_request(config)?;

        println!("\n生成中...");
        match session.generate(&request).await {
            Ok(0) => {
                println!("メール案が生成されませんでした。");
                continue;
            }
            Ok(count) => {
                tracing::info!(count, "generated draft batch");
            }
            Err(e) => {
                if e.downcast_ref::<ValidationError>().is_some() {
                    // Warn and return to input; the store is untouched.
                    println!("すべての項目に入力してください。（{e}）");
                } else {
                    println!("生成に失敗しました: {e:#}");
                }
                continue;
            }
        }

        match review_loop(session, &request).await? {
            ReviewOutcome::NewInput => continue,
            ReviewOutcome::Quit => return Ok(()),
        }
    }
}

async fn review_loop<B: LlmBackend>(
    session: &mut Session<B>,
    request: &GenerationRequest,
) -> Result<ReviewOutcome> {
    let mut selected = 0usize;
    render_overview(session.store());
    render_draft(session.store(), selected)?;

    loop {
        // Bounds always come from the live store, never a cached count.
        let len = session.store().len();
        selected = selected.min(len.saturating_sub(1));

        print_menu(len);
        let input = prompt_line("操作")?.to_lowercase();

        match input.as_str() {
            "q" => return Ok(ReviewOutcome::Quit),
            "n" => return Ok(ReviewOutcome::NewInput),
            "g" => {
                println!("\n再生成中...");
                match session.generate(request).await {
                    Ok(_) => {
                        selected = 0;
                        render_overview(session.store());
                        render_draft(session.store(), selected)?;
                    }
                    Err(e) => println!("再生成に失敗しました: {e:#}"),
                }
            }
            "h" => render_history(session.store(), selected)?,
            "y" => {
                let draft = session.store().get(selected)?;
                println!("\n--- コピー用テキスト ---");
                println!("{}", draft.clipboard_text());
                println!("------------------------");
            }
            "1" | "2" | "3" => {
                let style = RewriteStyle::ALL[input.parse::<usize>().unwrap() - 1];
                println!("\n書き換え中（{}）...", style.action_label());
                match session.rewrite(selected, style).await {
                    Ok(()) => render_draft(session.store(), selected)?,
                    Err(e) => println!("書き換えに失敗しました: {e:#}"),
                }
            }
            other => match variant_index(other, len) {
                Some(index) => {
                    selected = index;
                    render_draft(session.store(), selected)?;
                }
                None => println!("無効な操作です。"),
            },
        }
    }
}

fn print_menu(variant_count: usize) {
    let variants: Vec<String> = (0..variant_count)
        .map(|i| variant_label(i).to_lowercase().to_string())
        .collect();
    println!("\n[{}] 案を選択", variants.join("/"));
    for (i, style) in RewriteStyle::ALL.iter().enumerate() {
        print!("  [{}] {}", i + 1, style.action_label());
    }
    println!();
    println!("  [h] 改善履歴  [y] コピー用テキスト  [g] 再生成  [n] 新しい入力  [q] 終了");
}

fn render_overview(store: &VariantStore) {
    if store.is_empty() {
        println!("\nメール案はまだありません。");
        return;
    }
    println!("\n{}件のメール案を生成しました：", store.len());
    for (i, draft) in store.iter().enumerate() {
        println!("  メール案 {}  件名：{}", variant_label(i), draft.subject);
    }
}

fn render_draft(store: &VariantStore, index: usize) -> Result<()> {
    let draft = store.get(index)?;
    println!("\n=== メール案 {} ===", variant_label(index));
    println!("件名：{}", draft.subject);
    println!("本文：\n{}", draft.body);
    if !draft.history.is_empty() {
        println!("（改善履歴 {} 件 — [h] で表示）", draft.history.len());
    }
    Ok(())
}

fn render_history(store: &VariantStore, index: usize) -> Result<()> {
    let draft = store.get(index)?;
    if draft.history.is_empty() {
        println!("改善履歴はまだありません。");
        return Ok(());
    }

    println!("\n--- 改善履歴（メール案 {}） ---", variant_label(index));
    for (i, revision) in draft.history.iter().enumerate() {
        println!(
            "履歴{}（{}）",
            i + 1,
            revision.revised_at.format("%Y-%m-%d %H:%M")
        );
        println!("件名：{}", revision.subject);
        println!("本文：\n{}\n", revision.body);
    }
    Ok(())
}

/// Display label for a variant index: A, B, C, ...
fn variant_label(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// Map a single-letter selection back to a variant index, if in range.
fn variant_index(input: &str, len: usize) -> Option<usize> {
    let mut chars = input.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let index = (c.to_ascii_lowercase() as usize).checked_sub('a' as usize)?;
    (index < len).then_some(index)
}

fn collect_request(config: &Config) -> Result<GenerationRequest> {
    println!("\nメール情報を入力");

    let company = prompt_line("相手側の会社名")?;
    let person = prompt_line("相手側の担当者名")?;
    let industry = prompt_line("相手側の業種")?;
    let service = prompt_line("自社サービスの説明")?;

    let tone_labels: Vec<&str> = Tone::ALL.iter().map(|t| t.label()).collect();
    let tone = Tone::ALL[prompt_choice("トーン（文体）", &tone_labels, 0)?];

    let min = prompt_number("本文の最小文字数", config.generation.default_length_min)?;
    let max = prompt_number("本文の最大文字数", config.generation.default_length_max)?;
    let length = LengthRange::new(min, max);
    if (length.min(), length.max()) != (min, max) {
        println!("文字数範囲を{}に調整しました。", length.hint());
    }

    let template_labels: Vec<&str> = IndustryTemplate::ALL.iter().map(|t| t.label()).collect();
    let template =
        IndustryTemplate::ALL[prompt_choice("業種テンプレート", &template_labels, 0)?];

    println!("\nあなたの情報（署名として使用）");
    let signature = Signature {
        company: prompt_line("あなたの会社名（自社名）")?,
        name: prompt_line("あなたの氏名")?,
        email: prompt_line("あなたの連絡先（メールアドレス）")?,
        phone: prompt_line("あなたの電話番号")?,
    };

    Ok(GenerationRequest {
        company,
        person,
        industry,
        service,
        tone,
        length,
        template,
        signature,
    })
}

fn prompt_line(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn prompt_choice(label: &str, options: &[&str], default: usize) -> Result<usize> {
    println!("{label}:");
    for (i, option) in options.iter().enumerate() {
        println!("  [{}] {}", i + 1, option);
    }
    loop {
        let input = prompt_line(&format!("選択 (1-{}, 空欄={})", options.len(), default + 1))?;
        if input.is_empty() {
            return Ok(default);
        }
        match input.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
            _ => println!("1〜{}の番号を入力してください。", options.len()),
        }
    }
}

fn prompt_number(label: &str, default: u32) -> Result<u32> {
    loop {
        let input = prompt_line(&format!("{label} (空欄={default})"))?;
        if input.is_empty() {
            return Ok(default);
        }
        match input.parse::<u32>() {
            Ok(n) => return Ok(n),
            Err(_) => println!("数値を入力してください。"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_labels() {
        assert_eq!(variant_label(0), 'A');
        assert_eq!(variant_label(1), 'B');
        assert_eq!(variant_label(2), 'C');
    }

    #[test]
    fn test_variant_index_respects_store_length() {
        assert_eq!(variant_index("a", 3), Some(0));
        assert_eq!(variant_index("C", 3), Some(2));
        // A letter valid for a previous, larger batch is rejected.
        assert_eq!(variant_index("c", 1), None);
        assert_eq!(variant_index("d", 3), None);
        assert_eq!(variant_index("ab", 3), None);
        assert_eq!(variant_index("", 3), None);
        assert_eq!(variant_index("1", 3), None);
    }
}
