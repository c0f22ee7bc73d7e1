//! Prompt assembly for generation and rewrite requests
//!
//! Pure string construction; validation happens before these are called.
//! Both prompts end with the fixed output-format directive (`件名：` then
//! `本文：`) that the reply parser relies on.

use crate::draft::EmailDraft;
use crate::request::{GenerationRequest, RewriteStyle};

/// Build the instruction for one fresh generation from the request fields.
pub fn generation_prompt(request: &GenerationRequest) -> String {
    format!(
        "あなたは営業メールの専門ライターです。\n\
         以下の情報を元に、営業メールを作成してください。\n\
         \n\
         【ターゲット企業】\n\
         会社名：{company}\n\
         担当者名：{person}\n\
         業種：{industry}\n\
         \n\
         【自社サービス】\n\
         {service}\n\
         \n\
         【メール作成者（署名）】\n\
         会社名：{sig_company}\n\
         氏名：{sig_name}\n\
         メール：{sig_email}\n\
         電話番号：{sig_phone}\n\
         \n\
         【業種テンプレート】\n\
         {template}\n\
         \n\
         【トーン】\n\
         {tone}\n\
         \n\
         【本文の長さ】\n\
         本文は約{length}に収めてください。\n\
         \n\
         【条件】\n\
         ・件名を必ず作る\n\
         ・ビジネスメール形式\n\
         ・末尾に署名（会社名 / 氏名 / メール / 電話番号）を含める\n\
         \n\
         出力形式（必ずこの形式で）：\n\
         件名：\n\
         本文：\n",
        company = request.company,
        person = request.person,
        industry = request.industry,
        service = request.service,
        sig_company = request.signature.company,
        sig_name = request.signature.name,
        sig_email = request.signature.email,
        sig_phone = request.signature.phone,
        template = request.template.label(),
        tone = request.tone.label(),
        length = request.length.hint(),
    )
}

/// Build the instruction to restyle an existing draft.
pub fn rewrite_prompt(draft: &EmailDraft, style: RewriteStyle) -> String {
    format!(
        "以下の営業メールを、{style}な文体に書き換えてください。\n\
         元のメール：\n\
         件名：{subject}\n\
         本文：{body}\n\
         条件：\n\
         - ビジネスメール形式\n\
         出力形式：\n\
         件名：\n\
         本文：\n",
        style = style.descriptor(),
        subject = draft.subject,
        body = draft.body,
    )
}
