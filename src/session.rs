//! Per-session state and the generate/rewrite actions
//!
//! A [`Session`] owns the variant store for one interactive run and is the
//! only place that mutates it. Actions run to completion sequentially; a
//! failed action leaves the store exactly as it was.

use anyhow::{Context, Result};

use crate::ai::{LlmBackend, prompts};
use crate::draft::{VariantStore, parse};
use crate::request::{GenerationRequest, RewriteStyle};

/// One interactive session: the backend handle plus the drafts generated
/// so far. Never shared between sessions.
pub struct Session<B: LlmBackend> {
    backend: B,
    variant_count: usize,
    store: VariantStore,
}

impl<B: LlmBackend> Session<B> {
    pub fn new(backend: B, variant_count: usize) -> Self {
        Self {
            backend,
            variant_count,
            store: VariantStore::new(),
        }
    }

    pub fn store(&self) -> &VariantStore {
        &self.store
    }

    /// Generate a fresh batch of draft variants, replacing the store
    /// contents. Returns the number of drafts generated.
    ///
    /// Validation failures and backend failures both abort before the store
    /// is touched: the batch is collected in full first and only then
    /// installed.
    pub async fn generate(&mut self, request: &GenerationRequest) -> Result<usize> {
        request.validate()?;

        let prompt = prompts::generation_prompt(request);
        let mut drafts = Vec::with_capacity(self.variant_count);

        for i in 0..self.variant_count {
            let reply = self
                .backend
                .generate(&prompt)
                .await
                .with_context(|| format!("Generation of variant {} failed", i + 1))?;

            let parsed = parse(&reply);
            if parsed.is_fallback() {
                tracing::debug!(
                    variant = i + 1,
                    "reply missing expected labels, using placeholder subject"
                );
            }
            drafts.push(parsed.into_draft());
        }

        self.store.replace_all(drafts);
        Ok(self.store.len())
    }

    /// Rewrite the draft at `index` in the given style, archiving its
    /// current content onto the history.
    pub async fn rewrite(&mut self, index: usize, style: RewriteStyle) -> Result<()> {
        let draft = self.store.get(index)?;
        let prompt = prompts::rewrite_prompt(draft, style);

        let reply = self
            .backend
            .generate(&prompt)
            .await
            .with_context(|| format!("Rewrite ({}) failed", style.action_label()))?;

        let rewritten = parse(&reply).into_draft();
        self.store
            .apply_rewrite(index, rewritten.subject, rewritten.body)?;

        Ok(())
    }
}
