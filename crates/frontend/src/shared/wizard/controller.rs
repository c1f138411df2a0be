use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::core::WizardCore;
use super::flush::FlushRegistry;
use super::schema::WizardSchema;
use crate::shared::data::QueryCache;
use crate::shared::toast::ToastService;

/// Shared services the submit coordinator touches in its completion phase.
#[derive(Clone, Copy)]
pub struct SubmitCtx {
    pub cache: QueryCache,
    pub toast: ToastService,
}

/// Reactive wrapper around [`WizardCore`], provided through context by each
/// wizard page so step components and leaf inputs share one instance.
pub struct WizardController<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    core: RwSignal<WizardCore<T>>,
    flush: StoredValue<FlushRegistry<T>>,
    alive: StoredValue<bool>,
    cache_key: &'static str,
}

impl<T: Clone + Default + Send + Sync + 'static> Clone for WizardController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Clone + Default + Send + Sync + 'static> Copy for WizardController<T> {}

impl<T: Clone + Default + Send + Sync + 'static> WizardController<T> {
    pub fn new(schema: WizardSchema<T>, cache_key: &'static str) -> Self {
        Self {
            core: RwSignal::new(WizardCore::new(Arc::new(schema))),
            flush: StoredValue::new(FlushRegistry::new()),
            alive: StoredValue::new(true),
            cache_key,
        }
    }

    /// Jump-enabled variant for find/claim flows.
    pub fn new_with_jumps(schema: WizardSchema<T>, cache_key: &'static str) -> Self {
        Self {
            core: RwSignal::new(WizardCore::new_with_jumps(Arc::new(schema))),
            flush: StoredValue::new(FlushRegistry::new()),
            alive: StoredValue::new(true),
            cache_key,
        }
    }

    /// Provide through context and tear down on unmount: flush callbacks are
    /// deregistered and any in-flight submit drops its continuation instead
    /// of touching disposed state.
    pub fn provide(self) {
        provide_context(self);
        on_cleanup(move || {
            let _ = self.alive.try_update_value(|a| *a = false);
            let _ = self.flush.try_update_value(|f| f.clear());
        });
    }

    // ------------------------------------------------------------------
    // Draft access
    // ------------------------------------------------------------------

    pub fn draft(&self) -> T {
        self.core.with(|c| c.draft.clone())
    }

    pub fn with_draft<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        self.core.with(|c| read(&c.draft))
    }

    /// Mutate one field; its stale error is dropped so edits stay
    /// interactive field-by-field.
    pub fn set_field(&self, field: &'static str, mutate: impl FnOnce(&mut T)) {
        self.core.update(|c| c.set_field(field, mutate));
    }

    /// Load an existing record for editing.
    pub fn load(&self, draft: T) {
        self.core.update(|c| c.load(draft));
    }

    pub fn error(&self, field: &'static str) -> Option<String> {
        self.core.with(|c| c.errors.get(field).cloned())
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn step(&self) -> usize {
        self.core.with(|c| c.step())
    }

    pub fn step_count(&self) -> usize {
        self.core.with_untracked(|c| c.step_count())
    }

    pub fn step_labels(&self) -> Vec<&'static str> {
        self.core
            .with_untracked(|c| c.schema().steps().iter().map(|s| s.label).collect())
    }

    pub fn is_first_step(&self) -> bool {
        self.core.with(|c| c.is_first_step())
    }

    pub fn is_last_step(&self) -> bool {
        self.core.with(|c| c.is_last_step())
    }

    pub fn next(&self) -> bool {
        self.core.try_update(|c| c.next()).unwrap_or(false)
    }

    pub fn previous(&self) {
        self.core.update(|c| c.previous());
    }

    pub fn jump(&self, step: usize) -> bool {
        self.core.try_update(|c| c.jump(step)).unwrap_or(false)
    }

    pub fn submitting(&self) -> bool {
        self.core.with(|c| c.submitting)
    }

    // ------------------------------------------------------------------
    // Pending-list flushes
    // ------------------------------------------------------------------

    pub fn register_flush(&self, flush: impl Fn(&mut T) + Send + Sync + 'static) -> u64 {
        self.flush
            .try_update_value(|r| r.register(flush))
            .unwrap_or(0)
    }

    pub fn unregister_flush(&self, id: u64) {
        let _ = self.flush.try_update_value(|r| r.unregister(id));
    }

    // ------------------------------------------------------------------
    // Submit coordinator
    // ------------------------------------------------------------------

    /// Runs the submit phases in strict order:
    /// flush -> validate -> upload -> persist -> completion.
    ///
    /// `upload` moves pending files to storage and returns the record with
    /// asset URLs merged, plus an optional warning when a secondary upload
    /// failed (the entity is still persisted; soft-failure policy).
    /// `persist` issues the POST/PATCH and returns the saved id.
    ///
    /// Validation failures abort locally with field-mapped errors and no
    /// request. Re-entry while a submit is in flight is ignored.
    pub fn submit<UpFut, PersistFut>(
        &self,
        ctx: SubmitCtx,
        success_message: &'static str,
        upload: impl FnOnce(T) -> UpFut + 'static,
        persist: impl FnOnce(T) -> PersistFut + 'static,
        on_saved: Callback<String>,
    ) where
        UpFut: Future<Output = (T, Option<String>)> + 'static,
        PersistFut: Future<Output = Result<String, String>> + 'static,
    {
        if self.core.with_untracked(|c| c.submitting) {
            return;
        }

        let flush = self.flush;
        let prepared = self.core.try_update(|c| {
            let prepared = flush
                .try_with_value(|f| c.prepare_submit(f))
                .unwrap_or(Err(()));
            if prepared.is_ok() {
                c.submitting = true;
            }
            prepared
        });

        let Some(Ok(record)) = prepared else {
            ctx.toast.error("Please fix the highlighted fields");
            return;
        };

        let this = *self;
        spawn_local(async move {
            let (record, upload_warning) = upload(record).await;

            match persist(record).await {
                Ok(id) => {
                    // Lists refetch through the cache's own invalidation
                    // primitive; readers never observe a torn page.
                    ctx.cache.invalidate(this.cache_key);
                    if !this.is_alive() {
                        return;
                    }
                    let _ = this.core.try_update(|c| c.finish_success());
                    if let Some(warning) = upload_warning {
                        ctx.toast.warning(warning);
                    }
                    ctx.toast.success(success_message);
                    on_saved.run(id);
                }
                Err(e) => {
                    log::error!("submit failed: {}", e);
                    let _ = this.core.try_update(|c| c.submitting = false);
                    if this.is_alive() {
                        ctx.toast.error(format!("Request failed: {}", e));
                    }
                }
            }
        });
    }

    fn is_alive(&self) -> bool {
        self.alive.try_with_value(|a| *a).unwrap_or(false)
    }
}

/// Context accessor used by step components and leaf inputs.
pub fn use_wizard<T: Clone + Default + Send + Sync + 'static>() -> WizardController<T> {
    use_context::<WizardController<T>>().expect("WizardController not provided in context")
}
