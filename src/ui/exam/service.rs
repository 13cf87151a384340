//! Exam page context: page state, snapshot loading and mutations
//!
//! The page state lives in one signal. Loading is driven by the loader's
//! revision: every `mark_dirty` bumps it, which starts a fetch tagged with a
//! fresh generation. Mutations run their remote call first and only then
//! close the dialog and mark the data stale.

use std::future::Future;

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::{ApiClient, ApiError, PlatformTransport};
use crate::core::page::{Dialog, ExamPageState, ExamSnapshot, fetch_snapshot};
use crate::ui::auth::{SessionContext, use_session};

/// How long a success notice stays visible
const NOTICE_DISMISS_MS: u32 = 3000;

/// Shared handle to the exam page, provided to its dialogs
#[derive(Clone, Copy)]
pub struct ExamPageContext {
    pub state: RwSignal<ExamPageState>,
    /// Last success notice, cleared after a few seconds
    pub notice: RwSignal<Option<String>>,
    session: SessionContext,
}

impl ExamPageContext {
    pub fn open(&self, dialog: Dialog) {
        self.state.update(|s| s.open(dialog));
    }

    pub fn close(&self) {
        self.state.update(ExamPageState::close);
    }

    pub fn refresh(&self) {
        self.state.update(ExamPageState::refresh);
    }

    /// The dialog currently open
    pub fn dialog(&self) -> Memo<Dialog> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.dialog.clone()))
    }

    pub fn snapshot(&self) -> Memo<ExamSnapshot> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.data.value().clone()))
    }

    pub fn client(&self) -> ApiClient<PlatformTransport> {
        self.session.client()
    }

    /// Show a success notice that disappears on its own
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        log!("{}", message);
        self.notice.set(Some(message.clone()));

        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;

            let notice = self.notice;
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_DISMISS_MS).await;
                // A newer notice keeps its own timer
                notice.update(|n| {
                    if n.as_deref() == Some(message.as_str()) {
                        *n = None;
                    }
                });
            });
        }
        #[cfg(feature = "ssr")]
        let _ = NOTICE_DISMISS_MS;
    }

    /// Turn a failed call into a displayable message.
    ///
    /// A rejected token ends the session, which sends the page to the login.
    pub fn report(&self, err: &ApiError) -> String {
        warn!("Backend call failed: {}", err);
        if err.is_unauthorized() {
            self.session.logout();
        }
        err.message()
    }

    /// Run one mutation for the open dialog.
    ///
    /// On success the data is marked stale, the dialog closes if it is still
    /// the one open and `done` is shown as a notice. On failure the dialog
    /// stays open and the message lands in `error`.
    pub fn mutate<F, Fut, R>(
        &self,
        pending: RwSignal<bool>,
        error: RwSignal<Option<String>>,
        done: &'static str,
        call: F,
    ) where
        F: FnOnce(ApiClient<PlatformTransport>) -> Fut + 'static,
        Fut: Future<Output = Result<R, ApiError>> + 'static,
        R: 'static,
    {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);

        let ctx = *self;
        let origin = self.state.with_untracked(|s| s.dialog.origin());
        let future = call(self.client());
        spawn_local(async move {
            let result = future.await;
            pending.set(false);
            let Some(settled) = ctx.state.try_update(|s| s.settle(origin, result)) else {
                return;
            };
            match settled {
                Ok(_) => ctx.notify(done),
                Err(err) => error.set(Some(ctx.report(&err))),
            }
        });
    }
}

/// Create the exam page context and start its load service
pub fn provide_exam_page() -> ExamPageContext {
    let ctx = ExamPageContext {
        state: RwSignal::new(ExamPageState::new()),
        notice: RwSignal::new(None),
        session: use_session(),
    };
    provide_context(ctx);
    spawn_load_service(ctx);
    ctx
}

pub fn use_exam_page() -> ExamPageContext {
    expect_context::<ExamPageContext>()
}

/// Fetch a new snapshot whenever the page data is marked stale.
///
/// Only the revision is tracked, so publishing a result does not retrigger.
fn spawn_load_service(ctx: ExamPageContext) {
    let state = ctx.state;
    let revision = Memo::new(move |_| state.with(|s| s.data.revision()));

    Effect::new(move |_| {
        let revision = revision.get();
        if !ctx.session.is_authenticated() {
            return;
        }

        let Some(generation) = state.try_update(ExamPageState::begin_load).flatten() else {
            return;
        };

        let client = ctx.client();
        spawn_local(async move {
            let result = fetch_snapshot(&client).await;
            if let Err(err) = &result {
                ctx.report(err);
            }

            let published = state
                .try_update(|s| s.finish_load(generation, result))
                .unwrap_or(false);
            if !published {
                log!("Dropped stale exam data for revision {}", revision);
            }
        });
    });
}
