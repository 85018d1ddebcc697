//! Node pools panel: view/edit toggle, live monthly estimate, save and clear.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel owns the whole edit workflow in one `RwSignal<NodePoolsState>`.
//! Row rendering belongs to an injected table; it reads [`PoolTableProps`]
//! through [`use_pool_table`] and reports edits back through the two
//! callbacks, which only exist while rows are editable.

use std::rc::Rc;

use leptos::prelude::*;

use crate::net::api::PoolUpdateApi;
use crate::state::node_pools::{NODES_COMMAND, NodePoolsState, Notice, ZeroCountPolicy};
use crate::state::pools::{Pool, PoolId, TypeCatalog};

/// Everything the table collaborator renders from.
#[derive(Clone)]
pub struct PoolTableProps {
    pub pools: Vec<Pool>,
    pub types: TypeCatalog,
    pub loading: bool,
    pub editable: bool,
    pub handle_delete: Option<Callback<PoolId>>,
    pub update_pool: Option<Callback<(usize, Pool)>>,
}

/// Table props provided by the enclosing [`NodePoolsPanel`].
pub fn use_pool_table() -> Signal<PoolTableProps> {
    expect_context::<Signal<PoolTableProps>>()
}

/// Node pools card for a cluster detail page.
///
/// `children` renders the pool table and should call [`use_pool_table`].
#[component]
pub fn NodePoolsPanel(
    #[prop(into)] pools: Signal<Vec<Pool>>,
    #[prop(into)] types: Signal<TypeCatalog>,
    #[prop(into, default = false.into())] loading: Signal<bool>,
    api: Rc<dyn PoolUpdateApi>,
    #[prop(optional)] zero_count_policy: ZeroCountPolicy,
    children: ChildrenFn,
) -> impl IntoView {
    let state = RwSignal::new(NodePoolsState::new(pools.get_untracked(), zero_count_policy));
    let api = StoredValue::new_local(api);

    // Keep the committed list in step with the host's pools resource.
    Effect::new(move || {
        let latest = pools.get();
        state.update(|s| s.replace_committed(latest));
    });

    let update_pool = Callback::new(move |(index, pool): (usize, Pool)| {
        state.update(|s| {
            if let Err(e) = s.update_pool(index, pool) {
                leptos::logging::warn!("pool update ignored: {e}");
            }
        });
    });

    let delete_pool = Callback::new(move |id: PoolId| {
        state.update(|s| {
            if let Err(e) = s.delete_pool(id) {
                leptos::logging::warn!("pool delete ignored: {e}");
            }
        });
    });

    let table = Signal::derive(move || {
        let types = types.get();
        let loading = loading.get();
        state.with(|s| {
            let rows_editable = s.rows_editable();
            PoolTableProps {
                pools: s.visible_pools().to_vec(),
                types,
                loading,
                editable: s.is_editing(),
                handle_delete: rows_editable.then_some(delete_pool),
                update_pool: rows_editable.then_some(update_pool),
            }
        })
    });
    provide_context(table);

    let on_toggle = move |_: leptos::ev::MouseEvent| {
        state.update(|s| {
            if let Err(e) = s.toggle_editing() {
                leptos::logging::warn!("edit toggle ignored: {e}");
            }
        });
    };

    let on_reset = move |_: leptos::ev::MouseEvent| {
        state.update(|s| {
            if let Err(e) = s.reset_form() {
                leptos::logging::warn!("reset ignored: {e}");
            }
        });
    };

    let on_save = move |_: leptos::ev::MouseEvent| {
        let payload = match state.try_update(NodePoolsState::begin_commit) {
            Some(Ok(payload)) => payload,
            Some(Err(e)) => {
                leptos::logging::warn!("save refused: {e}");
                return;
            }
            None => return,
        };
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let outcome = api.update_pools(&payload).await;
            state.update(|s| {
                if let Err(e) = s.finish_commit(outcome) {
                    leptos::logging::warn!("submission result dropped: {e}");
                }
            });
        });
    };

    let on_dismiss = move |_: leptos::ev::MouseEvent| state.update(NodePoolsState::dismiss_notice);

    let notice = move || {
        state.with(NodePoolsState::notice).map(|notice| match notice {
            Notice::Success(text) => view! {
                <div class="notice notice--success">
                    <span>{text}</span>
                    <button class="notice__dismiss" on:click=on_dismiss>"Dismiss"</button>
                </div>
            }
            .into_any(),
            Notice::Error(text) => view! {
                <div class="notice notice--error">
                    <span>{text}</span>
                    <button class="notice__dismiss" on:click=on_dismiss>"Dismiss"</button>
                </div>
            }
            .into_any(),
        })
    };

    view! {
        <section class="node-pools">
            <header class="node-pools__header">
                <h2 class="node-pools__title">"Node Pools"</h2>
                <button
                    class="btn btn--secondary"
                    disabled=move || state.with(NodePoolsState::is_submitting)
                    on:click=on_toggle
                >
                    {move || if state.with(NodePoolsState::is_editing) { "Cancel" } else { "Edit" }}
                </button>
            </header>

            {notice}

            <div class="node-pools__table">{children()}</div>

            <Show when=move || state.with(NodePoolsState::is_editing)>
                <p class="node-pools__pricing">{move || state.with(NodePoolsState::estimate_label)}</p>
            </Show>

            <div class="node-pools__actions">
                <button
                    class="btn btn--primary"
                    disabled=move || !state.with(NodePoolsState::can_submit)
                    on:click=on_save
                >
                    {move || if state.with(NodePoolsState::is_submitting) { "Saving..." } else { "Save" }}
                </button>
                <button
                    class="btn btn--secondary"
                    disabled=move || !state.with(NodePoolsState::can_reset)
                    on:click=on_reset
                >
                    "Clear Changes"
                </button>
            </div>

            <footer class="node-pools__footer">
                "You can run "
                <code>{NODES_COMMAND}</code>
                " for more detailed information about the nodes in your cluster."
            </footer>
        </section>
    }
}
