use crate::config;
use crate::tracking::{
    normalize_query, LookupError, RequestState, TrackRequest, TrackingResult, TrackingView,
    FAILURE_HINT, FAILURE_MESSAGE, NO_STATUS_MESSAGE,
};
use futures::{pin_mut, select, FutureExt};
use gloo_console::{error, log};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

async fn fetch_status(query: String) -> Result<TrackingResult, LookupError> {
    let request = Request::post(&config::get_tracking_url())
        .json(&TrackRequest { tracking_id: query })
        .map_err(|e| LookupError::Malformed(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LookupError::Status(response.status()));
    }

    response
        .json::<TrackingResult>()
        .await
        .map_err(|e| LookupError::Malformed(e.to_string()))
}

async fn fetch_status_with_timeout(query: String) -> Result<TrackingResult, LookupError> {
    let fetch = fetch_status(query).fuse();
    let timeout = TimeoutFuture::new(config::TRACKING_TIMEOUT_MS).fuse();
    pin_mut!(fetch, timeout);
    select! {
        outcome = fetch => outcome,
        _ = timeout => Err(LookupError::TimedOut),
    }
}

#[function_component(TrackingWidget)]
pub fn tracking_widget() -> Html {
    let state = use_state(|| RequestState::Idle);
    let input_ref = use_node_ref();
    // Sequence number of the most recent lookup; responses from earlier
    // lookups are dropped so the result box never shows stale data.
    let generation = use_mut_ref(|| 0u64);

    let submit = {
        let state = state.clone();
        let input_ref = input_ref.clone();
        let generation = generation.clone();
        Callback::from(move |_: ()| {
            let input = match input_ref.cast::<HtmlInputElement>() {
                Some(input) => input,
                None => return,
            };
            let query = match normalize_query(&input.value()) {
                Some(query) => query,
                None => {
                    let _ = input.focus();
                    return;
                }
            };

            *generation.borrow_mut() += 1;
            let seq = *generation.borrow();
            state.set(RequestState::Loading);

            let state = state.clone();
            let generation = generation.clone();
            spawn_local(async move {
                let outcome = fetch_status_with_timeout(query).await;
                if let Err(err) = &outcome {
                    error!(format!("Tracking lookup failed: {}", err));
                }
                match RequestState::settle(*generation.borrow(), seq, outcome) {
                    Some(next) => state.set(next),
                    None => log!("Dropping settled response for a superseded lookup"),
                }
            });
        })
    };

    let on_click = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };
    let on_keypress = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit.emit(());
            }
        })
    };

    let is_loading = state.is_loading();
    let result_class = classes!(
        "tracking-result",
        (!matches!(*state, RequestState::Idle)).then_some("active")
    );

    html! {
        <div class="tracking-widget">
            <div class="tracking-input-row">
                <input
                    ref={input_ref}
                    class="tracking-input"
                    type="text"
                    placeholder="Enter your tracking ID"
                    onkeypress={on_keypress}
                />
                <button class="track-button" disabled={is_loading} onclick={on_click}>
                    { if is_loading { "Tracking…" } else { "Track" } }
                </button>
            </div>
            <div class={result_class}>
                { render_state(&state) }
            </div>
            <style>
                {r#"
                    .tracking-widget {
                        max-width: 560px;
                        margin: 0 auto;
                    }
                    .tracking-input-row {
                        display: flex;
                        gap: 0.75rem;
                        background: #fff;
                        padding: 0.5rem;
                        border-radius: 12px;
                        box-shadow: 0 8px 32px rgba(0, 58, 143, 0.10);
                    }
                    .tracking-input {
                        flex: 1;
                        border: none;
                        outline: none;
                        font-size: 1rem;
                        padding: 0.75rem 1rem;
                    }
                    .track-button {
                        background: #003a8f;
                        color: #fff;
                        border: none;
                        border-radius: 8px;
                        padding: 0.75rem 1.75rem;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .track-button:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                    .tracking-result {
                        display: none;
                        margin-top: 1rem;
                        background: #fff;
                        border-radius: 12px;
                        padding: 1.25rem;
                        text-align: left;
                        box-shadow: 0 8px 32px rgba(0, 58, 143, 0.08);
                    }
                    .tracking-result.active {
                        display: block;
                    }
                    .tracking-status-badge {
                        display: inline-block;
                        background: #e6f0ff;
                        color: #003a8f;
                        font-weight: 600;
                        border-radius: 999px;
                        padding: 0.25rem 0.9rem;
                        margin-bottom: 0.75rem;
                    }
                    .tracking-activity {
                        font-weight: 600;
                        color: #1e293b;
                        margin-bottom: 4px;
                    }
                    .tracking-location {
                        font-size: 0.95rem;
                        margin-bottom: 4px;
                        color: #475569;
                    }
                    .tracking-event-time {
                        font-size: 0.85rem;
                        color: #64748b;
                    }
                    .tracking-error {
                        color: #b91c1c;
                        font-weight: 600;
                    }
                    .tracking-error-hint {
                        font-size: 0.85rem;
                        font-weight: 400;
                    }
                    .loader {
                        width: 28px;
                        height: 28px;
                        margin: 0 auto;
                        border: 3px solid #e2e8f0;
                        border-top-color: #003a8f;
                        border-radius: 50%;
                        animation: spin 0.8s linear infinite;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                "#}
            </style>
        </div>
    }
}

fn render_state(state: &RequestState) -> Html {
    match state {
        RequestState::Idle => html! {},
        RequestState::Loading => html! { <div class="loader"></div> },
        RequestState::Succeeded(result) => match TrackingView::from_result(result.clone()) {
            Some(view) => html! {
                <div>
                    <span class="tracking-status-badge">{ &view.status }</span>
                    <div class="tracking-event">
                        <div class="tracking-activity">{ &view.activity }</div>
                        if let Some(location) = &view.location {
                            <div class="tracking-location">{ location }</div>
                        }
                        if let Some(timestamp) = &view.timestamp {
                            <div class="tracking-event-time">{ timestamp }</div>
                        }
                    </div>
                </div>
            },
            None => html! { <div class="tracking-error">{ NO_STATUS_MESSAGE }</div> },
        },
        RequestState::Failed(_) => html! {
            <div class="tracking-error">
                { FAILURE_MESSAGE }<br/>
                <span class="tracking-error-hint">{ FAILURE_HINT }</span>
            </div>
        },
    }
}
