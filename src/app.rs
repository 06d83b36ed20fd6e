use std::rc::Rc;
use std::str::FromStr;

use strum::IntoEnumIterator;

use leptos::*;

use crate::{
    application::DashboardController,
    config::DashboardConfig,
    domain::{
        chart::{point_radius, polyline_points},
        logging::LogComponent,
        rates::{BreakdownMode, RateDay},
        state::SessionState,
    },
    format_utils::{cache_badge, format_pct, format_rate, or_placeholder},
    infrastructure::{GlooTransport, SystemClock},
};

type BrowserDashboard = DashboardController<GlooTransport, SystemClock>;
type Session = StoredValue<Rc<BrowserDashboard>>;

/// Read the session and subscribe the calling view to its changes
fn read<R>(dashboard: Session, changed: Trigger, f: impl FnOnce(&SessionState) -> R) -> R {
    changed.track();
    dashboard.with_value(|d| d.with_state(f))
}

/// 🦀 FX dashboard root
#[component]
pub fn App() -> impl IntoView {
    let controller = Rc::new(DashboardController::new(
        DashboardConfig::default(),
        GlooTransport::new(),
        SystemClock,
    ));

    // 🌉 every session transition re-renders the views that read it
    let changed = create_trigger();
    controller.subscribe(move |event| {
        crate::log_trace!(LogComponent::Presentation("App"), "{:?}", event);
        changed.notify();
    });

    let dashboard = store_value(controller.clone());
    spawn_local(async move { controller.mount().await });

    view! {
        <style>
            {r#"
            .page { font-family: -apple-system, BlinkMacSystemFont, sans-serif; max-width: 960px; margin: 0 auto; padding: 24px; }
            .hero { display: flex; justify-content: space-between; gap: 24px; margin-bottom: 24px; }
            .meta { display: flex; gap: 12px; }
            .badge { display: flex; flex-direction: column; padding: 10px 14px; border-radius: 10px; background: #1e3c72; color: white; }
            .badge-light { background: #eef2f8; color: #1e3c72; }
            .badge-row { display: flex; align-items: center; gap: 6px; }
            .card { background: white; border-radius: 15px; padding: 20px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08); }
            .form { display: flex; gap: 12px; align-items: end; flex-wrap: wrap; }
            .error { color: #c0392b; }
            .totals { display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px; margin: 16px 0; }
            .chart-block { position: relative; }
            .chart { width: 100%; height: auto; }
            .chart polyline { fill: none; stroke: #2a5298; stroke-width: 2; }
            .dot { fill: #2a5298; }
            .dot.active { fill: #f39c12; }
            .chart-overlay { position: absolute; left: 0; right: 0; height: 220px; pointer-events: none; }
            .chart-hit { position: absolute; width: 16px; height: 100%; transform: translateX(-50%); background: transparent; border: none; pointer-events: auto; }
            .chart-tooltip { position: absolute; transform: translate(-50%, -100%); background: rgba(0, 0, 0, 0.85); color: white; padding: 6px 10px; border-radius: 6px; }
            .table-row { display: grid; grid-template-columns: repeat(3, 1fr); padding: 4px 0; }
            .table-row.active { background: #fff4e0; }
            .table-head { font-weight: 700; }
            .pagination { display: flex; gap: 12px; align-items: center; justify-content: center; }
            "#}
        </style>
        <div class="page">
            <Header dashboard=dashboard changed=changed />
            <section class="card">
                <QueryForm dashboard=dashboard changed=changed />
                {move || read(dashboard, changed, |s| s.error.clone())
                    .map(|message| view! { <p class="error">{message}</p> })}
                <TotalsPanel dashboard=dashboard changed=changed />
                <Show when=move || read(dashboard, changed, SessionState::chart_visible)>
                    <ChartBlock dashboard=dashboard changed=changed />
                </Show>
            </section>
        </div>
    }
}

/// 📊 Title, source/cache badges and the live rate
#[component]
fn Header(dashboard: Session, changed: Trigger) -> impl IntoView {
    let refresh = move |_: ev::MouseEvent| {
        let controller = dashboard.get_value();
        spawn_local(async move { controller.refresh_live_rate().await });
    };

    view! {
        <header class="hero">
            <div>
                <p class="eyebrow">"FX Dashboard"</p>
                <h1>"EUR → USD Snapshot"</h1>
                <p class="subhead">"Day-by-day rates with provider-side caching and fallback."</p>
            </div>
            <div class="meta">
                <div class="badge">
                    <span class="label">"Source"</span>
                    <span class="value">
                        {move || read(dashboard, changed, |s| or_placeholder(s.result().map(|r| r.source.as_str())))}
                    </span>
                </div>
                <div class="badge badge-light">
                    <span class="label">"Cache"</span>
                    <span class="value">{move || read(dashboard, changed, |s| cache_badge(s.result()))}</span>
                </div>
                <div class="badge badge-light">
                    <div class="badge-row">
                        <span class="label">"Live rate"</span>
                        <button
                            type="button"
                            class="icon-button"
                            aria-label="Refresh live rate"
                            on:click=refresh
                        >
                            "↻"
                        </button>
                    </div>
                    <span class="value">{move || read(dashboard, changed, |s| s.live().value_label())}</span>
                    <span class="timestamp">{move || read(dashboard, changed, |s| s.live().updated_label())}</span>
                </div>
            </div>
        </header>
    }
}

#[component]
fn QueryForm(dashboard: Session, changed: Trigger) -> impl IntoView {
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let controller = dashboard.get_value();
        spawn_local(async move {
            // failures are already in the session's error slot
            let _ = controller.submit().await;
        });
    };
    let loading = move || read(dashboard, changed, |s| s.loading);

    view! {
        <form class="form" on:submit=on_submit>
            <label>
                "Start date"
                <input
                    type="date"
                    required=true
                    prop:value=move || read(dashboard, changed, |s| s.draft.start_date.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        dashboard.with_value(|d| d.update_draft(|draft| draft.start_date = value));
                    }
                />
            </label>
            <label>
                "End date"
                <input
                    type="date"
                    required=true
                    prop:value=move || read(dashboard, changed, |s| s.draft.end_date.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        dashboard.with_value(|d| d.update_draft(|draft| draft.end_date = value));
                    }
                />
            </label>
            <label>
                "Breakdown"
                <select
                    prop:value=move || read(dashboard, changed, |s| s.draft.breakdown.to_string())
                    on:change=move |ev| {
                        if let Ok(mode) = BreakdownMode::from_str(&event_target_value(&ev)) {
                            dashboard.with_value(|d| d.update_draft(|draft| draft.breakdown = mode));
                        }
                    }
                >
                    {BreakdownMode::iter()
                        .map(|mode| view! { <option value={mode.to_string()}>{mode.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <button type="submit" disabled=loading>
                {move || if loading() { "Loading…" } else { "Run summary" }}
            </button>
        </form>
    }
}

#[component]
fn TotalsPanel(dashboard: Session, changed: Trigger) -> impl IntoView {
    move || {
        read(dashboard, changed, |s| s.result().and_then(|r| r.totals)).map(|totals| {
            view! {
                <div class="totals">
                    <div>
                        <span>"Start rate"</span>
                        <strong>{format_rate(totals.start_rate)}</strong>
                    </div>
                    <div>
                        <span>"End rate"</span>
                        <strong>{format_rate(totals.end_rate)}</strong>
                    </div>
                    <div>
                        <span>"Total % change"</span>
                        <strong>{format_pct(totals.total_pct_change)}</strong>
                    </div>
                    <div>
                        <span>"Mean rate"</span>
                        <strong>{format_rate(totals.mean_rate)}</strong>
                    </div>
                </div>
            }
        })
    }
}

/// 🎨 Line plot, hit targets, tooltip, paged table
#[component]
fn ChartBlock(dashboard: Session, changed: Trigger) -> impl IntoView {
    let frame = dashboard.with_value(|d| d.config().frame);

    // memos keep hover-only changes from rebuilding the point lists
    let points = create_memo(move |_| read(dashboard, changed, |s| s.plot_points().to_vec()));
    let highlighted = create_memo(move |_| read(dashboard, changed, |s| s.hover().index()));
    let bounds = create_memo(move |_| read(dashboard, changed, |s| s.result().and_then(|r| r.rate_bounds())));
    let rows = create_memo(move |_| {
        read(dashboard, changed, |s| {
            let offset = (s.page().page_index() - 1) * s.page().page_size();
            s.paged_days().iter().copied().enumerate().map(|(i, day)| (offset + i, day)).collect::<Vec<(usize, RateDay)>>()
        })
    });

    let hover = move |index: Option<usize>| {
        dashboard.with_value(|d| {
            d.set_hover(index);
        });
    };

    view! {
        <div class="chart-block">
            <div class="chart-header">
                <div>
                    <h2>"Change over time"</h2>
                    <p>"Rates mapped across the selected date range."</p>
                </div>
                <div class="chart-stats">
                    <span>{move || format!("Min: {}", format_rate(bounds.get().map(|(min, _)| min)))}</span>
                    <span>{move || format!("Max: {}", format_rate(bounds.get().map(|(_, max)| max)))}</span>
                </div>
            </div>
            <svg class="chart" viewBox={frame.view_box()} aria-hidden="true">
                <polyline points=move || points.with(|p| polyline_points(p)) />
                {move || {
                    points
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, point)| {
                            view! {
                                <circle
                                    cx={point.x.to_string()}
                                    cy={point.y.to_string()}
                                    r=move || point_radius(i, highlighted.get()).to_string()
                                    class=move || if highlighted.get() == Some(i) { "dot active" } else { "dot" }
                                />
                            }
                        })
                        .collect_view()
                }}
            </svg>
            <div class="chart-overlay">
                {move || {
                    points
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, point)| {
                            view! {
                                <button
                                    type="button"
                                    class="chart-hit"
                                    style:left={format!("{}%", frame.x_percent(point.x))}
                                    aria-label={format!("Rate on {}", point.day.date)}
                                    on:mouseenter=move |_| hover(Some(i))
                                    on:mouseleave=move |_| hover(None)
                                    on:focus=move |_| hover(Some(i))
                                    on:blur=move |_| hover(None)
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
            {move || {
                read(dashboard, changed, SessionState::tooltip).map(|tip| {
                    view! {
                        <div class="chart-tooltip" style:left={format!("{}%", tip.left_percent)}>
                            <span>{tip.date}</span>
                            <strong>{tip.rate}</strong>
                        </div>
                    }
                })
            }}
            <div class="table">
                <div class="table-row table-head">
                    <span>"Date"</span>
                    <span>"Rate"</span>
                    <span>"% Change"</span>
                </div>
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|(index, day)| {
                            view! {
                                <div class="table-row" class:active=move || highlighted.get() == Some(index)>
                                    <span>{day.date.to_string()}</span>
                                    <span>{format_rate(Some(day.rate))}</span>
                                    <span>{format_pct(day.pct_change)}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="pagination">
                <button
                    type="button"
                    class="pager"
                    on:click=move |_| dashboard.with_value(|d| {
                        d.prev_page();
                    })
                    disabled=move || read(dashboard, changed, |s| !s.page().has_prev())
                >
                    "Prev"
                </button>
                <span>{move || read(dashboard, changed, |s| s.page().label(s.days().len()))}</span>
                <button
                    type="button"
                    class="pager"
                    on:click=move |_| dashboard.with_value(|d| {
                        d.next_page();
                    })
                    disabled=move || read(dashboard, changed, |s| !s.page().has_next(s.days().len()))
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
