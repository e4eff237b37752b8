use chrono::Utc;
use gloo::console;
use gloo::timers::callback::Interval;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew::TargetCast;

use matchpool::admin::{describe, save_to_cache};
use matchpool::browser;
use matchpool::cache::BrowserStorage;
use matchpool::config::{COUNTDOWN_TICK_MS, EXPORT_FILE_NAME, HOUSE_RATE};
use matchpool::countdown::Countdown;
use matchpool::format::{format_amount, format_payout};
use matchpool::history::placeholder_history;
use matchpool::pool::{parse_amount, sample_payout};
use matchpool::sources::{self, DataSource};
use matchpool::{AdminField, AdminForm, MatchData, Outcome};

#[derive(Clone, Copy, PartialEq)]
enum View { Board, Admin }

#[function_component(App)]
fn app() -> Html {
    let data = use_state(|| MatchData::defaults_at(Utc::now()));
    let source = use_state(|| None::<DataSource>);
    let warnings = use_state(Vec::<String>::new);
    let view = use_state(|| View::Board);
    let dark = use_state(|| true);

    // Walk the data sources once on mount
    {
        let data = data.clone();
        let source = source.clone();
        let warnings = warnings.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let defaults = MatchData::defaults_at(Utc::now());
                let embedded = browser::embedded_document();
                let res = sources::load(
                    defaults,
                    embedded.as_deref(),
                    browser::fetch_remote_document,
                    &BrowserStorage,
                )
                .await;
                let notes = res.warnings();
                for note in &notes {
                    console::warn!(note.clone());
                }
                console::log!(format!("match data loaded from {}", res.source));
                warnings.set(notes);
                source.set(Some(res.source));
                data.set(res.data);
            });
            || ()
        });
    }

    let on_board = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Board))
    };
    let on_admin = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Admin))
    };
    let on_theme = {
        let dark = dark.clone();
        Callback::from(move |_| dark.set(browser::toggle_theme()))
    };
    let on_saved = {
        let data = data.clone();
        Callback::from(move |updated: MatchData| data.set(updated))
    };

    let source_label = match *source {
        Some(s) => format!("Data: {}", s),
        None => "Loading…".to_string(),
    };

    html! {
        <div class="container">
            <header>
                <h1>{"Match Pool"}</h1>
                <div class="row">
                    <button class={if *view == View::Board { "pill active" } else { "pill" }} onclick={on_board}>{"Board"}</button>
                    <button class={if *view == View::Admin { "pill active" } else { "pill" }} onclick={on_admin}>{"Admin"}</button>
                    <button class="pill" onclick={on_theme} aria-label="Toggle theme">
                        { if *dark { "Light theme" } else { "Dark theme" } }
                    </button>
                </div>
            </header>

            { match *view {
                View::Board => html!{ <Board data={(*data).clone()} /> },
                View::Admin => html!{ <Admin data={(*data).clone()} on_saved={on_saved} /> },
            }}

            <footer>
                { for warnings.iter().map(|w| html!{
                    <div class="status-indicator warning">{w.clone()}</div>
                })}
                <span class="muted">{source_label}</span>
            </footer>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BoardProps {
    data: MatchData,
}

#[function_component(Board)]
fn board(props: &BoardProps) -> Html {
    let data = &props.data;
    let summary = data.summary();

    let now = use_state(Utc::now);
    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(COUNTDOWN_TICK_MS, move || now.set(Utc::now()));
            move || drop(interval)
        });
    }
    let countdown = Countdown::until(data.match_time, *now);

    // Sample payout calculator
    let stake = use_state(|| String::from("100"));
    let outcome = use_state(|| Outcome::A);
    let stake_val = parse_amount(&stake).unwrap_or(0.0);
    let payout = sample_payout(&data.bets, stake_val, *outcome);

    let on_stake_input = {
        let stake = stake.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            stake.set(target.value());
        })
    };
    let on_outcome_change = {
        let outcome = outcome.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let idx = target.selected_index();
            let picked = match idx { 0 => Outcome::A, 1 => Outcome::B, _ => Outcome::Draw };
            outcome.set(picked);
        })
    };

    let side = |o: Outcome, logo: &str, alt: String| html! {
        <div class="card side">
            <img src={logo.to_string()} alt={alt} />
            <h2>{data.label(o).to_string()}</h2>
            <div class="metric-value">{format_amount(data.total_on(o))}</div>
            <div class="metric-label">{"points staked"}</div>
        </div>
    };

    html! {
        <>
            <div class="grid three">
                { side(Outcome::A, &data.logo_a, format!("{} logo", data.team_a)) }
                { side(Outcome::Draw, &data.logo_draw, "Draw (Balance) logo".to_string()) }
                { side(Outcome::B, &data.logo_b, format!("{} logo", data.team_b)) }
            </div>

            <div class="card">
                <h2>
                    <span>{"Kickoff"}</span>
                    <span class={format!("status-indicator {}", if countdown.is_started() { "warning" } else { "success" })}>
                        { if countdown.is_started() { "Live" } else { "Upcoming" } }
                    </span>
                </h2>
                <div class="result large">{countdown.to_string()}</div>
                <div class="hint">{format!("{} vs {}", data.team_a, data.team_b)}</div>
            </div>

            <div class="grid">
                <div class="card">
                    <h2><span>{"Prize Pool"}</span></h2>
                    <div class="metric-grid">
                        <div class="metric-item">
                            <div class="metric-value">{format_amount(summary.total_pool)}</div>
                            <div class="metric-label">{"Total Pool"}</div>
                        </div>
                        <div class="metric-item">
                            <div class="metric-value">{format_amount(summary.house_cut)}</div>
                            <div class="metric-label">{format!("House Cut ({:.0}%)", HOUSE_RATE * 100.0)}</div>
                        </div>
                        <div class="metric-item">
                            <div class="metric-value success">{format_amount(summary.prize_pool)}</div>
                            <div class="metric-label">{"Prize Pool"}</div>
                        </div>
                    </div>
                </div>

                <div class="card">
                    <h2><span>{"Payout Estimate"}</span></h2>
                    <div class="row" style="align-items:end;">
                        <div class="input-group">
                            <label>{"Stake"}</label>
                            <input
                                type="text"
                                value={(*stake).clone()}
                                oninput={on_stake_input}
                                class={if stake_val > 0.0 { "" } else { "error" }}
                                aria-label="Stake amount" />
                        </div>
                        <div class="input-group">
                            <label>{"If this wins"}</label>
                            <select onchange={on_outcome_change} aria-label="Winning outcome">
                                { for Outcome::all().iter().map(|o| {
                                    html!{ <option selected={*o == *outcome}>{ data.label(*o).to_string() }</option> }
                                })}
                            </select>
                        </div>
                    </div>
                    <div class={format!("result large {}", if payout > 0.0 { "success" } else { "muted" })}>
                        {format_payout(payout)}
                    </div>
                    <div class="hint">
                        { if data.total_on(*outcome) > 0.0 {
                            "Your share of the prize pool, in proportion to all stakes on that outcome"
                        } else {
                            "Nobody has backed this outcome yet"
                        }}
                    </div>
                </div>
            </div>

            <div class="card">
                <h2><span>{"History"}</span></h2>
                <table>
                    <tr><th>{"Match"}</th><th>{"Winner"}</th><th>{"Prize"}</th></tr>
                    { for placeholder_history().iter().map(|r| html!{
                        <tr>
                            <td>{r.title.clone()}</td>
                            <td>{r.winner_cell()}</td>
                            <td>{r.prize_cell()}</td>
                        </tr>
                    })}
                </table>
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct AdminProps {
    data: MatchData,
    on_saved: Callback<MatchData>,
}

#[function_component(Admin)]
fn admin(props: &AdminProps) -> Html {
    let form = {
        let data = props.data.clone();
        use_state(move || AdminForm::from_data(&data))
    };
    // Reload the form whenever the record changes underneath it
    {
        let form = form.clone();
        use_effect_with(props.data.clone(), move |data| {
            form.set(AdminForm::from_data(data));
            || ()
        });
    }
    let status = use_state(|| None::<(bool, String)>);

    let on_save = {
        let form = form.clone();
        let status = status.clone();
        let data = props.data.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |_| match form.apply(data.clone()) {
            Ok(updated) => {
                let msg = match save_to_cache(&BrowserStorage, &updated) {
                    Ok(()) => format!("Saved to this browser. {}", describe(&updated)),
                    Err(e) => {
                        console::warn!(format!("save failed: {}", e));
                        format!("Applied for this session only ({}).", e)
                    }
                };
                status.set(Some((true, msg)));
                on_saved.emit(updated);
            }
            Err(e) => status.set(Some((false, e.to_string()))),
        })
    };

    let on_export = {
        let form = form.clone();
        let status = status.clone();
        let data = props.data.clone();
        Callback::from(move |_| {
            let exported = form
                .apply(data.clone())
                .map_err(|e| e.to_string())
                .and_then(|updated| updated.export_document().map_err(|e| e.to_string()))
                .and_then(|doc| {
                    browser::download_document(EXPORT_FILE_NAME, &doc).map_err(|e| e.to_string())
                });
            match exported {
                Ok(()) => status.set(Some((true, format!("Downloaded {}. Commit it next to the page to publish.", EXPORT_FILE_NAME)))),
                Err(e) => status.set(Some((false, e))),
            }
        })
    };

    let on_reset = {
        let form = form.clone();
        let status = status.clone();
        let data = props.data.clone();
        Callback::from(move |_| {
            form.set(AdminForm::from_data(&data));
            status.set(None);
        })
    };

    html! {
        <div class="card">
            <h2>
                <span>{"Match Admin"}</span>
                { match &*status {
                    Some((true, _)) => html!{ <span class="status-indicator success">{"Saved"}</span> },
                    Some((false, _)) => html!{ <span class="status-indicator warning">{"Check inputs"}</span> },
                    None => html!{},
                }}
            </h2>

            { for AdminField::all().iter().map(|(field, label)| {
                let field = *field;
                let form_set = form.clone();
                let on_input = Callback::from(move |e: InputEvent| {
                    let t: HtmlInputElement = e.target_unchecked_into();
                    let mut f = (*form_set).clone();
                    f.set(field, t.value());
                    form_set.set(f);
                });
                let (kind, step) = if field == AdminField::MatchTime { ("datetime-local", Some("1")) } else { ("text", None) };
                html!{
                    <div class="input-group">
                        <label>{*label}</label>
                        <input type={kind} step={step} value={form.get(field).to_string()} oninput={on_input} aria-label={*label} />
                    </div>
                }
            })}

            <div class="section-divider"></div>

            <div class="row">
                <button onclick={on_save}>{"Save to Browser"}</button>
                <button onclick={on_export}>{format!("Download {}", EXPORT_FILE_NAME)}</button>
                <button onclick={on_reset} class="danger">{"Reset"}</button>
            </div>

            { if let Some((ok, msg)) = &*status {
                html!{ <div class={if *ok { "hint success" } else { "hint danger" }}>{msg.clone()}</div> }
            } else { html!{} }}
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
