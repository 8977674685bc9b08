use std::rc::Rc;

use js_sys::Date;
use web_sys::{HtmlCanvasElement, MouseEvent, UrlSearchParams};
use yew::prelude::*;

use futoushiki_core::{
    apply_action, splitmix32, SessionAction, SessionEffect, SessionState, NUM_MAX, NUM_MIN,
};

use crate::renderer::MarkerStyle;

mod renderer;
mod theme;

const SEED_PARAM: &str = "seed";
const NONCE_STEP: u32 = 0x9E37_79B9;

fn time_nonce(previous: u32) -> u32 {
    let now = Date::now() as u32;
    splitmix32(now ^ previous.wrapping_add(NONCE_STEP))
}

fn parse_optional_seed(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (value, radix) = if let Some(rest) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        (rest, 16)
    } else {
        (trimmed, 10)
    };
    u32::from_str_radix(value, radix).ok()
}

fn seed_from_url() -> Option<u32> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(&search);
    let params = UrlSearchParams::new_with_str(query).ok()?;
    parse_optional_seed(&params.get(SEED_PARAM)?)
}

/// Source of the per-problem seed. Normally each problem draws a fresh
/// time-mixed nonce; a `?seed=` URL parameter pins the whole sequence for
/// reproducible sessions.
struct ProblemSeeder {
    nonce: u32,
    pinned: bool,
}

impl ProblemSeeder {
    fn from_url() -> Self {
        if let Some(seed) = seed_from_url() {
            gloo::console::log!("problem seed pinned", seed);
            Self {
                nonce: seed,
                pinned: true,
            }
        } else {
            Self {
                nonce: time_nonce(0),
                pinned: false,
            }
        }
    }

    fn current(&self) -> u32 {
        self.nonce
    }

    fn advance(&mut self) -> u32 {
        self.nonce = if self.pinned {
            splitmix32(self.nonce ^ NONCE_STEP)
        } else {
            time_nonce(self.nonce)
        };
        self.nonce
    }
}

#[function_component(App)]
fn app() -> Html {
    let seeder = use_mut_ref(ProblemSeeder::from_url);
    let session = {
        let seeder = seeder.clone();
        use_mut_ref(move || SessionState::new(seeder.borrow().current()))
    };
    let canvas_ref = use_node_ref();
    let question = use_state_eq(|| session.borrow().question.clone());
    let score = use_state_eq(|| session.borrow().score);
    let problem_ended = use_state_eq(|| false);

    let dispatch = {
        let session = session.clone();
        let canvas_ref = canvas_ref.clone();
        let question = question.clone();
        let score = score.clone();
        let problem_ended = problem_ended.clone();
        Rc::new(move |action: SessionAction| {
            let effect = apply_action(&mut session.borrow_mut(), action);
            if effect == SessionEffect::None {
                return;
            }
            let state = session.borrow();
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let drawn = match effect {
                    SessionEffect::RevealAnswer => {
                        renderer::draw_marker(&canvas, state.answer, MarkerStyle::Answer)
                    }
                    _ => renderer::draw_marker(&canvas, state.response, MarkerStyle::Response),
                };
                if let Err(err) = drawn {
                    gloo::console::error!("marker draw failed", err);
                }
            }
            question.set(state.question.clone());
            score.set(state.score);
            problem_ended.set(state.problem_ended);
        })
    };

    let on_mouse_move = {
        let dispatch = dispatch.clone();
        let canvas_ref = canvas_ref.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            dispatch(SessionAction::PointerMoved {
                x: event.offset_x() as f64,
                surface_width: canvas.width() as f64,
            });
        })
    };
    let on_mouse_down = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch(SessionAction::PointerPressed))
    };
    let on_mouse_up = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch(SessionAction::PointerReleased))
    };
    let on_mouse_out = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch(SessionAction::PointerLeft))
    };
    let on_switch_direction = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch(SessionAction::DirectionToggled))
    };
    let on_change_circle = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch(SessionAction::CircleToggled))
    };
    let on_check = {
        let dispatch = dispatch.clone();
        let seeder = seeder.clone();
        Callback::from(move |_: MouseEvent| {
            let nonce = seeder.borrow_mut().advance();
            dispatch(SessionAction::CheckPressed { nonce });
        })
    };

    {
        let canvas_ref = canvas_ref.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            theme::apply_color_scheme();
            let scheme_listener = theme::watch_color_scheme();
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let state = session.borrow();
                if let Err(err) =
                    renderer::draw_marker(&canvas, state.response, MarkerStyle::Response)
                {
                    gloo::console::error!("initial draw failed", err);
                }
            }
            move || drop(scheme_listener)
        });
    }

    let problem_ended_value = *problem_ended;
    html! {
        <main class="app">
            <section class="question">
                <p class="prompt">{ "Show the solutions of the inequality on the number line." }</p>
                <p class="inequality">{ (*question).clone() }</p>
            </section>
            <div class="board">
                <canvas
                    ref={canvas_ref}
                    width="600"
                    height="75"
                    class="number-line"
                    onmousemove={on_mouse_move}
                    onmousedown={on_mouse_down}
                    onmouseup={on_mouse_up}
                    onmouseout={on_mouse_out}
                />
                <div class="tick-row">
                    { for (NUM_MIN..=NUM_MAX).map(|num| html! { <span class="tick">{ num }</span> }) }
                </div>
            </div>
            <div class="controls">
                <button disabled={problem_ended_value} onclick={on_switch_direction}>
                    { "Switch direction" }
                </button>
                <button disabled={problem_ended_value} onclick={on_change_circle}>
                    { "Open / closed circle" }
                </button>
                <button class="check" onclick={on_check}>{ "Check" }</button>
            </div>
            <p class="score">{ "Score: " }<span class="num">{ *score }</span></p>
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_hex_seeds() {
        assert_eq!(parse_optional_seed("42"), Some(42));
        assert_eq!(parse_optional_seed(" 42 "), Some(42));
        assert_eq!(parse_optional_seed("0x2A"), Some(42));
        assert_eq!(parse_optional_seed("0X2a"), Some(42));
    }

    #[test]
    fn rejects_malformed_seeds() {
        assert_eq!(parse_optional_seed(""), None);
        assert_eq!(parse_optional_seed("   "), None);
        assert_eq!(parse_optional_seed("-1"), None);
        assert_eq!(parse_optional_seed("0xzz"), None);
        assert_eq!(parse_optional_seed("four"), None);
    }

    #[test]
    fn pinned_seeder_replays_the_same_sequence() {
        let mut first = ProblemSeeder {
            nonce: 77,
            pinned: true,
        };
        let mut second = ProblemSeeder {
            nonce: 77,
            pinned: true,
        };
        for _ in 0..8 {
            assert_eq!(first.advance(), second.advance());
        }
    }
}
