use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use futoushiki_core::{num_to_x, Marker};

const RESPONSE_COLOR: &str = "#0000ff";
const ANSWER_COLOR: &str = "#ff0000";
// The canvas strip stays white in both themes, so the open-circle fill
// doubles as the background color.
const OPEN_FILL: &str = "#ffffff";

const RAY_WIDTH: f64 = 10.0;
const CIRCLE_RADIUS: f64 = 10.0;
const RESPONSE_Y: f64 = 55.0;
const ANSWER_Y: f64 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MarkerStyle {
    Response,
    Answer,
}

impl MarkerStyle {
    fn color(self) -> &'static str {
        match self {
            MarkerStyle::Response => RESPONSE_COLOR,
            MarkerStyle::Answer => ANSWER_COLOR,
        }
    }

    fn baseline(self) -> f64 {
        match self {
            MarkerStyle::Response => RESPONSE_Y,
            MarkerStyle::Answer => ANSWER_Y,
        }
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok(ctx)
}

/// Draws one marker: the solution ray out to the surface edge plus the
/// open/closed boundary circle. Response draws clear the surface first;
/// answer draws are additive so the reveal shows both markers.
pub(crate) fn draw_marker(
    canvas: &HtmlCanvasElement,
    marker: Marker,
    style: MarkerStyle,
) -> Result<(), JsValue> {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let ctx = context_2d(canvas)?;
    if style == MarkerStyle::Response {
        ctx.clear_rect(0.0, 0.0, width, height);
    }

    let x = num_to_x(width, marker.num);
    let y = style.baseline();
    let color = style.color();

    ctx.set_line_width(RAY_WIDTH);
    ctx.set_stroke_style_str(color);

    ctx.begin_path();
    ctx.move_to(x, y);
    ctx.line_to(if marker.right_direction { width } else { 0.0 }, y);
    ctx.stroke();

    ctx.begin_path();
    ctx.arc(x, y, CIRCLE_RADIUS, 0.0, std::f64::consts::TAU)?;
    ctx.stroke();
    ctx.set_fill_style_str(if marker.open { OPEN_FILL } else { color });
    ctx.fill();
    Ok(())
}
