#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionAction {
    PointerMoved { x: f64, surface_width: f64 },
    PointerPressed,
    PointerReleased,
    PointerLeft,
    DirectionToggled,
    CircleToggled,
    /// The check button. `nonce` seeds the next problem when one starts.
    CheckPressed { nonce: u32 },
}

/// What the caller must redraw after applying an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEffect {
    None,
    /// Clear the surface and redraw the response marker.
    RedrawResponse,
    /// Draw the answer marker on top of the current response, no clear.
    RevealAnswer,
    /// A new problem began: redraw the reset response, refresh the
    /// question and score sinks, re-enable the toggles.
    StartProblem,
}
