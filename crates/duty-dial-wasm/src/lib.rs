//! WASM bindings for duty-dial.
//!
//! Exposes angle mapping, commit resolution, and a stateful [`DialEditor`]
//! that hosts feed raw pointer events into. Configs and outcomes cross the
//! boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p duty-dial-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/duty-dial-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/duty_dial_wasm.wasm
//! ```

use duty_dial::{
    angle_to_hour, hour_to_angle, sweep_angle, CommitOutcome, DayPhase, DragSession, EditConfig,
    EditSession, Handles, PointerEvent, PointerPhase, TickCounter,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn parse_config(json: &str) -> Result<EditConfig, JsValue> {
    let config: EditConfig = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid config JSON: {}", e)))?;
    config.validate().map_err(js_error)?;
    Ok(config)
}

fn parse_phase(phase: &str) -> Result<PointerPhase, JsValue> {
    match phase {
        "down" => Ok(PointerPhase::Down),
        "move" => Ok(PointerPhase::Move),
        "up" => Ok(PointerPhase::Up),
        "cancel" => Ok(PointerPhase::Cancel),
        other => Err(JsValue::from_str(&format!(
            "Unknown pointer phase '{}'. Expected down, move, up or cancel",
            other
        ))),
    }
}

fn phase_name(phase: DayPhase) -> &'static str {
    match phase {
        DayPhase::Morning => "morning",
        DayPhase::Afternoon => "afternoon",
        DayPhase::Evening => "evening",
        DayPhase::Night => "night",
    }
}

// ---------------------------------------------------------------------------
// Stateless exports
// ---------------------------------------------------------------------------

/// Quantise a pointer angle (degrees, clockwise from 3 o'clock) to an hour in `1..=24`.
#[wasm_bindgen(js_name = "angleToHour")]
pub fn angle_to_hour_js(angle: f64) -> u8 {
    angle_to_hour(angle)
}

/// Angle in degrees at which `hour` is drawn.
#[wasm_bindgen(js_name = "hourToAngle")]
pub fn hour_to_angle_js(hour: u8) -> f64 {
    hour_to_angle(hour)
}

/// Resolve a commit of `start..end` against the config's limit and neighbours.
///
/// Returns the outcome as JSON: `{"status": "ready", "records": [...]}` or
/// `{"status": "pending", "merge_up", "merge_down", "absorbed", "description"}`.
#[wasm_bindgen(js_name = "resolveCommit")]
pub fn resolve_commit(config_json: &str, start: u8, end: u8) -> Result<String, JsValue> {
    let config = parse_config(config_json)?;
    if start > 24 || end > 24 {
        return Err(JsValue::from_str(&format!(
            "Handles must be between 0 and 24, got {} ~ {}",
            start, end
        )));
    }
    let outcome = config.commit_resolver().resolve(Handles::new(start, end));
    to_json(&outcome)
}

// ---------------------------------------------------------------------------
// DialEditor
// ---------------------------------------------------------------------------

/// One editing session driven by pointer events from the host.
///
/// Haptic ticks are buffered; the host drains them with `takeTicks()` after
/// each event and plays them back.
#[wasm_bindgen]
pub struct DialEditor {
    session: EditSession,
    drag: DragSession,
    ticks: TickCounter,
}

#[wasm_bindgen]
impl DialEditor {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<DialEditor, JsValue> {
        let config = parse_config(config_json)?;
        let session = EditSession::new(&config).map_err(js_error)?;
        Ok(Self {
            drag: DragSession::new(session.geometry()),
            session,
            ticks: TickCounter::default(),
        })
    }

    /// Feed one pointer event. Returns `true` when the handles moved.
    pub fn pointer(&mut self, x: f64, y: f64, phase: &str) -> Result<bool, JsValue> {
        let event = PointerEvent::new(x, y, parse_phase(phase)?);
        Ok(self
            .drag
            .handle_event(event, &mut self.session, &mut self.ticks)
            .is_some())
    }

    pub fn start(&self) -> u8 {
        self.session.start()
    }

    pub fn end(&self) -> u8 {
        self.session.end()
    }

    #[wasm_bindgen(js_name = "startAngle")]
    pub fn start_angle(&self) -> f64 {
        hour_to_angle(self.session.start())
    }

    #[wasm_bindgen(js_name = "endAngle")]
    pub fn end_angle(&self) -> f64 {
        hour_to_angle(self.session.end())
    }

    /// Arc drawn from the start handle to the end handle, in degrees.
    #[wasm_bindgen(js_name = "sweepAngle")]
    pub fn sweep_angle(&self) -> f64 {
        sweep_angle(self.session.start(), self.session.end())
    }

    pub fn duration(&self) -> u8 {
        self.session.duration()
    }

    #[wasm_bindgen(js_name = "isModified")]
    pub fn is_modified(&self) -> bool {
        self.session.is_modified()
    }

    /// `"morning"`, `"afternoon"`, `"evening"` or `"night"` for the start handle icon.
    #[wasm_bindgen(js_name = "startPhase")]
    pub fn start_phase(&self) -> String {
        phase_name(DayPhase::of(self.session.start())).to_string()
    }

    #[wasm_bindgen(js_name = "endPhase")]
    pub fn end_phase(&self) -> String {
        phase_name(DayPhase::of(self.session.end())).to_string()
    }

    /// Haptic ticks accumulated since the last call.
    #[wasm_bindgen(js_name = "takeTicks")]
    pub fn take_ticks(&mut self) -> u32 {
        self.ticks.take()
    }

    /// Commit the current pair; returns the outcome as JSON.
    pub fn commit(&mut self) -> Result<String, JsValue> {
        let outcome = self.session.commit().map_err(js_error)?;
        to_json(&outcome)
    }

    /// Answer a pending merge.
    ///
    /// Approval returns a ready outcome as JSON; declining returns `"null"`
    /// and the editor keeps accepting pointer events.
    pub fn confirm(&mut self, approved: bool) -> Result<String, JsValue> {
        let outcome = self
            .session
            .confirm(approved)
            .map_err(js_error)?
            .map(|records| CommitOutcome::Ready { records });
        to_json(&outcome)
    }

    /// Restore the initial pair and drop any pending merge.
    pub fn cancel(&mut self) {
        self.session.cancel();
        self.drag.release();
    }
}
