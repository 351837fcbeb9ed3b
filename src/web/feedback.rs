//! Plays drained effects through Web Audio, speech synthesis, vibration and
//! the page's stroke renderer. Every output is best effort: failures are
//! logged at debug level and never reach the activity.

use std::cell::RefCell;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType, SpeechSynthesisUtterance, window};

use crate::effects::{Effect, StrokeRequest, Tone, Vibration};

/// Speech voice used for all spoken prompts.
const SPEECH_LANG: &str = "ko-KR";
const SPEECH_RATE: f32 = 0.9;

thread_local! {
    static AUDIO: RefCell<Option<AudioContext>> = const { RefCell::new(None) };
}

/// JS callbacks registered by the page.
#[derive(Default)]
pub struct Hooks {
    pub on_change: RefCell<Option<Function>>,
    pub on_stroke: RefCell<Option<Function>>,
}

impl Hooks {
    pub fn notify_change(&self) {
        // cloned so the callback may replace itself
        let hook = self.on_change.borrow().clone();
        if let Some(f) = hook {
            if let Err(e) = f.call0(&JsValue::NULL) {
                log::warn!("on_change callback threw: {e:?}");
            }
        }
    }

    fn send_stroke(&self, request: &StrokeRequest) -> Result<(), JsValue> {
        let hook = self.on_stroke.borrow().clone();
        let Some(f) = hook else {
            return Ok(());
        };
        f.call1(&JsValue::NULL, &stroke_payload(request)?)?;
        Ok(())
    }
}

pub fn dispatch(effects: Vec<Effect>, hooks: &Hooks) {
    for effect in effects {
        let outcome = match &effect {
            Effect::Tone(tone) => play_tone(*tone),
            Effect::Speak(text) => speak(text),
            Effect::Vibrate(pattern) => vibrate(*pattern),
            Effect::Stroke(request) => hooks.send_stroke(request),
        };
        if let Err(e) = outcome {
            log::debug!("{effect:?} skipped: {e:?}");
        }
    }
}

#[allow(deprecated)]
fn play_tone(tone: Tone) -> Result<(), JsValue> {
    let (freq, secs, wave) = match tone {
        Tone::Success => (880.0, 0.18, OscillatorType::Sine),
        Tone::Error => (196.0, 0.25, OscillatorType::Square),
        Tone::Click => (660.0, 0.05, OscillatorType::Triangle),
    };
    AUDIO.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(AudioContext::new()?);
        }
        let Some(ctx) = slot.as_ref() else {
            return Ok(());
        };
        let osc = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;
        osc.set_type(wave);
        osc.frequency().set_value(freq);
        let now = ctx.current_time();
        gain.gain().set_value_at_time(0.15, now)?;
        gain.gain().exponential_ramp_to_value_at_time(0.001, now + secs)?;
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        osc.start_with_when(now)?;
        osc.stop_with_when(now + secs)?;
        Ok(())
    })
}

fn speak(text: &str) -> Result<(), JsValue> {
    let Some(w) = window() else {
        return Ok(());
    };
    let synth = w.speech_synthesis()?;
    // a new prompt replaces whatever is still being read
    synth.cancel();
    let utterance = SpeechSynthesisUtterance::new_with_text(text)?;
    utterance.set_lang(SPEECH_LANG);
    utterance.set_rate(SPEECH_RATE);
    synth.speak(&utterance);
    Ok(())
}

fn vibrate(pattern: Vibration) -> Result<(), JsValue> {
    let Some(w) = window() else {
        return Ok(());
    };
    let navigator = w.navigator();
    match pattern {
        Vibration::Short => {
            navigator.vibrate_with_duration(40);
        }
        Vibration::Double => {
            let steps: Array = [60u32, 60, 60].iter().map(|ms| JsValue::from(*ms)).collect();
            navigator.vibrate_with_pattern(&steps);
        }
    }
    Ok(())
}

/// `{ kind: "quiz" | "animate", character }` or `{ kind: "hint", stroke }`.
fn stroke_payload(request: &StrokeRequest) -> Result<JsValue, JsValue> {
    let payload = Object::new();
    let (kind, key, value) = match request {
        StrokeRequest::Quiz { character } => ("quiz", "character", JsValue::from_str(character)),
        StrokeRequest::Animate { character } => {
            ("animate", "character", JsValue::from_str(character))
        }
        StrokeRequest::Hint { stroke } => ("hint", "stroke", JsValue::from(*stroke)),
    };
    Reflect::set(&payload, &"kind".into(), &kind.into())?;
    Reflect::set(&payload, &key.into(), &value)?;
    Ok(payload.into())
}
