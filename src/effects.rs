//! Fire-and-forget side-effect requests emitted by the activities.
//!
//! The state machines never wait on these. The host drains them after every
//! call and hands them to audio, speech, vibration and the stroke renderer.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tone {
    Success,
    Error,
    Click,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Vibration {
    Short,
    Double,
}

/// Requests for the external stroke-order renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum StrokeRequest {
    /// Load a character and begin a tracing quiz.
    Quiz { character: String },
    /// Play the whole stroke animation.
    Animate { character: String },
    /// Demonstrate one stroke after a mistake.
    Hint { stroke: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value", rename_all = "snake_case"))]
pub enum Effect {
    Tone(Tone),
    Speak(String),
    Vibrate(Vibration),
    Stroke(StrokeRequest),
}

/// Buffer of effects waiting for the host.
#[derive(Clone, Debug, Default)]
pub struct EffectQueue {
    items: Vec<Effect>,
}

impl EffectQueue {
    pub fn push(&mut self, effect: Effect) {
        self.items.push(effect);
    }

    pub fn tone(&mut self, tone: Tone) {
        self.push(Effect::Tone(tone));
    }

    pub fn speak(&mut self, text: impl Into<String>) {
        self.push(Effect::Speak(text.into()));
    }

    pub fn vibrate(&mut self, pattern: Vibration) {
        self.push(Effect::Vibrate(pattern));
    }

    pub fn stroke(&mut self, request: StrokeRequest) {
        self.push(Effect::Stroke(request));
    }

    pub fn take(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.items)
    }
}
