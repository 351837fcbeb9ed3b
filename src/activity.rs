use crate::effects::Effect;

/// What the host loop needs from any running activity.
///
/// The host calls `tick` on a fixed period while `needs_ticks` is true and
/// drains effects after every call into the activity.
pub trait Activity {
    fn tick(&mut self, dt: f64);
    fn needs_ticks(&self) -> bool;
    fn take_effects(&mut self) -> Vec<Effect>;
    fn exit(&mut self);
}
