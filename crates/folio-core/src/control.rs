/// Run state of the animation loop.
///
/// Frames are produced only while the host has started the loop and the page
/// is visible. Transitions report whether frame scheduling must be re-armed so
/// the host never holds two pending frame callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopControl {
    running: bool,
    visible: bool,
}

impl Default for LoopControl {
    fn default() -> Self {
        Self {
            running: false,
            visible: true,
        }
    }
}

impl LoopControl {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Should the next frame be rendered and another one requested.
    pub fn is_active(&self) -> bool {
        self.running && self.visible
    }

    /// Returns true when the loop went from inactive to active.
    pub fn start(&mut self) -> bool {
        self.transition(|c| c.running = true)
    }

    /// Returns true when the loop went from active to inactive.
    pub fn stop(&mut self) -> bool {
        self.transition(|c| c.running = false)
    }

    pub fn set_visible(&mut self, visible: bool) -> bool {
        self.transition(|c| c.visible = visible)
    }

    fn transition(&mut self, change: impl FnOnce(&mut Self)) -> bool {
        let was = self.is_active();
        change(self);
        let now = self.is_active();
        if was != now {
            log::debug!(
                "[loop] running={} visible={} active={}",
                self.running,
                self.visible,
                now
            );
        }
        was != now
    }
}
