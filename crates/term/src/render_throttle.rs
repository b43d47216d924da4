//! Redraw gating for a mostly static scene.

/// Decides when the draw loop should produce a new frame.
///
/// The maze only changes on input, so frames are drawn when the scene
/// fingerprint changes, plus a periodic refresh to repair terminal damage.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Render on the first call, on fingerprint change, or once the static
    /// interval has elapsed since the last render.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;
        if !changed && !stale {
            return false;
        }
        self.last_render_ms = now_ms;
        self.last_fingerprint = Some(fingerprint);
        true
    }

    /// Forget the last frame so the next call renders (e.g. after a resize).
    pub fn reset(&mut self) {
        self.last_fingerprint = None;
    }
}
