use eframe::egui::{vec2, Pos2, Vec2};

/// Tooltip position relative to the pointer: 10px right, 10px up.
pub const POINTER_OFFSET: Vec2 = vec2(10.0, -10.0);

// ---------------------------------------------------------------------------
// Tooltip handles
// ---------------------------------------------------------------------------

/// Identifies one shown tooltip. Hiding with a handle only ever removes the
/// tooltip it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TooltipHandle(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub handle: TooltipHandle,
    /// Element the tooltip describes (flat index across container children).
    pub target: usize,
    pub text: String,
    /// Top-left corner, in screen coordinates.
    pub pos: Pos2,
}

/// What the pointer is currently over in a container.
#[derive(Debug, Clone, PartialEq)]
pub struct Hover {
    pub target: usize,
    pub text: String,
    pub pointer: Pos2,
}

/// The single tooltip slot of one container.
#[derive(Debug, Default)]
pub struct TooltipSlot {
    current: Option<Tooltip>,
    next_id: u64,
}

impl TooltipSlot {
    /// Show a tooltip for `target` next to `pointer`, replacing any tooltip
    /// already in this slot.
    pub fn show(
        &mut self,
        target: usize,
        text: impl Into<String>,
        pointer: Pos2,
    ) -> TooltipHandle {
        let handle = TooltipHandle(self.next_id);
        self.next_id += 1;
        let text = text.into();
        log::trace!("tooltip {handle:?} for element {target}: {text:?}");
        self.current = Some(Tooltip {
            handle,
            target,
            text,
            pos: pointer + POINTER_OFFSET,
        });
        handle
    }

    /// Remove the tooltip issued as `handle`. Returns `false` when that
    /// tooltip is already gone, in which case nothing changes.
    pub fn hide(&mut self, handle: TooltipHandle) -> bool {
        match &self.current {
            Some(tip) if tip.handle == handle => {
                log::trace!("tooltip {handle:?} hidden");
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Feed the hover state of one frame: entering a new element shows its
    /// tooltip, leaving it hides exactly that tooltip. The tooltip stays
    /// where it was first shown while the pointer remains on the same
    /// element.
    pub fn track(&mut self, hover: Option<Hover>) {
        let active = self.current.as_ref().map(|t| (t.handle, t.target));
        match (active, hover) {
            (Some((_, target)), Some(h)) if target == h.target => {}
            (Some((handle, _)), Some(h)) => {
                self.hide(handle);
                self.show(h.target, h.text, h.pointer);
            }
            (None, Some(h)) => {
                self.show(h.target, h.text, h.pointer);
            }
            (Some((handle, _)), None) => {
                self.hide(handle);
            }
            (None, None) => {}
        }
    }

    pub fn current(&self) -> Option<&Tooltip> {
        self.current.as_ref()
    }

    /// Drop whatever is shown, e.g. when the container is cleared.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
