/// A touch point; only the page coordinate is read.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Touch {
    pub page_y: f64,
}

impl Touch {
    pub fn new(page_y: f64) -> Self {
        Self { page_y }
    }
}

/// Input events delivered by the host, each carrying the id of the element
/// it was dispatched to.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomEvent {
    MouseDown { target: String, client_y: f64 },
    MouseMove { target: String, client_y: f64 },
    MouseUp { target: String },
    TouchStart { target: String, touches: Vec<Touch> },
    TouchMove { target: String, touches: Vec<Touch> },
    TouchEnd { target: String },
    Wheel { target: String, delta_y: f64 },
}

impl DomEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DomEvent::MouseDown { .. } => EventKind::MouseDown,
            DomEvent::MouseMove { .. } => EventKind::MouseMove,
            DomEvent::MouseUp { .. } => EventKind::MouseUp,
            DomEvent::TouchStart { .. } => EventKind::TouchStart,
            DomEvent::TouchMove { .. } => EventKind::TouchMove,
            DomEvent::TouchEnd { .. } => EventKind::TouchEnd,
            DomEvent::Wheel { .. } => EventKind::Wheel,
        }
    }

    pub fn target(&self) -> &str {
        match self {
            DomEvent::MouseDown { target, .. }
            | DomEvent::MouseMove { target, .. }
            | DomEvent::MouseUp { target }
            | DomEvent::TouchStart { target, .. }
            | DomEvent::TouchMove { target, .. }
            | DomEvent::TouchEnd { target }
            | DomEvent::Wheel { target, .. } => target,
        }
    }

    /// Touch points, for touch events.
    pub fn touches(&self) -> Option<&[Touch]> {
        match self {
            DomEvent::TouchStart { touches, .. } | DomEvent::TouchMove { touches, .. } => {
                Some(touches)
            }
            _ => None,
        }
    }

    /// Viewport Y coordinate, for mouse button and move events.
    pub fn client_y(&self) -> Option<f64> {
        match self {
            DomEvent::MouseDown { client_y, .. } | DomEvent::MouseMove { client_y, .. } => {
                Some(*client_y)
            }
            _ => None,
        }
    }
}

/// Event classes a listener can be attached for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    Wheel,
}

impl EventKind {
    /// DOM event type name.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::MouseDown => "mousedown",
            EventKind::MouseMove => "mousemove",
            EventKind::MouseUp => "mouseup",
            EventKind::TouchStart => "touchstart",
            EventKind::TouchMove => "touchmove",
            EventKind::TouchEnd => "touchend",
            EventKind::Wheel => "wheel",
        }
    }
}

/// What handling an event did, for the host to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// Thumb and content transforms were written.
    pub moved: bool,
    /// The host should cancel the event's default action.
    pub prevent_default: bool,
}
