use std::collections::BTreeSet;

use log::debug;

use super::{ScrollConfig, ScrollPhase, ScrollState, translate};
use crate::dom::{Document, ElementStyle, ListenerTarget};
use crate::element::ElementHandle;
use crate::error::{DomError, ScrollError};
use crate::event::{DomEvent, EventKind, EventOutcome};
use crate::platform::UserAgent;
use crate::style::{VendorProperty, apply_prefixed};

/// One scrollbar: configuration, live positions and the listeners it owns.
///
/// The host forwards input through [`handle_event`](Self::handle_event);
/// only events one of the attached listeners would receive are processed.
#[derive(Debug)]
pub struct ScrollController {
    config: ScrollConfig,
    platform: UserAgent,
    state: ScrollState,
    listeners: BTreeSet<(ListenerTarget, EventKind)>,
}

impl ScrollController {
    pub fn new(config: ScrollConfig, platform: UserAgent) -> Self {
        Self {
            config,
            platform,
            state: ScrollState::default(),
            listeners: BTreeSet::new(),
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.phase == ScrollPhase::Dragging
    }

    /// Attach listeners and place thumb and content at their minimum.
    pub fn init<D: Document + ?Sized>(&mut self, doc: &mut D) -> Result<(), ScrollError> {
        if self.state.is_initialized() {
            return Err(ScrollError::AlreadyInitialized);
        }
        self.config.validate()?;

        let required = [
            Some(&self.config.thumb_id),
            Some(&self.config.content_id),
            Some(&self.config.container_id),
            self.config.selection_root_id.as_ref(),
        ];
        if let Some(missing) = required.into_iter().flatten().find(|id| !doc.contains(id)) {
            return Err(DomError::missing(missing.as_str()).into());
        }

        let thumb = ListenerTarget::Element(self.config.thumb_id.clone());
        let container = ListenerTarget::Element(self.config.container_id.clone());
        self.attach(doc, thumb.clone(), EventKind::MouseDown);
        self.attach(doc, thumb, EventKind::TouchStart);
        self.attach(doc, ListenerTarget::Window, EventKind::MouseUp);
        self.attach(doc, ListenerTarget::Window, EventKind::TouchEnd);
        self.attach(doc, container.clone(), EventKind::Wheel);
        self.attach(doc, container.clone(), EventKind::MouseDown);
        self.attach(doc, container, EventKind::TouchStart);

        self.state = ScrollState::initialized(&self.config);
        debug!(
            "[scroll] init thumb={} content={} ratio={}",
            self.config.thumb_id, self.config.content_id, self.state.ratio
        );
        Ok(())
    }

    /// Route an event to press, release or move handling.
    pub fn handle_event<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        event: &DomEvent,
    ) -> Result<EventOutcome, DomError> {
        if !self.listens(doc, event) {
            return Ok(EventOutcome::default());
        }

        match event.kind() {
            EventKind::MouseDown | EventKind::TouchStart => Ok(self.hold(doc, event)),
            EventKind::MouseUp | EventKind::TouchEnd => {
                self.release(doc);
                Ok(EventOutcome::default())
            }
            EventKind::MouseMove | EventKind::TouchMove | EventKind::Wheel => {
                self.scroll_move(doc, event)
            }
        }
    }

    /// Press on the thumb or the scroll area: anchor the pointer and start
    /// following moves.
    pub fn hold<D: Document + ?Sized>(&mut self, doc: &mut D, event: &DomEvent) -> EventOutcome {
        if !self.state.is_initialized() {
            return EventOutcome::default();
        }

        let (y, prevent_default) = self.pointer_y(event);
        self.state.last_y = y;
        self.state.phase = ScrollPhase::Dragging;

        if self.platform.is_mobile_device() {
            self.attach(doc, ListenerTarget::Window, EventKind::TouchMove);
        } else {
            self.attach(doc, ListenerTarget::Window, EventKind::MouseMove);
            if event.target() == self.config.thumb_id {
                self.set_user_select(doc, "none");
            }
        }
        debug!(
            "[scroll] {} hold on {} at {:?}",
            event.kind().name(),
            event.target(),
            y
        );

        EventOutcome {
            moved: false,
            prevent_default,
        }
    }

    /// Stop following moves and give text selection back.
    pub fn release<D: Document + ?Sized>(&mut self, doc: &mut D) {
        if self.platform.is_mobile_device() {
            self.detach(doc, ListenerTarget::Window, EventKind::TouchMove);
        } else {
            self.detach(doc, ListenerTarget::Window, EventKind::MouseMove);
            self.set_user_select(doc, "auto");
        }
        if self.state.phase == ScrollPhase::Dragging {
            self.state.phase = ScrollPhase::Idle;
            debug!("[scroll] release");
        }
    }

    /// Compute new positions for a move or wheel event and render them.
    pub fn scroll_move<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        event: &DomEvent,
    ) -> Result<EventOutcome, DomError> {
        let mut outcome = EventOutcome::default();
        if !self.state.is_initialized() {
            return Ok(outcome);
        }

        outcome.moved = match event {
            DomEvent::Wheel { delta_y, .. } => self.state.wheel(&self.config, *delta_y),
            _ => {
                let (y, prevent_default) = self.pointer_y(event);
                outcome.prevent_default = prevent_default;
                self.state.pointer(&self.config, y)
            }
        };

        if outcome.moved {
            self.render(doc)?;
        }
        Ok(outcome)
    }

    /// Vertical pointer coordinate of an event.
    ///
    /// Mobile agents read the first touch's page Y, negated unless the
    /// thumb itself was touched; desktop agents read the client Y. The flag
    /// asks the host to cancel the event when a mobile event has no touch.
    fn pointer_y(&self, event: &DomEvent) -> (Option<f64>, bool) {
        if !self.platform.is_mobile_device() {
            return (event.client_y(), false);
        }

        match event.touches().and_then(|touches| touches.first()) {
            Some(touch) if event.target() == self.config.thumb_id => (Some(touch.page_y), false),
            Some(touch) => (Some(-touch.page_y), false),
            None => (None, true),
        }
    }

    fn render<D: Document + ?Sized>(&self, doc: &mut D) -> Result<(), DomError> {
        let thumb = translate(self.config.thumb_x, self.state.thumb_y);
        let content = translate(self.config.content_x, self.state.content_y);

        ElementHandle::new(&mut *doc, [self.config.thumb_id.as_str()])?
            .change_style("transform", &thumb)?;
        ElementHandle::new(&mut *doc, [self.config.content_id.as_str()])?
            .change_style("transform", &content)?;
        Ok(())
    }

    fn set_user_select<D: Document + ?Sized>(&self, doc: &mut D, value: &str) {
        if let Some(root) = &self.config.selection_root_id {
            apply_prefixed(
                &mut ElementStyle::new(doc, root),
                VendorProperty::UserSelect,
                value,
            );
        }
    }

    fn listens<D: Document + ?Sized>(&self, doc: &D, event: &DomEvent) -> bool {
        let kind = event.kind();
        self.listeners.iter().any(|(target, listened)| {
            *listened == kind
                && match target {
                    ListenerTarget::Window => true,
                    ListenerTarget::Element(id) => doc.is_within(event.target(), id),
                }
        })
    }

    // Registrations are paired with the document: one add per listener this
    // controller owns, one remove when it lets go of it.
    fn attach<D: Document + ?Sized>(&mut self, doc: &mut D, target: ListenerTarget, kind: EventKind) {
        if self.listeners.insert((target.clone(), kind)) {
            debug!("[scroll] listen {} on {:?}", kind.name(), target);
            doc.add_listener(target, kind);
        }
    }

    fn detach<D: Document + ?Sized>(&mut self, doc: &mut D, target: ListenerTarget, kind: EventKind) {
        if self.listeners.remove(&(target.clone(), kind)) {
            debug!("[scroll] unlisten {} on {:?}", kind.name(), target);
            doc.remove_listener(&target, kind);
        }
    }
}
