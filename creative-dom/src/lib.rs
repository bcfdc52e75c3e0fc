pub mod dom;
pub mod element;
pub mod error;
pub mod event;
pub mod platform;
pub mod scroll;
pub mod style;

pub use dom::{Document, ListenerTarget, MemoryDocument};
pub use element::ElementHandle;
pub use error::{DomError, ScrollError};
pub use event::{DomEvent, EventKind, EventOutcome, Touch};
pub use platform::UserAgent;
pub use scroll::{ScrollConfig, ScrollController, ScrollPhase, ScrollState};
pub use style::{StyleMap, Vendor, VendorProperty, apply_style};
