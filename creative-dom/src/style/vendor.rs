/// Browser engines that historically required prefixed style properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    Webkit,
    Moz,
    O,
    Ms,
}

impl Vendor {
    pub const ALL: [Vendor; 4] = [Vendor::Webkit, Vendor::Moz, Vendor::O, Vendor::Ms];

    /// Tag spliced into CSS values, e.g. `-webkit-`.
    pub fn css_tag(self) -> &'static str {
        match self {
            Vendor::Webkit => "-webkit-",
            Vendor::Moz => "-moz-",
            Vendor::O => "-o-",
            Vendor::Ms => "-ms-",
        }
    }
}

/// Style properties that are written together with their vendor variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorProperty {
    Transition,
    Transform,
    BackfaceVisibility,
    Animation,
    UserSelect,
}

/// Properties that `apply_style` recognises by name. `UserSelect` is only
/// written explicitly (text-selection suppression while dragging).
pub const REGISTRY: [VendorProperty; 4] = [
    VendorProperty::Transition,
    VendorProperty::Transform,
    VendorProperty::BackfaceVisibility,
    VendorProperty::Animation,
];

// Rows follow `VendorProperty` order, columns follow `Vendor::ALL`.
const VARIANTS: [[&str; 4]; 5] = [
    ["webkitTransition", "mozTransition", "oTransition", "msTransition"],
    ["webkitTransform", "mozTransform", "oTransform", "msTransform"],
    [
        "webkitBackfaceVisibility",
        "mozBackfaceVisibility",
        "oBackfaceVisibility",
        "msBackfaceVisibility",
    ],
    ["webkitAnimation", "mozAnimation", "oAnimation", "msAnimation"],
    ["webkitUserSelect", "mozUserSelect", "oUserSelect", "msUserSelect"],
];

impl VendorProperty {
    /// Unprefixed style key.
    pub fn style_key(self) -> &'static str {
        match self {
            VendorProperty::Transition => "transition",
            VendorProperty::Transform => "transform",
            VendorProperty::BackfaceVisibility => "backfaceVisibility",
            VendorProperty::Animation => "animation",
            VendorProperty::UserSelect => "userSelect",
        }
    }

    /// Name as it appears inside CSS values such as a transition list.
    pub fn css_keyword(self) -> &'static str {
        match self {
            VendorProperty::Transition => "transition",
            VendorProperty::Transform => "transform",
            VendorProperty::BackfaceVisibility => "backface-visibility",
            VendorProperty::Animation => "animation",
            VendorProperty::UserSelect => "user-select",
        }
    }

    pub fn vendor_key(self, vendor: Vendor) -> &'static str {
        VARIANTS[self as usize][vendor as usize]
    }

    /// Resolve a property name against the registry, ignoring case and hyphens.
    pub fn lookup(name: &str) -> Option<Self> {
        let flattened: String = name.chars().filter(|c| *c != '-').collect();
        REGISTRY
            .into_iter()
            .find(|property| property.style_key().eq_ignore_ascii_case(&flattened))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case_and_hyphens() {
        assert_eq!(
            VendorProperty::lookup("Backface-Visibility"),
            Some(VendorProperty::BackfaceVisibility)
        );
        assert_eq!(VendorProperty::lookup("TRANSFORM"), Some(VendorProperty::Transform));
        assert_eq!(VendorProperty::lookup("opacity"), None);
    }

    #[test]
    fn test_user_select_is_not_looked_up() {
        assert_eq!(VendorProperty::lookup("user-select"), None);
        assert_eq!(
            VendorProperty::UserSelect.vendor_key(Vendor::Moz),
            "mozUserSelect"
        );
    }
}
