//! Inline style writes with legacy vendor-prefix expansion.

mod vendor;

use std::collections::BTreeMap;

pub use vendor::{REGISTRY, Vendor, VendorProperty};

/// Anything inline styles can be written to.
pub trait StyleMap {
    fn set_property(&mut self, name: &str, value: &str);
}

impl StyleMap for BTreeMap<String, String> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

/// A registry keyword found inside a transition value, at a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splice {
    pub keyword: VendorProperty,
    pub offset: usize,
}

impl Splice {
    /// Insert the vendor tag in front of the keyword: `transform 0.3s`
    /// becomes `-webkit-transform 0.3s`.
    pub fn apply(&self, value: &str, vendor: Vendor) -> String {
        let (head, tail) = value.split_at(self.offset);
        format!("{head}{}{tail}", vendor.css_tag())
    }
}

/// Locate the first occurrence of each registry keyword inside a transition
/// value (case-insensitive), in registry order.
pub fn transition_splices(value: &str) -> Vec<Splice> {
    let lowered = value.to_ascii_lowercase();
    REGISTRY
        .into_iter()
        .filter_map(|keyword| {
            lowered
                .find(keyword.css_keyword())
                .map(|offset| Splice { keyword, offset })
        })
        .collect()
}

/// Write `value` under `property`, expanding vendor variants for the
/// registry properties.
pub fn apply_style<S: StyleMap + ?Sized>(target: &mut S, property: &str, value: &str) {
    match VendorProperty::lookup(property) {
        None => target.set_property(property, value),
        Some(VendorProperty::Transition) => apply_transition(target, value),
        Some(prefixed) => apply_prefixed(target, prefixed, value),
    }
}

/// Write the same literal value under the unprefixed key and every vendor key.
pub fn apply_prefixed<S: StyleMap + ?Sized>(target: &mut S, property: VendorProperty, value: &str) {
    target.set_property(property.style_key(), value);
    for vendor in Vendor::ALL {
        target.set_property(property.vendor_key(vendor), value);
    }
}

fn apply_transition<S: StyleMap + ?Sized>(target: &mut S, value: &str) {
    let transition = VendorProperty::Transition;
    let splices = transition_splices(value);

    if splices.is_empty() {
        target.set_property(transition.style_key(), value);
        return;
    }

    // Each splice rewrites every vendor key; later keywords overwrite earlier ones.
    for splice in &splices {
        target.set_property(transition.style_key(), value);
        for vendor in Vendor::ALL {
            target.set_property(transition.vendor_key(vendor), &splice.apply(value, vendor));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splices_are_case_insensitive() {
        assert_eq!(
            transition_splices("opacity 1s, Transform 2s"),
            vec![Splice {
                keyword: VendorProperty::Transform,
                offset: 12
            }]
        );
    }

    #[test]
    fn test_splices_follow_registry_order() {
        let splices = transition_splices("animation 1s, transform 2s");
        let keywords: Vec<_> = splices.iter().map(|s| s.keyword).collect();
        assert_eq!(
            keywords,
            vec![VendorProperty::Transform, VendorProperty::Animation]
        );
    }

    #[test]
    fn test_splice_apply() {
        let splice = Splice {
            keyword: VendorProperty::Transform,
            offset: 4,
        };
        assert_eq!(splice.apply("all transform", Vendor::O), "all -o-transform");
    }
}
