use std::collections::HashSet;

use crate::domain::{entities::descriptor::ComponentDescriptor, error::DomainError};

/// Ordered mapping of template key to [`ComponentDescriptor`].
///
/// Order is the document order of the source file; generation follows it.
/// The template is an explicit value handed to the generator for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    components: Vec<ComponentDescriptor>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, descriptor: ComponentDescriptor) {
        self.components.push(descriptor);
    }

    pub fn with_component(mut self, descriptor: ComponentDescriptor) -> Self {
        self.push(descriptor);
        self
    }

    pub fn components(&self) -> &[ComponentDescriptor] {
        &self.components
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.components.iter()
    }

    pub fn get(&self, key: &str) -> Option<&ComponentDescriptor> {
        self.components.iter().find(|d| d.key() == key)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// First descriptor whose `name` was already used by an earlier one.
    ///
    /// Two such descriptors would overwrite each other's directory.
    pub fn find_duplicate_name(&self) -> Option<(&ComponentDescriptor, DomainError)> {
        let mut seen = HashSet::new();
        self.components
            .iter()
            .find(|d| !seen.insert(d.name()))
            .map(|d| {
                (
                    d,
                    DomainError::DuplicateComponentName {
                        name: d.name().to_owned(),
                    },
                )
            })
    }
}

impl FromIterator<ComponentDescriptor> for Template {
    fn from_iter<I: IntoIterator<Item = ComponentDescriptor>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Template {
    type Item = &'a ComponentDescriptor;
    type IntoIter = std::slice::Iter<'a, ComponentDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(key: &str, name: &str) -> ComponentDescriptor {
        ComponentDescriptor::builder(key)
            .name(name)
            .class("c")
            .build()
            .unwrap()
    }

    #[test]
    fn keeps_insertion_order() {
        let t: Template = ["z", "a", "m"]
            .into_iter()
            .map(|k| descriptor(k, k))
            .collect();
        let keys: Vec<_> = t.iter().map(ComponentDescriptor::key).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn lookup_by_key() {
        let t = Template::new().with_component(descriptor("card", "custom-card"));
        assert_eq!(t.get("card").unwrap().name(), "custom-card");
        assert!(t.get("missing").is_none());
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn duplicate_names_are_found() {
        let t = Template::new()
            .with_component(descriptor("first", "card"))
            .with_component(descriptor("second", "panel"))
            .with_component(descriptor("third", "card"));
        let (dup, err) = t.find_duplicate_name().unwrap();
        assert_eq!(dup.key(), "third");
        assert_eq!(
            err,
            DomainError::DuplicateComponentName {
                name: "card".into()
            }
        );
    }

    #[test]
    fn unique_names_pass() {
        let t = Template::new()
            .with_component(descriptor("a", "alpha"))
            .with_component(descriptor("b", "beta"));
        assert!(t.find_duplicate_name().is_none());
    }
}
