//! Component descriptors: the unit of input.
//!
//! ```text
//! ComponentDescriptor
//! ├── key    "card"         (template key, used in diagnostics)
//! ├── name   "custom-card"  (directory name, identifier source)
//! ├── class  "card-base"    (CSS class)
//! └── props  Vec<Prop>      (declaration order)
//!      └── Prop { name, optional, kind: Primitive | Union }
//! ```

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{error::DomainError, identifier::Identifier};

/// Declared type of a prop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PropKind {
    /// A type name emitted verbatim, e.g. `string`, `number`, `() => void`.
    Primitive(String),
    /// A union of string literals, in declaration order.
    Union(Vec<String>),
}

impl PropKind {
    pub fn primitive(type_name: impl Into<String>) -> Self {
        Self::Primitive(type_name.into())
    }

    pub fn union<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Union(variants.into_iter().map(Into::into).collect())
    }
}

/// A single component prop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prop {
    name: String,
    optional: bool,
    kind: PropKind,
}

impl Prop {
    /// Create a required prop, validating name and type.
    pub fn new(name: impl Into<String>, kind: PropKind) -> Result<Self, DomainError> {
        let prop = Self {
            name: name.into(),
            optional: false,
            kind,
        };
        prop.validate()?;
        Ok(prop)
    }

    /// Same prop with the given optionality.
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn kind(&self) -> &PropKind {
        &self.kind
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidProp {
            prop: self.name.clone(),
            reason: reason.to_owned(),
        };

        let mut chars = self.name.chars();
        match chars.next() {
            None => return Err(invalid("name is empty")),
            Some(c) if !is_ident_start(c) => {
                return Err(invalid("name must start with a letter, '_' or '$'"));
            }
            Some(_) => {}
        }
        if let Some(bad) = chars.find(|c| !is_ident_continue(*c)) {
            return Err(invalid(&format!("unexpected character '{bad}' in name")));
        }

        match &self.kind {
            PropKind::Primitive(type_name) => {
                if type_name.trim().is_empty() {
                    return Err(invalid("type name is empty"));
                }
                // One field per line in the interface body.
                if type_name.contains(['\n', '\r']) {
                    return Err(invalid("type name cannot span lines"));
                }
            }
            PropKind::Union(variants) => {
                if variants.is_empty() {
                    return Err(invalid("union must list at least one literal"));
                }
                if variants.iter().any(|v| v.contains('\n')) {
                    return Err(invalid("union literals cannot contain newlines"));
                }
            }
        }

        Ok(())
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Description of one UI component to scaffold.
///
/// Read-only once built; the generator never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentDescriptor {
    key: String,
    name: String,
    class: String,
    props: Vec<Prop>,
}

impl ComponentDescriptor {
    pub fn builder(key: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder::new(key)
    }

    /// Template key this descriptor was loaded under.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn props(&self) -> &[Prop] {
        &self.props
    }

    /// Derive the identifier shared by all four artifacts.
    pub fn identifier(&self) -> Result<Identifier, DomainError> {
        Identifier::derive(&self.name)
    }

    /// Full descriptor check: identifier, class, every prop, no duplicates.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.identifier()?;
        validate_class(&self.class)?;

        let mut seen = HashSet::new();
        for prop in &self.props {
            prop.validate()?;
            if !seen.insert(prop.name()) {
                return Err(DomainError::DuplicateProp {
                    prop: prop.name().to_owned(),
                });
            }
        }

        Ok(())
    }
}

fn validate_class(class: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidClass {
        class: class.to_owned(),
        reason: reason.to_owned(),
    };

    if class.is_empty() {
        return Err(invalid("class is empty"));
    }
    if class.starts_with('.') {
        return Err(invalid("omit the leading '.'"));
    }
    if class.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid("class cannot start with a digit"));
    }
    if let Some(bad) = class
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(invalid(&format!("unexpected character '{bad}'")));
    }
    Ok(())
}

/// Builder for [`ComponentDescriptor`].
///
/// `name` and `class` are required; an empty prop list is allowed.
#[derive(Debug, Default)]
pub struct DescriptorBuilder {
    key: String,
    name: Option<String>,
    class: Option<String>,
    props: Vec<Prop>,
}

impl DescriptorBuilder {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn prop(mut self, prop: Prop) -> Self {
        self.props.push(prop);
        self
    }

    pub fn props(mut self, props: impl IntoIterator<Item = Prop>) -> Self {
        self.props.extend(props);
        self
    }

    /// Build and validate.
    pub fn build(self) -> Result<ComponentDescriptor, DomainError> {
        let descriptor = ComponentDescriptor {
            key: self.key,
            name: self
                .name
                .ok_or(DomainError::MissingRequiredField { field: "name" })?,
            class: self
                .class
                .ok_or(DomainError::MissingRequiredField { field: "class" })?,
            props: self.props,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }
}
