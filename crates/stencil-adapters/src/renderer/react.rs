//! React + TypeScript renderer.
//!
//! | Artifact   | File                        | Dialect                     |
//! |------------|-----------------------------|-----------------------------|
//! | Component  | `index.tsx`                 | `React.FC` with destructured props |
//! | Model      | `model.ts`                  | `export interface <Id>Props` |
//! | Style      | `style.scss`                | single empty rule           |
//! | Story      | `<Id>.stories.tsx`          | Storybook CSF 3             |

use stencil_core::{
    application::ports::ArtifactRenderer,
    domain::{ComponentDescriptor, Identifier, Prop, PropKind},
};

/// Renders the four artifacts in React/TypeScript conventions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactRenderer;

impl ReactRenderer {
    /// Create a new React renderer.
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactRenderer for ReactRenderer {
    fn render_component_stub(
        &self,
        descriptor: &ComponentDescriptor,
        identifier: &Identifier,
    ) -> String {
        let params = if descriptor.props().is_empty() {
            "()".to_owned()
        } else {
            let names: Vec<&str> = descriptor.props().iter().map(Prop::name).collect();
            format!("({{\n  {}\n}})", names.join(",\n  "))
        };

        format!(
            "import {{ {props_type} }} from './model';

const {identifier}: React.FC<{props_type}> = {params} => {{
  return (
    <div className=\"{class}\">
      {{/* Your JSX here */}}
    </div>
  );
}};

export default {identifier};
",
            props_type = identifier.props_type(),
            class = descriptor.class(),
        )
    }

    fn render_type_definition(
        &self,
        descriptor: &ComponentDescriptor,
        identifier: &Identifier,
    ) -> String {
        if descriptor.props().is_empty() {
            return format!("export interface {} {{}}\n", identifier.props_type());
        }

        let fields: String = descriptor
            .props()
            .iter()
            .map(|prop| {
                format!(
                    "  {}{}: {};\n",
                    prop.name(),
                    if prop.is_optional() { "?" } else { "" },
                    type_expression(prop.kind()),
                )
            })
            .collect();

        format!(
            "export interface {} {{\n{fields}}}\n",
            identifier.props_type()
        )
    }

    fn render_style_stub(&self, descriptor: &ComponentDescriptor) -> String {
        format!(".{} {{}}\n", descriptor.class())
    }

    fn render_story_stub(
        &self,
        descriptor: &ComponentDescriptor,
        identifier: &Identifier,
    ) -> String {
        let args = if descriptor.props().is_empty() {
            "{}".to_owned()
        } else {
            let entries: String = descriptor
                .props()
                .iter()
                .map(|prop| format!("    {0}: '{0}',\n", prop.name()))
                .collect();
            format!("{{\n{entries}  }}")
        };

        format!(
            "import type {{ Meta, StoryObj }} from '@storybook/react';

import {identifier} from '.';

const meta = {{
  component: {identifier},
  parameters: {{
    layout: 'fullscreen',
  }},
}} satisfies Meta<typeof {identifier}>;

export default meta;

type Story = StoryObj<typeof meta>;

export const {story}: Story = {{
  args: {args},
}};
",
            story = identifier.story_name(),
        )
    }
}

/// TypeScript type for a prop kind.
fn type_expression(kind: &PropKind) -> String {
    match kind {
        PropKind::Primitive(type_name) => type_name.trim().to_owned(),
        PropKind::Union(variants) => variants
            .iter()
            .map(|v| format!("'{}'", escape_single_quoted(v)))
            .collect::<Vec<_>>()
            .join(" | "),
    }
}

fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> ComponentDescriptor {
        ComponentDescriptor::builder("card")
            .name("custom-card")
            .class("card-base")
            .prop(Prop::new("title", PropKind::primitive("string")).unwrap())
            .prop(Prop::new("variant", PropKind::union(["a", "b"])).unwrap())
            .prop(
                Prop::new("subtitle", PropKind::primitive("string"))
                    .unwrap()
                    .with_optional(true),
            )
            .build()
            .unwrap()
    }

    fn empty() -> ComponentDescriptor {
        ComponentDescriptor::builder("spacer")
            .name("spacer")
            .class("spacer")
            .build()
            .unwrap()
    }

    fn id(d: &ComponentDescriptor) -> Identifier {
        d.identifier().unwrap()
    }

    #[test]
    fn component_stub_lists_props_without_marker() {
        let d = card();
        let out = ReactRenderer.render_component_stub(&d, &id(&d));

        assert!(out.starts_with("import { CustomCardProps } from './model';"));
        assert!(out.contains("const CustomCard: React.FC<CustomCardProps> = ({\n  title,\n  variant,\n  subtitle\n}) => {"));
        assert!(out.contains("<div className=\"card-base\">"));
        assert!(out.contains("export default CustomCard;"));
        assert!(!out.contains('?'));
    }

    #[test]
    fn component_stub_without_props() {
        let d = empty();
        let out = ReactRenderer.render_component_stub(&d, &id(&d));
        assert!(out.contains("const Spacer: React.FC<SpacerProps> = () => {"));
    }

    #[test]
    fn type_definition_renders_primitives_unions_and_optionals() {
        let d = card();
        let out = ReactRenderer.render_type_definition(&d, &id(&d));
        assert_eq!(
            out,
            "export interface CustomCardProps {\n  title: string;\n  variant: 'a' | 'b';\n  subtitle?: string;\n}\n"
        );
    }

    #[test]
    fn union_preserves_declaration_order() {
        assert_eq!(
            type_expression(&PropKind::union(["zeta", "alpha", "mid"])),
            "'zeta' | 'alpha' | 'mid'"
        );
    }

    #[test]
    fn union_literals_are_escaped() {
        assert_eq!(
            type_expression(&PropKind::union(["it's", "a\\b"])),
            "'it\\'s' | 'a\\\\b'"
        );
    }

    #[test]
    fn type_definition_without_props() {
        let d = empty();
        assert_eq!(
            ReactRenderer.render_type_definition(&d, &id(&d)),
            "export interface SpacerProps {}\n"
        );
    }

    #[test]
    fn style_stub_is_empty_rule() {
        assert_eq!(ReactRenderer.render_style_stub(&card()), ".card-base {}\n");
    }

    #[test]
    fn story_imports_component_and_fills_placeholders() {
        let d = card();
        let out = ReactRenderer.render_story_stub(&d, &id(&d));

        assert!(out.contains("import CustomCard from '.';"));
        assert!(out.contains("component: CustomCard,"));
        assert!(out.contains("satisfies Meta<typeof CustomCard>;"));
        assert!(out.contains("export const CustomCardStory: Story = {"));
        assert!(out.contains("    title: 'title',\n"));
        assert!(out.contains("    variant: 'variant',\n"));
        assert!(out.contains("    subtitle: 'subtitle',\n"));
    }

    #[test]
    fn story_without_props_has_empty_args() {
        let d = empty();
        let out = ReactRenderer.render_story_stub(&d, &id(&d));
        assert!(out.contains("  args: {},\n"));
    }

    #[test]
    fn each_prop_appears_once_per_declaration_site() {
        let d = card();
        let identifier = id(&d);
        let component = ReactRenderer.render_component_stub(&d, &identifier);
        let model = ReactRenderer.render_type_definition(&d, &identifier);
        let story = ReactRenderer.render_story_stub(&d, &identifier);

        for prop in ["title", "variant", "subtitle"] {
            assert_eq!(component.matches(&format!("  {prop}")).count(), 1, "{prop}");
            assert_eq!(model.matches(&format!("  {prop}")).count(), 1, "{prop}");
            assert_eq!(story.matches(&format!("    {prop}:")).count(), 1, "{prop}");
        }
    }
}
