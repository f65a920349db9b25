use bevy::color::Color;
use bevy::prelude::*;

#[derive(Bundle)]
pub struct LabelBundle {
    pub text: Text,
    pub font: TextFont,
    pub color: TextColor,
    pub node: Node,
}

impl LabelBundle {
    pub fn new(text: &str, font_size: f32, color: Color) -> Self {
        Self {
            text: Text::new(text),
            font: TextFont {
                font_size,
                ..default()
            },
            color: TextColor(color),
            node: Node::default(),
        }
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.node = node;
        self
    }
}

#[derive(Bundle)]
pub struct OverlayColumnBundle {
    pub node: Node,
}

impl OverlayColumnBundle {
    /// Column pinned to the top edge, centered horizontally.
    pub fn top_center(top: f32) -> Self {
        Self {
            node: Node {
                position_type: PositionType::Absolute,
                top: Val::Px(top),
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(4.0),
                ..default()
            },
        }
    }
}
