//! Animated properties and their CSS rendering.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::viewport::ElementRect;

/// DOM id of an animated element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of the `index`-th child in a staggered group, e.g. `works-item-2`.
    pub fn indexed(prefix: &str, index: usize) -> Self {
        Self(format!("{prefix}-{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A single animatable property of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    Opacity,
    /// Horizontal translation in px.
    X,
    /// Vertical translation in px.
    Y,
    /// Horizontal translation in percent of the element width.
    XPercent,
    /// Vertical translation in percent of the element height.
    YPercent,
    Scale,
    ScaleX,
    /// Rotation around the z axis in degrees.
    Rotate,
    RotateX,
    RotateY,
    /// Blur radius in px.
    Blur,
    /// Right inset of a clip-path rectangle in percent.
    ClipRight,
    StrokeDashOffset,
}

impl Property {
    /// Value the element has when nothing animates it.
    pub fn rest_value(self) -> f64 {
        match self {
            Property::Opacity | Property::Scale | Property::ScaleX => 1.0,
            _ => 0.0,
        }
    }

    /// CSS declaration this property is rendered into.
    pub fn css_group(self) -> &'static str {
        match self {
            Property::Opacity => "opacity",
            Property::Blur => "filter",
            Property::ClipRight => "clip-path",
            Property::StrokeDashOffset => "stroke-dashoffset",
            _ => "transform",
        }
    }
}

/// Ownership key for the one-driver-per-property invariant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyKey {
    pub element: ElementId,
    pub property: Property,
}

impl PropertyKey {
    pub fn new(element: ElementId, property: Property) -> Self {
        Self { element, property }
    }
}

/// Current animated values of one element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementStyle {
    values: BTreeMap<Property, f64>,
}

impl ElementStyle {
    pub fn get(&self, property: Property) -> f64 {
        self.values
            .get(&property)
            .copied()
            .unwrap_or_else(|| property.rest_value())
    }

    pub fn set(&mut self, property: Property, value: f64) {
        self.values.insert(property, value);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Undo this style's translation and scale on a rect measured with it
    /// applied, giving the rect the element has in layout. Scale is about
    /// the centre; rotations are not undone.
    pub fn layout_rect(&self, rendered: &ElementRect) -> ElementRect {
        let scale_x = self.get(Property::Scale) * self.get(Property::ScaleX);
        let scale_y = self.get(Property::Scale);
        let width = if scale_x.abs() > 1e-6 { rendered.width / scale_x } else { rendered.width };
        let height = if scale_y.abs() > 1e-6 { rendered.height / scale_y } else { rendered.height };
        let (center_x, center_y) = rendered.center();
        let shift_x = self.get(Property::X) + self.get(Property::XPercent) / 100.0 * width;
        let shift_y = self.get(Property::Y) + self.get(Property::YPercent) / 100.0 * height;
        ElementRect::new(
            center_y - shift_y - height / 2.0,
            center_x - shift_x - width / 2.0,
            width,
            height,
        )
    }

    /// Render the set values as CSS declarations, keyed by CSS property name.
    pub fn declarations(&self) -> BTreeMap<&'static str, String> {
        let mut out = BTreeMap::new();
        let has = |p: Property| self.values.contains_key(&p);

        if has(Property::Opacity) {
            out.insert("opacity", format_number(self.get(Property::Opacity).clamp(0.0, 1.0)));
        }
        if has(Property::Blur) {
            out.insert("filter", format!("blur({}px)", format_number(self.get(Property::Blur).max(0.0))));
        }
        if has(Property::ClipRight) {
            out.insert("clip-path", format!("inset(0 {}% 0 0)", format_number(self.get(Property::ClipRight))));
        }
        if has(Property::StrokeDashOffset) {
            out.insert("stroke-dashoffset", format_number(self.get(Property::StrokeDashOffset)));
        }

        let mut transform = Vec::new();
        if has(Property::XPercent) || has(Property::YPercent) {
            transform.push(format!(
                "translate({}%, {}%)",
                format_number(self.get(Property::XPercent)),
                format_number(self.get(Property::YPercent))
            ));
        }
        if has(Property::X) || has(Property::Y) {
            transform.push(format!(
                "translate3d({}px, {}px, 0)",
                format_number(self.get(Property::X)),
                format_number(self.get(Property::Y))
            ));
        }
        if has(Property::Rotate) {
            transform.push(format!("rotate({}deg)", format_number(self.get(Property::Rotate))));
        }
        if has(Property::RotateY) {
            transform.push(format!("rotateY({}deg)", format_number(self.get(Property::RotateY))));
        }
        if has(Property::RotateX) {
            transform.push(format!("rotateX({}deg)", format_number(self.get(Property::RotateX))));
        }
        if has(Property::Scale) {
            transform.push(format!("scale({})", format_number(self.get(Property::Scale))));
        }
        if has(Property::ScaleX) {
            transform.push(format!("scaleX({})", format_number(self.get(Property::ScaleX))));
        }
        if !transform.is_empty() {
            out.insert("transform", transform.join(" "));
        }

        out
    }
}

fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// One batch of CSS writes for an element. `None` removes the declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleWrite {
    pub id: ElementId,
    pub declarations: BTreeMap<&'static str, Option<String>>,
}

impl StyleWrite {
    /// Write that removes every declaration the animation layer may have set.
    pub fn revert(id: ElementId) -> Self {
        let declarations = ["opacity", "filter", "clip-path", "stroke-dashoffset", "transform"]
            .into_iter()
            .map(|name| (name, None))
            .collect();
        Self { id, declarations }
    }

    pub fn from_style(id: ElementId, style: &ElementStyle) -> Self {
        let declarations = style
            .declarations()
            .into_iter()
            .map(|(name, value)| (name, Some(value)))
            .collect();
        Self { id, declarations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_properties_read_rest_values() {
        let style = ElementStyle::default();
        assert_eq!(style.get(Property::Opacity), 1.0);
        assert_eq!(style.get(Property::Y), 0.0);
        assert!(style.declarations().is_empty());
    }

    #[test]
    fn test_transform_components_compose_in_order() {
        let mut style = ElementStyle::default();
        style.set(Property::Scale, 1.2);
        style.set(Property::Y, 60.0);
        style.set(Property::RotateX, 30.0);
        let css = style.declarations();
        assert_eq!(
            css.get("transform").map(String::as_str),
            Some("translate3d(0px, 60px, 0) rotateX(30deg) scale(1.2)")
        );
    }

    #[test]
    fn test_non_transform_groups() {
        let mut style = ElementStyle::default();
        style.set(Property::Opacity, 1.4);
        style.set(Property::Blur, 10.0);
        style.set(Property::ClipRight, 100.0);
        let css = style.declarations();
        assert_eq!(css.get("opacity").map(String::as_str), Some("1"));
        assert_eq!(css.get("filter").map(String::as_str), Some("blur(10px)"));
        assert_eq!(css.get("clip-path").map(String::as_str), Some("inset(0 100% 0 0)"));
        assert!(!css.contains_key("transform"));
    }

    #[test]
    fn test_revert_clears_every_group() {
        let write = StyleWrite::revert(ElementId::new("hero-image"));
        assert_eq!(write.declarations.len(), 5);
        assert!(write.declarations.values().all(Option::is_none));
    }

    #[test]
    fn test_layout_rect_removes_own_translation_and_scale() {
        let mut style = ElementStyle::default();
        style.set(Property::Y, 30.0);
        style.set(Property::YPercent, 10.0);
        style.set(Property::Scale, 2.0);
        // Layout 100x50 at (20, 200); scaled about the centre, then shifted
        // down by 30px plus 10% of the layout height.
        let rendered = ElementRect::new(200.0 - 25.0 + 35.0, 20.0 - 50.0, 200.0, 100.0);
        let layout = style.layout_rect(&rendered);
        assert!((layout.top - 200.0).abs() < 1e-9);
        assert!((layout.left - 20.0).abs() < 1e-9);
        assert_eq!((layout.width, layout.height), (100.0, 50.0));

        assert_eq!(ElementStyle::default().layout_rect(&rendered), rendered);
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let mut style = ElementStyle::default();
        style.set(Property::X, -0.0001);
        assert_eq!(
            style.declarations().get("transform").map(String::as_str),
            Some("translate3d(0px, 0px, 0)")
        );
    }
}
