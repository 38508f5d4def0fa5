//! Builder for a single visual container
//!
//! The builder tracks whether its component has been wrapped in a scroll
//! pane. Wrapping happens on the first scroll policy call and never twice;
//! from then on border, size, location and preferred size apply to the
//! scroll pane, while children still go to the wrapped view.

use log::debug;

use winforge_core::{BoxedSource, BuildError, GeometryService, Result};
use winforge_types::{
    Border, Component, ComponentAttrs, Container, Dimension, Point, ScrollPane, ScrollPolicy,
};

enum ContainerState {
    Bare(Component),
    Scrollable(ScrollPane),
}

impl ContainerState {
    fn new(component: Component) -> Self {
        match component {
            Component::ScrollPane(pane) => ContainerState::Scrollable(pane),
            other => ContainerState::Bare(other),
        }
    }

    fn attrs_mut(&mut self) -> &mut ComponentAttrs {
        match self {
            ContainerState::Bare(component) => component.attrs_mut(),
            ContainerState::Scrollable(pane) => &mut pane.attrs,
        }
    }

    /// The container children are added to
    fn child_target(&mut self) -> Result<&mut Container> {
        let target = match self {
            ContainerState::Bare(component) => component,
            ContainerState::Scrollable(pane) => pane.view.as_mut(),
        };
        match target {
            Component::Container(container) => Ok(container),
            Component::Widget(widget) => Err(BuildError::construction(format!(
                "cannot add children to widget {:?}",
                widget.attrs.name.as_deref().unwrap_or("<unnamed>")
            ))),
            Component::ScrollPane(_) => Err(BuildError::construction(
                "cannot add children to a scroll pane's nested scroll pane",
            )),
        }
    }
}

/// Configures one component (usually a panel) and optionally makes it
/// scrollable.
pub struct ContainerBuilder<'g> {
    geometry: &'g GeometryService,
    state: ContainerState,
}

impl<'g> ContainerBuilder<'g> {
    /// Start from the component produced by `factory`, evaluated immediately.
    ///
    /// A factory that already returns a scroll pane counts as wrapped.
    pub fn new<F, C>(geometry: &'g GeometryService, factory: F) -> Self
    where
        F: FnOnce() -> C,
        C: Into<Component>,
    {
        Self {
            geometry,
            state: ContainerState::new(factory().into()),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.state.attrs_mut().name = Some(name.into());
        self
    }

    pub fn with_border<F>(mut self, border_factory: F) -> Self
    where
        F: FnOnce() -> Border,
    {
        self.state.attrs_mut().border = Some(border_factory());
        self
    }

    /// Set an explicit size after checking it fits the screen
    pub fn with_size(mut self, width: i32, height: i32) -> Result<Self> {
        self.geometry.check_bounds(width, height)?;
        self.state.attrs_mut().size = Some(Dimension::new(width, height));
        Ok(self)
    }

    pub fn with_preferred_size(mut self, preferred_size: Dimension) -> Self {
        self.state.attrs_mut().preferred_size = Some(preferred_size);
        self
    }

    /// Set an explicit location after checking it is positive and on the screen
    pub fn with_location(mut self, x: i32, y: i32) -> Result<Self> {
        self.geometry.check_location(x, y)?;
        self.state.attrs_mut().location = Some(Point::new(x, y));
        Ok(self)
    }

    /// Append a child. Fails if the component cannot hold children.
    pub fn with_component<F, C>(self, child_factory: F) -> Result<Self>
    where
        F: FnOnce() -> C,
        C: Into<Component>,
    {
        self.add_child(None, child_factory().into())
    }

    /// Append a child at a layout position key such as `"north"`
    pub fn with_component_at<F, C>(self, position: impl Into<String>, child_factory: F) -> Result<Self>
    where
        F: FnOnce() -> C,
        C: Into<Component>,
    {
        self.add_child(Some(position.into()), child_factory().into())
    }

    /// Append a child from a fallible factory; its error becomes the source
    /// of a construction error.
    pub fn try_with_component<F, C, E>(self, child_factory: F) -> Result<Self>
    where
        F: FnOnce() -> std::result::Result<C, E>,
        C: Into<Component>,
        E: Into<BoxedSource>,
    {
        let child = child_factory().map_err(|e| BuildError::wrap("child factory failed", e))?;
        self.add_child(None, child.into())
    }

    fn add_child(mut self, position: Option<String>, child: Component) -> Result<Self> {
        self.state.child_target()?.add(position, child);
        Ok(self)
    }

    pub fn with_vertical_scroll_bar_policy(self, policy: ScrollPolicy) -> Self {
        self.with_scroll_pane(|pane| pane.vertical_policy = policy)
    }

    pub fn with_horizontal_scroll_bar_policy(self, policy: ScrollPolicy) -> Self {
        self.with_scroll_pane(|pane| pane.horizontal_policy = policy)
    }

    /// Wrap the component in a scroll pane unless already wrapped, then
    /// apply `configure` to the pane.
    fn with_scroll_pane(self, configure: impl FnOnce(&mut ScrollPane)) -> Self {
        let mut pane = match self.state {
            ContainerState::Scrollable(pane) => pane,
            ContainerState::Bare(component) => {
                debug!(
                    "Wrapping component {:?} in a scroll pane",
                    component.name().unwrap_or("<unnamed>")
                );
                ScrollPane::new(component)
            }
        };
        configure(&mut pane);
        Self {
            geometry: self.geometry,
            state: ContainerState::Scrollable(pane),
        }
    }

    pub fn is_scrollable(&self) -> bool {
        matches!(self.state, ContainerState::Scrollable(_))
    }

    /// The configured component, or its scroll pane if it was wrapped
    pub fn build(self) -> Component {
        match self.state {
            ContainerState::Bare(component) => component,
            ContainerState::Scrollable(pane) => Component::ScrollPane(pane),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winforge_types::{position, Color, Layout, Widget};

    fn geometry() -> GeometryService {
        GeometryService::with_bounds(800, 600)
    }

    #[test]
    fn test_bare_container_configuration() {
        let geometry = geometry();
        let component = ContainerBuilder::new(&geometry, || Container::new(Layout::Border))
            .with_name("panel")
            .with_border(|| Border::titled("Details"))
            .with_size(200, 100)
            .unwrap()
            .with_location(10, 20)
            .unwrap()
            .with_preferred_size(Dimension::new(180, 90))
            .with_component_at(position::NORTH, || Widget::label("Header"))
            .unwrap()
            .with_component(|| Widget::button("OK"))
            .unwrap()
            .build();

        let Component::Container(container) = component else {
            panic!("expected a bare container");
        };
        assert_eq!(container.attrs.name.as_deref(), Some("panel"));
        assert_eq!(container.attrs.border, Some(Border::titled("Details")));
        assert_eq!(container.attrs.size, Some(Dimension::new(200, 100)));
        assert_eq!(container.attrs.location, Some(Point::new(10, 20)));
        assert_eq!(container.attrs.preferred_size, Some(Dimension::new(180, 90)));
        assert_eq!(container.children.len(), 2);
        assert_eq!(container.children[0].position.as_deref(), Some(position::NORTH));
        assert_eq!(container.children[1].position, None);
    }

    #[test]
    fn test_size_and_location_fail_fast() {
        let geometry = geometry();
        let builder = || ContainerBuilder::new(&geometry, Container::panel);

        assert!(builder().with_size(801, 10).err().unwrap().is_invalid_geometry());
        assert!(builder().with_size(10, 0).err().unwrap().is_invalid_geometry());
        assert!(builder().with_location(-1, 10).err().unwrap().is_invalid_geometry());
        assert!(builder().with_location(0, 10).err().unwrap().is_invalid_geometry());
        assert!(builder().with_location(10, 0).err().unwrap().is_invalid_geometry());
        assert!(builder().with_location(10, 700).err().unwrap().is_invalid_geometry());
    }

    #[test]
    fn test_scroll_policies_wrap_exactly_once() {
        let geometry = geometry();
        let builder = ContainerBuilder::new(&geometry, Container::panel)
            .with_vertical_scroll_bar_policy(ScrollPolicy::AlwaysShow);
        assert!(builder.is_scrollable());

        let component = builder
            .with_horizontal_scroll_bar_policy(ScrollPolicy::NeverShow)
            .build();

        let Component::ScrollPane(pane) = component else {
            panic!("expected a scroll pane");
        };
        assert_eq!(pane.vertical_policy, ScrollPolicy::AlwaysShow);
        assert_eq!(pane.horizontal_policy, ScrollPolicy::NeverShow);
        assert!(matches!(*pane.view, Component::Container(_)));
    }

    #[test]
    fn test_unset_policy_defaults_to_as_needed() {
        let geometry = geometry();
        let component = ContainerBuilder::new(&geometry, || Widget::text_area("", 10, 40))
            .with_vertical_scroll_bar_policy(ScrollPolicy::AlwaysShow)
            .build();
        let Component::ScrollPane(pane) = component else {
            panic!("expected a scroll pane");
        };
        assert_eq!(pane.horizontal_policy, ScrollPolicy::ShowAsNeeded);
        assert!(matches!(*pane.view, Component::Widget(_)));
    }

    #[test]
    fn test_scroll_pane_factory_is_not_rewrapped() {
        let geometry = geometry();
        let component = ContainerBuilder::new(&geometry, || ScrollPane::new(Container::panel().into()))
            .with_vertical_scroll_bar_policy(ScrollPolicy::NeverShow)
            .build();
        let Component::ScrollPane(pane) = component else {
            panic!("expected a scroll pane");
        };
        assert!(matches!(*pane.view, Component::Container(_)));
    }

    #[test]
    fn test_attributes_after_wrapping_apply_to_the_pane() {
        let geometry = geometry();
        let component = ContainerBuilder::new(&geometry, Container::panel)
            .with_border(|| Border::line(Color::BLACK, 1))
            .with_vertical_scroll_bar_policy(ScrollPolicy::AlwaysShow)
            .with_size(300, 200)
            .unwrap()
            .with_component(|| Widget::label("inside"))
            .unwrap()
            .build();

        let Component::ScrollPane(pane) = component else {
            panic!("expected a scroll pane");
        };
        assert_eq!(pane.attrs.size, Some(Dimension::new(300, 200)));
        assert_eq!(pane.attrs.border, None);

        let Component::Container(view) = *pane.view else {
            panic!("expected the original container as the view");
        };
        assert_eq!(view.attrs.border, Some(Border::line(Color::BLACK, 1)));
        assert_eq!(view.attrs.size, None);
        assert_eq!(view.children.len(), 1);
    }

    #[test]
    fn test_widgets_cannot_hold_children() {
        let geometry = geometry();
        let err = ContainerBuilder::new(&geometry, || Widget::label("leaf").named("leaf"))
            .with_component(|| Widget::button("child"))
            .err()
            .unwrap();
        assert!(err.is_construction());
        assert!(err.to_string().contains("leaf"));
    }

    #[test]
    fn test_fallible_factory_error_is_wrapped() {
        let geometry = geometry();
        let err = ContainerBuilder::new(&geometry, Container::panel)
            .try_with_component(|| -> std::result::Result<Widget, std::io::Error> {
                Err(std::io::Error::new(std::io::ErrorKind::NotFound, "icon missing"))
            })
            .err()
            .unwrap();
        assert!(err.is_construction());
        assert_eq!(
            std::error::Error::source(&err).map(|s| s.to_string()),
            Some("icon missing".to_string())
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn policy() -> impl Strategy<Value = ScrollPolicy> {
            prop_oneof![
                Just(ScrollPolicy::AlwaysShow),
                Just(ScrollPolicy::NeverShow),
                Just(ScrollPolicy::ShowAsNeeded),
            ]
        }

        proptest! {
            #[test]
            fn any_policy_sequence_wraps_once(calls in prop::collection::vec((any::<bool>(), policy()), 1..8)) {
                let geometry = geometry();
                let mut builder = ContainerBuilder::new(&geometry, Container::panel);
                let mut vertical = ScrollPolicy::ShowAsNeeded;
                let mut horizontal = ScrollPolicy::ShowAsNeeded;
                for (is_vertical, policy) in calls {
                    builder = if is_vertical {
                        vertical = policy;
                        builder.with_vertical_scroll_bar_policy(policy)
                    } else {
                        horizontal = policy;
                        builder.with_horizontal_scroll_bar_policy(policy)
                    };
                }

                let Component::ScrollPane(pane) = builder.build() else {
                    panic!("expected a scroll pane");
                };
                prop_assert_eq!(pane.vertical_policy, vertical);
                prop_assert_eq!(pane.horizontal_policy, horizontal);
                prop_assert!(matches!(*pane.view, Component::Container(_)));
            }
        }
    }
}
