use crate::constants::ALIGNMENT_VIEWPORT_X;

/// UI-local state of a line view.
///
/// Two events drive it: the post-layout measurement of the station marker
/// closest to the origin, and trains appearing or disappearing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineViewState {
    /// Screen x of the closest station marker, once measured
    pub offset: Option<f64>,
    /// Set while the line has no trains, so the next train to appear takes
    /// focus. The render that shows that train still reads it as set; the
    /// presence change is applied after the frame is committed.
    pub focus_first_train: bool,
}

impl LineViewState {
    #[must_use]
    pub fn new(has_trains: bool) -> Self {
        Self {
            offset: None,
            focus_first_train: !has_trains,
        }
    }

    /// Records the first measurement. Later measurements are ignored for the
    /// rest of the mount.
    #[must_use]
    pub fn measure_offset(self, x: f64) -> Self {
        if self.offset.is_some() {
            return self;
        }
        Self {
            offset: Some(x),
            ..self
        }
    }

    #[must_use]
    pub fn train_presence_changed(self, has_trains: bool) -> Self {
        Self {
            focus_first_train: !has_trains,
            ..self
        }
    }

    /// Inline style for the view's container: the passthrough style, then a
    /// horizontal shift once the offset is known
    #[must_use]
    pub fn container_style(&self, passthrough: Option<&str>) -> String {
        let mut style = passthrough.unwrap_or_default().trim().to_string();
        if let Some(offset) = self.offset {
            if !style.is_empty() && !style.ends_with(';') {
                style.push(';');
            }
            if !style.is_empty() {
                style.push(' ');
            }
            style.push_str(&format!(
                "transform: translateX(calc({ALIGNMENT_VIEWPORT_X} - {offset}px));"
            ));
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_measured_once() {
        let state = LineViewState::new(true).measure_offset(120.5);
        assert_eq!(state.offset, Some(120.5));

        let state = state.measure_offset(300.0);
        assert_eq!(state.offset, Some(120.5));
    }

    #[test]
    fn test_focus_follows_train_presence() {
        let state = LineViewState::new(false);
        assert!(state.focus_first_train);

        let state = state.train_presence_changed(true);
        assert!(!state.focus_first_train);

        let state = state.train_presence_changed(false);
        assert!(state.focus_first_train);
    }

    #[test]
    fn test_presence_change_keeps_offset() {
        let state = LineViewState::new(true)
            .measure_offset(10.0)
            .train_presence_changed(false);
        assert_eq!(state.offset, Some(10.0));
    }

    #[test]
    fn test_container_style_without_offset() {
        let state = LineViewState::new(true);
        assert_eq!(state.container_style(None), "");
        assert_eq!(state.container_style(Some("opacity: 0.5")), "opacity: 0.5");
    }

    #[test]
    fn test_container_style_with_offset() {
        let state = LineViewState::new(true).measure_offset(42.0);
        assert_eq!(state.container_style(None), "transform: translateX(calc(33vw - 42px));");
        assert_eq!(
            state.container_style(Some("opacity: 0.5")),
            "opacity: 0.5; transform: translateX(calc(33vw - 42px));"
        );
    }
}
