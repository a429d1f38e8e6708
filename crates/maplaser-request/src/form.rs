//! Form state collector.
//!
//! [`MapForm`] holds the current value of every input on the map form and
//! the last synced area selection. Each input setter re-evaluates the submit
//! gate and returns it: submitting is allowed only when the name is non-empty
//! and the email passes [`is_email`].

use crate::email::is_email;
use crate::layers::Layer;
use crate::request::{ContourOptions, MapRequest, RequestBounds, UserInfo};
use crate::selection::AreaSelection;
use crate::{RequestError, Result};
use std::collections::BTreeSet;

/// Contour interval shown when the form is first opened, in metres.
pub const DEFAULT_CONTOUR_INTERVAL: f64 = 10.0;

/// Current contents of the map form.
#[derive(Debug, Clone)]
pub struct MapForm {
    name: String,
    email: String,
    contour_interval: f64,
    layers: BTreeSet<String>,
    selection: Option<AreaSelection>,
    submit_enabled: bool,
}

impl Default for MapForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MapForm {
    /// An empty form with no selection synced yet.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            contour_interval: DEFAULT_CONTOUR_INTERVAL,
            layers: BTreeSet::new(),
            selection: None,
            submit_enabled: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn contour_interval(&self) -> f64 {
        self.contour_interval
    }

    /// Checked layer values.
    pub fn layers(&self) -> &BTreeSet<String> {
        &self.layers
    }

    pub fn selection(&self) -> Option<&AreaSelection> {
        self.selection.as_ref()
    }

    /// Whether the submit action is currently enabled.
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    fn refresh_gate(&mut self) -> bool {
        self.submit_enabled = !self.name.is_empty() && is_email(&self.email);
        self.submit_enabled
    }

    /// Edit the name field.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        self.name = name.into();
        self.refresh_gate()
    }

    /// Edit the email field.
    pub fn set_email(&mut self, email: impl Into<String>) -> bool {
        self.email = email.into();
        self.refresh_gate()
    }

    /// Edit the contour interval.
    pub fn set_contour_interval(&mut self, interval: f64) -> Result<bool> {
        if !interval.is_finite() || interval <= 0.0 {
            return Err(RequestError::InvalidContourInterval(interval));
        }
        self.contour_interval = interval;
        Ok(self.refresh_gate())
    }

    /// Check or uncheck a layer checkbox by its raw value.
    pub fn set_layer_checked(&mut self, value: impl Into<String>, checked: bool) -> bool {
        let value = value.into();
        if checked {
            self.layers.insert(value);
        } else {
            self.layers.remove(&value);
        }
        self.refresh_gate()
    }

    /// Check or uncheck a catalog layer.
    pub fn toggle_layer(&mut self, layer: Layer, checked: bool) -> bool {
        self.set_layer_checked(layer.as_str(), checked)
    }

    /// Check or uncheck a layer by identifier, rejecting ids outside the catalog.
    pub fn select_layer(&mut self, id: &str, checked: bool) -> Result<bool> {
        let layer: Layer = id.parse()?;
        Ok(self.toggle_layer(layer, checked))
    }

    /// Copy the current area selection into the form.
    pub fn sync_selection(&mut self, selection: &AreaSelection) -> bool {
        self.selection = Some(*selection);
        self.refresh_gate()
    }

    /// Collect the form into a request record.
    pub fn build_request(&self) -> Result<MapRequest> {
        if self.name.is_empty() {
            return Err(RequestError::MissingName);
        }
        if !is_email(&self.email) {
            return Err(RequestError::InvalidEmail(self.email.clone()));
        }
        let selection = self.selection.as_ref().ok_or(RequestError::NoSelection)?;

        Ok(MapRequest {
            user: UserInfo {
                name: self.name.clone(),
                email: self.email.clone(),
            },
            bounds: RequestBounds::new(selection.bounds(), selection.dimensions()),
            contours: ContourOptions {
                interval: self.contour_interval,
            },
            layers: self.layers.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_closed_on_new_form() {
        let form = MapForm::new();
        assert!(!form.submit_enabled());
    }

    #[test]
    fn test_gate_requires_name_and_valid_email() {
        let mut form = MapForm::new();
        assert!(!form.set_email("ada@example.org"));
        assert!(form.set_name("Ada"));
        assert!(!form.set_email("ada@example"));
        assert!(form.set_email("ada@example.org"));
        assert!(!form.set_name(""));
    }

    #[test]
    fn test_gate_reported_by_every_setter() {
        let mut form = MapForm::new();
        form.set_name("Ada");
        form.set_email("ada@example.org");
        assert!(form.toggle_layer(Layer::Water, true));
        assert!(form.set_contour_interval(5.0).unwrap());
        assert!(form.sync_selection(&AreaSelection::default()));
    }

    #[test]
    fn test_layers_toggle() {
        let mut form = MapForm::new();
        form.toggle_layer(Layer::Contours, true);
        form.set_layer_checked("buildings", true);
        form.toggle_layer(Layer::Contours, false);
        assert_eq!(form.layers().iter().collect::<Vec<_>>(), vec!["buildings"]);
    }

    #[test]
    fn test_select_layer_rejects_unknown() {
        let mut form = MapForm::new();
        assert!(form.select_layer("motorways", true).is_ok());
        assert!(matches!(
            form.select_layer("volcanoes", true),
            Err(RequestError::UnknownLayer(_))
        ));
        assert_eq!(form.layers().len(), 1);
    }

    #[test]
    fn test_contour_interval_validation() {
        let mut form = MapForm::new();
        assert!(form.set_contour_interval(0.0).is_err());
        assert!(form.set_contour_interval(f64::NAN).is_err());
        assert_eq!(form.contour_interval(), DEFAULT_CONTOUR_INTERVAL);
    }

    #[test]
    fn test_build_request_errors() {
        let mut form = MapForm::new();
        assert!(matches!(form.build_request(), Err(RequestError::MissingName)));
        form.set_name("Ada");
        assert!(matches!(form.build_request(), Err(RequestError::InvalidEmail(_))));
        form.set_email("ada@example.org");
        assert!(matches!(form.build_request(), Err(RequestError::NoSelection)));
        form.sync_selection(&AreaSelection::default());
        assert!(form.build_request().is_ok());
    }
}
