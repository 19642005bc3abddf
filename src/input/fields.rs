use super::{BodyStyle, EngineType, FeatureInput, FuelType};
use std::{collections::HashMap, str::FromStr};
use tracing::warn;

/// Lower bound of every integer-valued widget.
pub const INT_MIN: i64 = 0;
/// Lower bound of every float-valued widget.
pub const FLOAT_MIN: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Widget {
    Text { default: &'static str },
    Select { options: &'static [&'static str] },
    Integer { min: i64 },
    Float { min: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Form/JSON key.
    pub name: &'static str,
    pub label: &'static str,
    pub widget: Widget,
}

/// Sidebar widgets in display order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "company_name",
        label: "Car Company Name",
        widget: Widget::Text { default: "Toyota" },
    },
    FieldSpec {
        name: "engine_type",
        label: "Engine Type",
        widget: Widget::Select {
            options: EngineType::LABELS,
        },
    },
    FieldSpec {
        name: "body_style",
        label: "Car Body",
        widget: Widget::Select {
            options: BodyStyle::LABELS,
        },
    },
    FieldSpec {
        name: "fuel_type",
        label: "Fuel Type",
        widget: Widget::Select {
            options: FuelType::LABELS,
        },
    },
    FieldSpec {
        name: "highway_mpg",
        label: "Highway MPG",
        widget: Widget::Integer { min: INT_MIN },
    },
    FieldSpec {
        name: "city_mpg",
        label: "City MPG",
        widget: Widget::Integer { min: INT_MIN },
    },
    FieldSpec {
        name: "peak_rpm",
        label: "Peak RPM",
        widget: Widget::Integer { min: INT_MIN },
    },
    FieldSpec {
        name: "horsepower",
        label: "Horsepower",
        widget: Widget::Integer { min: INT_MIN },
    },
    FieldSpec {
        name: "curb_weight",
        label: "Curb Weight",
        widget: Widget::Integer { min: INT_MIN },
    },
    FieldSpec {
        name: "height",
        label: "Car Height",
        widget: Widget::Float { min: FLOAT_MIN },
    },
    FieldSpec {
        name: "width",
        label: "Car Width",
        widget: Widget::Float { min: FLOAT_MIN },
    },
    FieldSpec {
        name: "length",
        label: "Car Length",
        widget: Widget::Float { min: FLOAT_MIN },
    },
    FieldSpec {
        name: "wheelbase",
        label: "Wheelbase",
        widget: Widget::Float { min: FLOAT_MIN },
    },
    FieldSpec {
        name: "symboling",
        label: "Symboling",
        widget: Widget::Integer { min: INT_MIN },
    },
];

impl FeatureInput {
    /// Builds the widget state from submitted form values.
    ///
    /// Missing or unparseable numbers take the widget default, numbers below
    /// the minimum are clamped to it, and unknown select options fall back to
    /// the first option. An empty company name is kept as-is.
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            company_name: form
                .get("company_name")
                .cloned()
                .unwrap_or(defaults.company_name),
            engine_type: select(form, "engine_type"),
            body_style: select(form, "body_style"),
            fuel_type: select(form, "fuel_type"),
            highway_mpg: integer(form, "highway_mpg"),
            city_mpg: integer(form, "city_mpg"),
            peak_rpm: integer(form, "peak_rpm"),
            horsepower: integer(form, "horsepower"),
            curb_weight: integer(form, "curb_weight"),
            height: float(form, "height"),
            width: float(form, "width"),
            length: float(form, "length"),
            wheelbase: float(form, "wheelbase"),
            symboling: integer(form, "symboling"),
        }
    }

    /// Applies the widgets' minimum bounds to every numeric field.
    pub fn clamped(mut self) -> Self {
        for value in [
            &mut self.highway_mpg,
            &mut self.city_mpg,
            &mut self.peak_rpm,
            &mut self.horsepower,
            &mut self.curb_weight,
            &mut self.symboling,
        ] {
            *value = (*value).max(INT_MIN);
        }

        for value in [
            &mut self.height,
            &mut self.width,
            &mut self.length,
            &mut self.wheelbase,
        ] {
            *value = clamp_float(*value);
        }

        self
    }

    /// Current value of a widget, formatted for pre-filling the form.
    pub fn display_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "company_name" => self.company_name.clone(),
            "engine_type" => self.engine_type.to_string(),
            "body_style" => self.body_style.to_string(),
            "fuel_type" => self.fuel_type.to_string(),
            "highway_mpg" => self.highway_mpg.to_string(),
            "city_mpg" => self.city_mpg.to_string(),
            "peak_rpm" => self.peak_rpm.to_string(),
            "horsepower" => self.horsepower.to_string(),
            "curb_weight" => self.curb_weight.to_string(),
            "height" => self.height.to_string(),
            "width" => self.width.to_string(),
            "length" => self.length.to_string(),
            "wheelbase" => self.wheelbase.to_string(),
            "symboling" => self.symboling.to_string(),
            _ => return None,
        };
        Some(value)
    }
}

fn select<T>(form: &HashMap<String, String>, name: &str) -> T
where
    T: FromStr<Err = String> + Default,
{
    match form.get(name) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            warn!(field = name, "{}, using default option", e);
            T::default()
        }),
        None => T::default(),
    }
}

fn integer(form: &HashMap<String, String>, name: &str) -> i64 {
    form.get(name)
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .unwrap_or(INT_MIN)
        .max(INT_MIN)
}

fn float(form: &HashMap<String, String>, name: &str) -> f64 {
    form.get(name)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .map(clamp_float)
        .unwrap_or(FLOAT_MIN)
}

fn clamp_float(value: f64) -> f64 {
    if value.is_nan() {
        FLOAT_MIN
    } else {
        value.max(FLOAT_MIN)
    }
}
