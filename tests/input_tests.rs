use car_price_dashboard::input::{
    BodyStyle, EngineType, FIELDS, FLOAT_MIN, FeatureInput, FuelType, INT_MIN, Widget,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashMap;

fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_defaults() {
    let input = FeatureInput::default();
    assert_eq!(input.company_name, "Toyota");
    assert_eq!(input.engine_type, EngineType::Ohv);
    assert_eq!(input.body_style, BodyStyle::Sedan);
    assert_eq!(input.fuel_type, FuelType::Gas);
    assert_eq!(input.horsepower, INT_MIN);
    assert_eq!(input.wheelbase, FLOAT_MIN);
}

#[test]
fn test_empty_form_gives_defaults() {
    assert_eq!(FeatureInput::from_form(&HashMap::new()), FeatureInput::default());
}

#[test]
fn test_widget_table() {
    let names: Vec<&str> = FIELDS.iter().map(|field| field.name).collect();
    assert_eq!(
        names,
        vec![
            "company_name",
            "engine_type",
            "body_style",
            "fuel_type",
            "highway_mpg",
            "city_mpg",
            "peak_rpm",
            "horsepower",
            "curb_weight",
            "height",
            "width",
            "length",
            "wheelbase",
            "symboling",
        ]
    );

    assert_eq!(FIELDS[0].widget, Widget::Text { default: "Toyota" });
    assert_eq!(
        FIELDS[1].widget,
        Widget::Select {
            options: &["OHV", "OHC", "DOHC", "SOHC"]
        }
    );
    assert_eq!(
        FIELDS[2].widget,
        Widget::Select {
            options: &["sedan", "hatchback", "wagon", "hardtop", "convertible"]
        }
    );
    assert_eq!(
        FIELDS[3].widget,
        Widget::Select {
            options: &["gas", "diesel"]
        }
    );

    for field in &FIELDS[4..] {
        match field.widget {
            Widget::Integer { min } => assert_eq!(min, 0),
            Widget::Float { min } => assert_eq!(min, 0.0),
            other => panic!("{} should be numeric, got {:?}", field.name, other),
        }
    }

    // Every widget must be able to show its current value.
    let input = FeatureInput::default();
    for field in FIELDS {
        assert!(input.display_value(field.name).is_some(), "{}", field.name);
    }
}

#[test]
fn test_full_form_is_parsed() {
    let input = FeatureInput::from_form(&form(&[
        ("company_name", "audi"),
        ("engine_type", "DOHC"),
        ("body_style", "hardtop"),
        ("fuel_type", "diesel"),
        ("highway_mpg", "30"),
        ("city_mpg", "24"),
        ("peak_rpm", "5500"),
        ("horsepower", "102"),
        ("curb_weight", "2337"),
        ("height", "54.3"),
        ("width", "66.2"),
        ("length", "176.6"),
        ("wheelbase", "99.8"),
        ("symboling", "2"),
    ]));

    assert_eq!(
        input,
        FeatureInput {
            company_name: "audi".to_string(),
            engine_type: EngineType::Dohc,
            body_style: BodyStyle::Hardtop,
            fuel_type: FuelType::Diesel,
            highway_mpg: 30,
            city_mpg: 24,
            peak_rpm: 5500,
            horsepower: 102,
            curb_weight: 2337,
            height: 54.3,
            width: 66.2,
            length: 176.6,
            wheelbase: 99.8,
            symboling: 2,
        }
    );
}

#[rstest]
#[case("-1", 0)]
#[case("-5000", 0)]
#[case("0", 0)]
#[case("150", 150)]
#[case(" 42 ", 42)]
#[case("abc", 0)]
#[case("", 0)]
#[case("2.5", 0)]
fn test_integer_widgets_clamp_to_min(#[case] raw: &str, #[case] expected: i64) {
    let input = FeatureInput::from_form(&form(&[("horsepower", raw), ("symboling", raw)]));
    assert_eq!(input.horsepower, expected);
    assert_eq!(input.symboling, expected);
}

#[rstest]
#[case("-0.5", 0.0)]
#[case("-100", 0.0)]
#[case("88.6", 88.6)]
#[case("NaN", 0.0)]
#[case("inf", 0.0)]
#[case("wide", 0.0)]
fn test_float_widgets_clamp_to_min(#[case] raw: &str, #[case] expected: f64) {
    let input = FeatureInput::from_form(&form(&[("width", raw)]));
    assert_eq!(input.width, expected);
}

#[test]
fn test_float_widgets_prefill_exact_value() {
    let input = FeatureInput::from_form(&form(&[("wheelbase", "88.625"), ("height", "54")]));
    assert_eq!(input.display_value("wheelbase").unwrap(), "88.625");
    assert_eq!(input.display_value("height").unwrap(), "54");

    // Re-submitting the pre-filled value keeps the widget state unchanged.
    let prefilled = input.display_value("wheelbase").unwrap();
    let resubmitted = FeatureInput::from_form(&form(&[("wheelbase", prefilled.as_str())]));
    assert_eq!(resubmitted.wheelbase, input.wheelbase);
}

#[test]
fn test_unknown_select_option_falls_back_to_first() {
    let input = FeatureInput::from_form(&form(&[
        ("engine_type", "rotor"),
        ("body_style", "SEDAN"),
        ("fuel_type", "electric"),
    ]));
    assert_eq!(input.engine_type, EngineType::Ohv);
    assert_eq!(input.body_style, BodyStyle::Sedan);
    assert_eq!(input.fuel_type, FuelType::Gas);
}

#[test]
fn test_empty_company_name_is_kept() {
    let input = FeatureInput::from_form(&form(&[("company_name", "")]));
    assert_eq!(input.company_name, "");
}

#[test]
fn test_clamped_applies_min_bounds() {
    let input = FeatureInput {
        horsepower: -1,
        curb_weight: -2548,
        highway_mpg: 27,
        height: -3.5,
        wheelbase: 95.0,
        ..FeatureInput::default()
    }
    .clamped();

    assert_eq!(input.horsepower, 0);
    assert_eq!(input.curb_weight, 0);
    assert_eq!(input.highway_mpg, 27);
    assert_eq!(input.height, 0.0);
    assert_eq!(input.wheelbase, 95.0);
}

#[test]
fn test_json_uses_option_strings() {
    let input: FeatureInput = serde_json::from_str(
        r#"{"company_name":"bmw","engine_type":"SOHC","body_style":"wagon","fuel_type":"diesel","horsepower":121}"#,
    )
    .unwrap();

    assert_eq!(input.engine_type, EngineType::Sohc);
    assert_eq!(input.body_style, BodyStyle::Wagon);
    assert_eq!(input.fuel_type, FuelType::Diesel);
    assert_eq!(input.horsepower, 121);
    assert_eq!(input.curb_weight, 0);

    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(json["engine_type"], "SOHC");
    assert_eq!(json["body_style"], "wagon");
}

#[test]
fn test_option_parsing() {
    assert_eq!("OHC".parse::<EngineType>().unwrap(), EngineType::Ohc);
    assert_eq!("convertible".parse::<BodyStyle>().unwrap(), BodyStyle::Convertible);
    assert!("ohc".parse::<EngineType>().is_err());
    assert_eq!(FuelType::Diesel.to_string(), "diesel");
}
