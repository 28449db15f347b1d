//! Snapshot tests using the insta crate.
//!
//! Snapshots pin the on-disk settings format and the serialized forms of the
//! types that appear in it. To update after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use floatcam::input::Position;
use floatcam::settings::Settings;
use floatcam::types::BackgroundStyle;

#[test]
fn snapshot_default_settings_file() {
    let json = serde_json::to_string_pretty(&Settings::default()).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "background_style": "blur",
      "initial_position": {
        "x": 50.0,
        "y": 100.0
      },
      "copy_feedback_ms": 2000,
      "show_source_panel": true
    }
    "#);
}

#[test]
fn snapshot_customized_settings_file() {
    let settings = Settings {
        background_style: BackgroundStyle::Gradient,
        initial_position: Position::new(-20.5, 300.0),
        copy_feedback_ms: 1500,
        show_source_panel: false,
    };
    let json = serde_json::to_string_pretty(&settings).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "background_style": "gradient",
      "initial_position": {
        "x": -20.5,
        "y": 300.0
      },
      "copy_feedback_ms": 1500,
      "show_source_panel": false
    }
    "#);
}

#[test]
fn snapshot_background_styles() {
    insta::assert_json_snapshot!(BackgroundStyle::ALL, @r#"
    [
      "blur",
      "color",
      "gradient"
    ]
    "#);
}
